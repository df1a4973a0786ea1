//! Reads the numeric patch out of a version's canonical string form
use std::fmt::Display;

use crate::parser::parse_patch_number;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Patch {
    /// Fewer than three dot-delimited segments
    Missing,
    Number(u32),
    /// Third segment has no leading digits, or they overflow
    Malformed,
}

pub fn patch_component<V: Display + ?Sized>(version: &V) -> Patch {
    let canonical = version.to_string();

    match canonical.split('.').nth(2) {
        None => Patch::Missing,
        Some(segment) => match parse_patch_number(segment) {
            Some(number) => Patch::Number(number),
            None => Patch::Malformed,
        },
    }
}

/// Numeric patch of `version`, or 0 when it cannot be determined. A 0 from a
/// malformed segment must not be read as a real patch; `patch_component`
/// keeps the cases apart.
pub fn extract_patch<V: Display + ?Sized>(version: &V) -> u32 {
    match patch_component(version) {
        Patch::Number(number) => number,
        Patch::Missing | Patch::Malformed => 0,
    }
}
