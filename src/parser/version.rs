//! Parses version strings, for example 3.12.7, v4.0 or 3.12.7-rc1
use super::common::VResult;
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{one_of, u32},
    combinator::opt,
    sequence::{preceded, tuple},
};

use crate::models::Version;

pub fn version(input: &str) -> VResult<Version> {
    let (rest, (_, major, _, minor, patch)) = tuple((
        opt(one_of("vV")),
        u32,
        tag("."),
        u32,
        opt(preceded(tag("."), patch_segment)),
    ))(input)?;

    Ok((rest, Version { major, minor, patch: patch.map(|p| p.to_string()) }))
}

/// Everything after the second dot, suffixes and further dots included
fn patch_segment(input: &str) -> VResult<&str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

/// Leading decimal digits of a patch segment, e.g. 7 from `7-rc1`. Fails
/// when there are none or they overflow.
pub fn patch_number(input: &str) -> VResult<u32> {
    u32(input)
}
