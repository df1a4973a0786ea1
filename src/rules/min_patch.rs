//! Minimum maintenance patch of a release line before it may cross into the
//! next major line. A line without an entry may never cross.
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// (source major, source minor, minimum source patch)
const MIN_PATCH_RULES: &[(u32, u32, u32)] = &[
    // 3.12.x -> 4.0 requires at least 3.12.7
    (3, 12, 7),
];

static MIN_PATCH_FOR_MAJOR_UPGRADE: Lazy<HashMap<(u32, u32), u32>> = Lazy::new(|| {
    MIN_PATCH_RULES
        .iter()
        .map(|&(major, minor, patch)| ((major, minor), patch))
        .collect()
});

pub fn min_patch_for(major: u32, minor: u32) -> Option<u32> {
    MIN_PATCH_FOR_MAJOR_UPGRADE.get(&(major, minor)).copied()
}

/// All configured rules, ordered by source line
pub fn min_patch_rules() -> Vec<(u32, u32, u32)> {
    let mut rules: Vec<(u32, u32, u32)> = MIN_PATCH_FOR_MAJOR_UPGRADE
        .iter()
        .map(|(&(major, minor), &patch)| (major, minor, patch))
        .collect();
    rules.sort();
    rules
}
