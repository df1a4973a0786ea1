//! Reasons an upgrade can be denied. A denial is an ordinary outcome of an
//! evaluation, so these are returned rather than raised.
use thiserror::Error;

use crate::models::License;

/// Outcome of evaluating one proposed transition
pub type Verdict = Result<(), UpgradeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("Major versions are different: downgrade of major version is not allowed ({from} -> {to})")]
    MajorDowngrade { from: u32, to: u32 },

    #[error("Major versions are different: major versions may only increment by 1 ({from} -> {to})")]
    MajorSkip { from: u32, to: u32 },

    #[error("Major versions are different: major upgrades are only allowed to {to_major}.0, not {to_major}.{to_minor}")]
    MajorUpgradeNotToZero { to_major: u32, to_minor: u32 },

    #[error("Major versions are different: major upgrade from {from_major}.{from_minor} to {to_major}.0 is not allowed")]
    MajorUpgradeNotAllowedFromLine { from_major: u32, from_minor: u32, to_major: u32 },

    /// The source patch could not be read, which is malformed input rather
    /// than a patch that is too low.
    #[error("Invalid source version format: {version} has no numeric patch component")]
    InvalidSourceVersionFormat { version: String },

    #[error("Upgrade to {to_major}.0 requires at least {from_major}.{from_minor}.{min_patch}")]
    PatchTooLowForMajorUpgrade { from_major: u32, from_minor: u32, min_patch: u32, to_major: u32 },

    #[error("Downgrade of minor version is not allowed ({from} -> {to})")]
    MinorDowngrade { from: u32, to: u32 },

    #[error("Minor versions may only increment by 1 ({from} -> {to})")]
    MinorSkip { from: u32, to: u32 },

    #[error("Upgrade from {from} to {to} edition is not possible")]
    LicenseDowngrade { from: License, to: License },
}

impl UpgradeError {
    /// Stable identifier for machine consumers
    pub fn code(&self) -> &'static str {
        match self {
            Self::MajorDowngrade { .. } => "major_downgrade",
            Self::MajorSkip { .. } => "major_skip",
            Self::MajorUpgradeNotToZero { .. } => "major_upgrade_not_to_zero",
            Self::MajorUpgradeNotAllowedFromLine { .. } => "major_upgrade_not_allowed_from_line",
            Self::InvalidSourceVersionFormat { .. } => "invalid_source_version_format",
            Self::PatchTooLowForMajorUpgrade { .. } => "patch_too_low_for_major_upgrade",
            Self::MinorDowngrade { .. } => "minor_downgrade",
            Self::MinorSkip { .. } => "minor_skip",
            Self::LicenseDowngrade { .. } => "license_downgrade",
        }
    }
}
