//! Upgrade rules decide whether a deployment may move from one version (and
//! license) to another before a rolling upgrade is started.
//!
//! Every check is a pure function of its inputs. `Ok(())` means the
//! transition is allowed; an `UpgradeError` carries the reason it is not.

mod engine;
mod error;
mod license_gate;
mod min_patch;
mod patch;

pub use engine::evaluate;
pub use error::{UpgradeError, Verdict};
pub use license_gate::evaluate_with_license;
pub use min_patch::{min_patch_for, min_patch_rules};
pub use patch::{extract_patch, patch_component, Patch};

use crate::models::{License, Policy, SemVer};

/// Minor versions may only increment by 1
pub fn check_upgrade_rules<F, T>(from: &F, to: &T) -> Verdict
where
    F: SemVer + ?Sized,
    T: SemVer + ?Sized,
{
    evaluate(from, to, Policy::Strict)
}

/// Allows jumping more than one minor version within a major line
pub fn check_soft_upgrade_rules<F, T>(from: &F, to: &T) -> Verdict
where
    F: SemVer + ?Sized,
    T: SemVer + ?Sized,
{
    evaluate(from, to, Policy::Permissive)
}

pub fn check_upgrade_rules_with_license<F, T>(from: &F, to: &T, from_license: License, to_license: License) -> Verdict
where
    F: SemVer + ?Sized,
    T: SemVer + ?Sized,
{
    evaluate_with_license(from, to, from_license, to_license, Policy::Strict)
}

pub fn check_soft_upgrade_rules_with_license<F, T>(
    from: &F,
    to: &T,
    from_license: License,
    to_license: License,
) -> Verdict
where
    F: SemVer + ?Sized,
    T: SemVer + ?Sized,
{
    evaluate_with_license(from, to, from_license, to_license, Policy::Permissive)
}
