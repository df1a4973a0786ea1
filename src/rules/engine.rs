//! Evaluates a version transition under a minor-version policy. The first
//! matching rule decides the verdict.
use tracing::{instrument, event, Level};

use super::error::{UpgradeError, Verdict};
use super::min_patch::min_patch_for;
use super::patch::{patch_component, Patch};
use crate::models::{Policy, SemVer};

#[instrument(skip_all, fields(from = %from, to = %to, policy = %policy))]
pub fn evaluate<F, T>(from: &F, to: &T, policy: Policy) -> Verdict
where
    F: SemVer + ?Sized,
    T: SemVer + ?Sized,
{
    let (from_major, to_major) = (from.major(), to.major());

    if to_major == from_major {
        return evaluate_minor(from, to, policy);
    }

    if to_major < from_major {
        event!(Level::DEBUG, "Rejecting major downgrade");
        return Err(UpgradeError::MajorDowngrade { from: from_major, to: to_major });
    }

    if to_major - from_major > 1 {
        event!(Level::DEBUG, "Rejecting skipped major version");
        return Err(UpgradeError::MajorSkip { from: from_major, to: to_major });
    }

    evaluate_major_transition(from, to)
}

/// Target major is exactly one above the source major
fn evaluate_major_transition<F, T>(from: &F, to: &T) -> Verdict
where
    F: SemVer + ?Sized,
    T: SemVer + ?Sized,
{
    let (from_major, from_minor) = (from.major(), from.minor());
    let to_major = to.major();

    if to.minor() != 0 {
        return Err(UpgradeError::MajorUpgradeNotToZero { to_major, to_minor: to.minor() });
    }

    let min_patch = match min_patch_for(from_major, from_minor) {
        Some(min_patch) => min_patch,
        None => {
            event!(Level::DEBUG, "No minimum patch rule for {}.{}", from_major, from_minor);
            return Err(UpgradeError::MajorUpgradeNotAllowedFromLine { from_major, from_minor, to_major });
        }
    };

    let patch = match patch_component(from) {
        Patch::Number(patch) => patch,
        Patch::Missing => 0,
        Patch::Malformed => {
            return Err(UpgradeError::InvalidSourceVersionFormat { version: from.to_string() });
        }
    };

    event!(Level::DEBUG, "Source patch {} against required minimum {}", patch, min_patch);
    if patch >= min_patch {
        Ok(())
    } else {
        Err(UpgradeError::PatchTooLowForMajorUpgrade { from_major, from_minor, min_patch, to_major })
    }
}

/// Same major line. Patch changes are free in either direction.
fn evaluate_minor<F, T>(from: &F, to: &T, policy: Policy) -> Verdict
where
    F: SemVer + ?Sized,
    T: SemVer + ?Sized,
{
    let (from_minor, to_minor) = (from.minor(), to.minor());

    if to_minor < from_minor {
        return Err(UpgradeError::MinorDowngrade { from: from_minor, to: to_minor });
    }

    match policy {
        Policy::Strict if to_minor - from_minor > 1 => {
            Err(UpgradeError::MinorSkip { from: from_minor, to: to_minor })
        },
        Policy::Strict | Policy::Permissive => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    fn both(from: &str, to: &str) -> (Verdict, Verdict) {
        (
            evaluate(&v(from), &v(to), Policy::Strict),
            evaluate(&v(from), &v(to), Policy::Permissive),
        )
    }

    #[test]
    fn test_identity() {
        for s in ["1.2.3", "3.12.rc7", "4.0", "0.0.0"] {
            assert_eq!(both(s, s), (Ok(()), Ok(())));
        }
    }

    #[test]
    fn test_major_downgrade() {
        let (strict, soft) = both("2.2.3", "1.2.3");
        assert_eq!(strict, Err(UpgradeError::MajorDowngrade { from: 2, to: 1 }));
        assert_eq!(soft, strict);
    }

    #[test]
    fn test_major_skip() {
        let (strict, soft) = both("3.12.7", "5.0.0");
        assert_eq!(strict, Err(UpgradeError::MajorSkip { from: 3, to: 5 }));
        assert_eq!(soft, strict);
    }

    #[test]
    fn test_major_upgrade_not_to_zero() {
        for from in ["3.12.7", "3.12.0", "1.2.3"] {
            let (strict, soft) = both(from, &format!("{}.1.0", v(from).major + 1));
            assert!(matches!(strict, Err(UpgradeError::MajorUpgradeNotToZero { to_minor: 1, .. })));
            assert_eq!(soft, strict);
        }
    }

    #[test]
    fn test_major_upgrade_min_patch() {
        assert_eq!(evaluate(&v("3.12.7"), &v("4.0.0"), Policy::Strict), Ok(()));
        assert_eq!(evaluate(&v("3.12.7-rc1"), &v("4.0.0"), Policy::Strict), Ok(()));
        assert_eq!(evaluate(&v("3.12.8"), &v("4.0.0"), Policy::Permissive), Ok(()));
        assert_eq!(
            evaluate(&v("3.12.6"), &v("4.0.0"), Policy::Strict),
            Err(UpgradeError::PatchTooLowForMajorUpgrade { from_major: 3, from_minor: 12, min_patch: 7, to_major: 4 })
        );
    }

    #[test]
    fn test_major_upgrade_without_patch_segment() {
        assert!(matches!(
            evaluate(&v("3.12"), &v("4.0.0"), Policy::Strict),
            Err(UpgradeError::PatchTooLowForMajorUpgrade { .. })
        ));
    }

    #[test]
    fn test_major_upgrade_malformed_patch() {
        let (strict, soft) = both("3.12.rc7", "4.0.0");
        assert_eq!(strict, Err(UpgradeError::InvalidSourceVersionFormat { version: "3.12.rc7".to_string() }));
        assert_eq!(soft, strict);
    }

    #[test]
    fn test_major_upgrade_unlisted_line() {
        let (strict, soft) = both("3.11.0", "4.0.0");
        assert_eq!(
            strict,
            Err(UpgradeError::MajorUpgradeNotAllowedFromLine { from_major: 3, from_minor: 11, to_major: 4 })
        );
        assert_eq!(soft, strict);
    }

    #[test]
    fn test_minor_policies() {
        let (strict, soft) = both("4.0.0", "4.2.0");
        assert_eq!(strict, Err(UpgradeError::MinorSkip { from: 0, to: 2 }));
        assert_eq!(soft, Ok(()));

        assert_eq!(both("4.0.0", "4.1.0"), (Ok(()), Ok(())));
    }

    #[test]
    fn test_minor_downgrade() {
        let (strict, soft) = both("4.1.0", "4.0.0");
        assert_eq!(strict, Err(UpgradeError::MinorDowngrade { from: 1, to: 0 }));
        assert_eq!(soft, strict);
    }

    #[test]
    fn test_patch_moves_freely() {
        assert_eq!(both("3.2.88", "3.2.8"), (Ok(()), Ok(())));
        assert_eq!(both("3.2.88", "3.2.rc7"), (Ok(()), Ok(())));
        assert_eq!(both("3.2.2", "3.2.88"), (Ok(()), Ok(())));
    }
}
