//! Refuses to move a deployment from the paid edition to the free one, then
//! hands over to the version rules.
use tracing::{instrument, event, Level};

use super::engine::evaluate;
use super::error::{UpgradeError, Verdict};
use crate::models::{License, Policy, SemVer};

#[instrument(skip_all, fields(from = %from, to = %to, from_license = %from_license, to_license = %to_license, policy = %policy))]
pub fn evaluate_with_license<F, T>(
    from: &F,
    to: &T,
    from_license: License,
    to_license: License,
    policy: Policy,
) -> Verdict
where
    F: SemVer + ?Sized,
    T: SemVer + ?Sized,
{
    if from_license != to_license && from_license == License::Enterprise {
        event!(Level::DEBUG, "Rejecting edition downgrade");
        return Err(UpgradeError::LicenseDowngrade { from: from_license, to: to_license });
    }

    evaluate(from, to, policy)
}
