//! Decides whether a deployment may move from one software version, and
//! license edition, to another before a rolling upgrade is started.

pub mod cli;
pub mod models;
pub mod parser;
pub mod rules;

pub use models::{License, Policy, SemVer, Version};
pub use rules::{
    check_soft_upgrade_rules,
    check_soft_upgrade_rules_with_license,
    check_upgrade_rules,
    check_upgrade_rules_with_license,
    UpgradeError,
    Verdict,
};
