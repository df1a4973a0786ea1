//! How strictly minor version changes are checked
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Minor versions may only increment by 1
    #[default]
    Strict,
    /// Any forward minor jump within a major line
    Permissive,
}

impl FromStr for Policy {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Policy> {
        match input.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" | "soft" => Ok(Self::Permissive),
            _ => Err(anyhow!("Unknown policy: {} (expected strict or permissive)", input)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Permissive => write!(f, "permissive"),
        }
    }
}
