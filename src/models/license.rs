//! Edition a deployment is licensed for
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum License {
    /// Free edition
    Community,
    /// Paid edition
    Enterprise,
}

impl FromStr for License {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<License> {
        match input.to_ascii_lowercase().as_str() {
            "community" | "ce" => Ok(Self::Community),
            "enterprise" | "ee" => Ok(Self::Enterprise),
            _ => Err(anyhow!("Unknown license: {} (expected community or enterprise)", input)),
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Community => write!(f, "Community"),
            Self::Enterprise => write!(f, "Enterprise"),
        }
    }
}
