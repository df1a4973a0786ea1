//! Software versions as seen by the upgrade rules
use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use crate::parser::parse_version;

/// Anything the rules can evaluate: integer major and minor components plus a
/// canonical `MAJOR.MINOR.PATCH[suffix]` string form.
pub trait SemVer: fmt::Display {
    fn major(&self) -> u32;
    fn minor(&self) -> u32;
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    /// Raw third segment, suffix included, e.g. `7`, `7-rc1` or `rc7`
    pub patch: Option<String>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: Option<&str>) -> Self {
        Self { major, minor, patch: patch.map(|p| p.to_string()) }
    }
}

impl SemVer for Version {
    fn major(&self) -> u32 {
        self.major
    }

    fn minor(&self) -> u32 {
        self.minor
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Version> {
        parse_version(input)
    }
}
