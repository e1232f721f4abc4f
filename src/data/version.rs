use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Errors produced while reading a client-requested version
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version ({0})")]
    Malformed(String),
}

/// API version requested by a client, compared as `(major, minor)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionTag {
    pub major: u32,
    pub minor: u32,
}

impl VersionTag {
    pub const DEFAULT: VersionTag = VersionTag { major: 0, minor: 3 };

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse an optional request string, falling back to the default tag
    /// only when the client did not ask for any version.
    pub fn from_request(requested: Option<&str>) -> Result<Self, VersionError> {
        match requested {
            Some(s) => s.parse(),
            None => Ok(Self::DEFAULT),
        }
    }
}

impl Default for VersionTag {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for VersionTag {
    type Err = VersionError;

    /// Accepts exactly `<major>.<minor>` with both parts non-negative integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VersionError::Malformed(s.to_string());

        let (major, minor) = s.split_once('.').ok_or_else(malformed)?;
        let major = parse_component(major).ok_or_else(malformed)?;
        let minor = parse_component(minor).ok_or_else(malformed)?;

        Ok(VersionTag { major, minor })
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
