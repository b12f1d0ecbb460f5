//! Emoji record types.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Serialize, Serializer};

/// Unicode qualification status of an emoji sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    FullyQualified,
    MinimallyQualified,
    Unqualified,
    Component,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::FullyQualified,
        Status::MinimallyQualified,
        Status::Unqualified,
        Status::Component,
    ];

    /// Spelling used by the data file and by query filters.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::FullyQualified => "fully-qualified",
            Status::MinimallyQualified => "minimally-qualified",
            Status::Unqualified => "unqualified",
            Status::Component => "component",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| anyhow!("unknown emoji status: {raw}"))
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

/// Emoji version that introduced a record, e.g. `E13.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmojiVersion {
    pub major: u16,
    pub minor: u16,
}

impl EmojiVersion {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// The version as `major.minor.0` for range matching.
    pub fn to_semver(self) -> semver::Version {
        semver::Version::new(u64::from(self.major), u64::from(self.minor), 0)
    }
}

impl fmt::Display for EmojiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for EmojiVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One emoji sequence of the catalog. A visual glyph can appear once per
/// status, so `emoji` alone is not a unique key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiRecord {
    pub emoji: &'static str,
    pub description: &'static str,
    pub version: EmojiVersion,
    pub status: Status,
    pub group: &'static str,
    pub subgroup: &'static str,
    pub skin_tone: bool,
}
