//! Compiler and package versions.
//!
//! Haskell toolchains use dotted versions of arbitrary length
//! (`9.6.3`, `7.4`, `9.4.8.20231111`), so components are kept as a list
//! rather than a fixed major/minor/patch triple.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A dotted numeric version with an optional pre-release tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    components: Vec<u32>,
    pre: Option<String>,
}

impl Version {
    /// Create a version from its numeric components.
    pub fn new(components: impl Into<Vec<u32>>) -> Self {
        Self {
            components: components.into(),
            pre: None,
        }
    }

    /// Attach a pre-release tag (`9.8.1-rc1`).
    pub fn with_pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = Some(pre.into());
        self
    }

    pub fn parse(s: &str) -> Result<Self, VersionParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let (numbers, pre) = match s.split_once('-') {
            Some((numbers, pre)) if !pre.is_empty() => (numbers, Some(pre.to_string())),
            Some(_) => return Err(VersionParseError::InvalidFormat(s.to_string())),
            None => (s, None),
        };

        let components = numbers
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| VersionParseError::InvalidComponent(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components, pre })
    }

    /// The numeric components.
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    pub fn major(&self) -> u32 {
        self.components.first().copied().unwrap_or(0)
    }

    pub fn minor(&self) -> u32 {
        self.components.get(1).copied().unwrap_or(0)
    }

    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }

    /// `true` if `self` sorts strictly before `other`.
    pub fn is_older_than(&self, other: &Version) -> bool {
        self < other
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // A missing trailing component sorts lower: 7.4 < 7.4.0 < 7.4.1.
        self.components
            .cmp(&other.components)
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", component)?;
            first = false;
        }
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

/// Errors from parsing a version string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,
    #[error("invalid version format: {0}")]
    InvalidFormat(String),
    #[error("invalid version component '{0}'")]
    InvalidComponent(String),
}
