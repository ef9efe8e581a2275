//! Semantic version value type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoadieError;

/// A `MAJOR.MINOR.PATCH` version. Components are full integers, so
/// `1.12.3` and `1.2.34` parse the way you would expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Increment one component, zeroing everything below it.
    pub fn bump(self, level: BumpLevel) -> Self {
        match level {
            BumpLevel::Major => Self::new(self.major + 1, 0, 0),
            BumpLevel::Minor => Self::new(self.major, self.minor + 1, 0),
            BumpLevel::Patch => Self::new(self.major, self.minor, self.patch + 1),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = RoadieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(parse_error(s));
        }
        Ok(Self {
            major: component(parts[0], s)?,
            minor: component(parts[1], s)?,
            patch: component(parts[2], s)?,
        })
    }
}

pub(super) fn component(part: &str, input: &str) -> Result<u64, RoadieError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error(input));
    }
    part.parse().map_err(|_| parse_error(input))
}

fn parse_error(input: &str) -> RoadieError {
    RoadieError::VersionParse {
        input: input.to_string(),
    }
}

/// Which version component a regeneration bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpLevel {
    Major,
    Minor,
    #[default]
    Patch,
}

impl FromStr for BumpLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(BumpLevel::Major),
            "minor" => Ok(BumpLevel::Minor),
            "patch" => Ok(BumpLevel::Patch),
            _ => Err(format!(
                "unknown bump level '{s}' (expected major, minor, or patch)"
            )),
        }
    }
}
