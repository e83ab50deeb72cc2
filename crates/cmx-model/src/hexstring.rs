//! Hexadecimal color values used by display settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A numeric value written in hexadecimal, such as `#373737`.
///
/// Short forms are not expanded: `#FFF` is `0xfff`, not `0xffffff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hexstring(u32);

/// Raw hexstring input: either hex text or a plain number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawHexstring {
    Number(u32),
    Text(String),
}

impl Hexstring {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Hexstring {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for Hexstring {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ModelError::InvalidHexstring {
                value: s.to_string(),
            })
    }
}

impl TryFrom<RawHexstring> for Hexstring {
    type Error = ModelError;

    fn try_from(raw: RawHexstring) -> Result<Self, Self::Error> {
        match raw {
            RawHexstring::Number(value) => Ok(Self(value)),
            RawHexstring::Text(text) => text.parse(),
        }
    }
}

impl fmt::Display for Hexstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl Serialize for Hexstring {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hexstring {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawHexstring::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
