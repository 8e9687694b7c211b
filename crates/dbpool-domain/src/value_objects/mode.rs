//! Pool mode value object

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access mode of a pooled connection source
///
/// Each mode owns a configuration sub-tree (`<prefix>.<mode>`) and a pool
/// named `<process_id>.<mode>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolMode {
    /// Connections used for queries only
    ReadOnly,
    /// Connections allowed to modify data
    ReadWrite,
}

impl PoolMode {
    /// Every mode, in construction order
    pub const ALL: [PoolMode; 2] = [PoolMode::ReadOnly, PoolMode::ReadWrite];

    /// Canonical lowercase name used in property paths and pool names
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadOnly => "readonly",
            Self::ReadWrite => "readwrite",
        }
    }

    /// Property prefix holding this mode's overrides
    pub fn property_prefix(self, prefix: &str) -> String {
        format!("{prefix}.{}", self.as_str())
    }

    /// Process-unique pool name for this mode
    pub fn pool_name(self, process_id: &str) -> String {
        format!("{process_id}.{}", self.as_str())
    }
}

impl fmt::Display for PoolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoolMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "readonly" => Ok(Self::ReadOnly),
            "readwrite" => Ok(Self::ReadWrite),
            _ => Err(Error::invalid_configuration(
                "mode",
                s,
                "expected 'readonly' or 'readwrite'",
            )),
        }
    }
}
