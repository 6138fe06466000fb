//! Diagnostic verbosity gating.
//!
//! Load-time diagnostics go through `tracing`; [`LogLevel`] decides which
//! of them are emitted at all. `silent` suppresses everything, `normal`
//! emits per-file warnings, and `verbose` additionally reports summary
//! counts.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::TranscodonError;

/// Diagnostic verbosity for registry loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all diagnostics.
    Silent,
    /// Emit warnings and errors.
    #[default]
    Normal,
    /// Also emit summary counts.
    Verbose,
}

impl LogLevel {
    /// Whether per-file warnings and errors should be emitted.
    pub fn diagnostics(self) -> bool {
        self != LogLevel::Silent
    }

    /// Whether summary reports should be emitted.
    pub fn summaries(self) -> bool {
        self == LogLevel::Verbose
    }
}

// Deserialize through FromStr so config files accept any casing, the
// same folding the level gets everywhere else.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for LogLevel {
    type Err = TranscodonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Ok(LogLevel::Silent),
            "normal" => Ok(LogLevel::Normal),
            "verbose" => Ok(LogLevel::Verbose),
            other => Err(TranscodonError::InvalidProperty {
                property: "logLevel",
                reason: format!("expected silent, normal, or verbose, got `{other}`"),
            }),
        }
    }
}
