//! Initialization configuration for registry loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use transcodon_core::{LogLevel, Result, TranscodonError};

/// Registry loading configuration.
///
/// Deserializes from a JSON file using the same camelCase keys as the
/// species table format (`speciesPath`, `logLevel`); every field is
/// optional and falls back to its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned (non-recursively) for species table files.
    pub species_path: PathBuf,
    /// Diagnostic verbosity during the scan.
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            species_path: PathBuf::from("species"),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Read a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            TranscodonError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        serde_json::from_str(&text)
            .map_err(|e| TranscodonError::ParseFailure(format!("{}: {}", path.display(), e)))
    }

    /// Builder-style override for the species directory.
    pub fn with_species_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.species_path = path.into();
        self
    }

    /// Builder-style override for the diagnostic level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.species_path, PathBuf::from("species"));
        assert_eq!(config.log_level, LogLevel::Normal);
    }

    #[test]
    fn from_file_camel_case() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"{{"speciesPath": "/data/tables", "logLevel": "verbose"}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.species_path, PathBuf::from("/data/tables"));
        assert_eq!(config.log_level, LogLevel::Verbose);
    }

    #[test]
    fn from_file_partial_uses_defaults() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{"logLevel": "silent"}}"#).unwrap();
        file.flush().unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.species_path, PathBuf::from("species"));
        assert_eq!(config.log_level, LogLevel::Silent);
    }

    #[test]
    fn from_file_log_level_any_casing() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{"logLevel": "Silent"}}"#).unwrap();
        file.flush().unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Silent);
    }

    #[test]
    fn from_file_invalid_json_is_parse_failure() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "not json").unwrap();
        file.flush().unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TranscodonError::ParseFailure(_)));
    }

    #[test]
    fn from_file_missing_is_io() {
        let err = Config::from_file("/no/such/config.json").unwrap_err();
        assert!(matches!(err, TranscodonError::Io(_)));
    }
}
