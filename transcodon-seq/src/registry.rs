//! Species registry: discovery, validation, and indexing of codon tables.
//!
//! A [`Registry`] is loaded once from a directory of JSON table files and
//! is read-only afterwards; conversions borrow it immutably, so a loaded
//! registry can be shared freely across threads. Reloading while
//! conversions are in flight is not supported — build a new registry and
//! swap it at a point of your choosing instead.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};
use transcodon_core::{Result, TranscodonError};

use crate::config::Config;
use crate::table::SpeciesTable;

/// Mapping from species name to codon table.
#[derive(Debug, Default)]
pub struct Registry {
    species: HashMap<String, SpeciesTable>,
}

impl Registry {
    /// An empty registry, to be populated with [`Registry::insert`].
    pub fn new() -> Self {
        Registry::default()
    }

    /// Scan the configured species directory and index every valid table.
    ///
    /// Per-file problems (unreadable file, invalid JSON, missing required
    /// maps) are logged subject to `config.log_level` and skipped; the
    /// registry keeps whatever subset parsed successfully. Only an
    /// unreadable directory is fatal.
    pub fn load(config: &Config) -> Result<Self> {
        let dir = &config.species_path;
        let entries = fs::read_dir(dir).map_err(|e| {
            TranscodonError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", dir.display(), e),
            ))
        })?;

        let mut registry = Registry::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    if config.log_level.diagnostics() {
                        warn!(dir = %dir.display(), error = %e, "unreadable directory entry, skipping");
                    }
                    continue;
                }
            };
            let path = entry.path();
            if !has_json_extension(&path) {
                continue;
            }
            // A directory can masquerade with a .json suffix; stat it.
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => {}
                _ => continue,
            }

            match SpeciesTable::parse_file(&path) {
                Ok(table) => {
                    registry.insert(table);
                }
                Err(e) => {
                    if config.log_level.diagnostics() {
                        warn!(file = %path.display(), error = %e, "species file not loaded");
                    }
                }
            }
        }

        if config.log_level.summaries() {
            info!(
                count = registry.len(),
                dir = %dir.display(),
                "loaded species tables"
            );
        }
        Ok(registry)
    }

    /// Insert a table under its resolved name.
    ///
    /// If the table's name is already registered, the name is re-derived
    /// from the source file stem so the earlier entry is not overwritten.
    /// Best-effort only: two files sharing a stem still collide, and the
    /// later one wins.
    pub fn insert(&mut self, mut table: SpeciesTable) {
        if self.species.contains_key(table.name()) {
            let stem = table
                .source()
                .rsplit_once('.')
                .map(|(stem, _)| stem.to_owned())
                .unwrap_or_else(|| table.source().to_owned());
            table.set_name(stem);
        }
        self.species.insert(table.name().to_owned(), table);
    }

    /// Look up a species, failing with `NoSuchSpecies` when absent.
    pub fn get(&self, name: &str) -> Result<&SpeciesTable> {
        self.species
            .get(name)
            .ok_or_else(|| TranscodonError::NoSuchSpecies(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.species.contains_key(name)
    }

    /// Registered species names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.species.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}
