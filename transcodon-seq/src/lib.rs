//! Species codon tables and sequence transcoding for the Transcodon
//! ecosystem.
//!
//! Translates DNA, RNA, and protein sequences between species-specific
//! codon usage tables by routing every conversion through an amino-acid
//! intermediate:
//!
//! - **Tables** — [`SpeciesTable`] parsed from per-species JSON files
//! - **Registry** — [`Registry`] loaded once from a configured directory
//! - **Transcoding** — [`convert`] and [`base_transcribe`] against a
//!   loaded registry
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use transcodon_seq::{convert, Registry, SpeciesTable};
//!
//! let mut registry = Registry::new();
//! registry.insert(SpeciesTable::new(
//!     "Human",
//!     HashMap::from([("AUG".to_string(), "M".to_string())]),
//!     HashMap::from([("M".to_string(), "AUG".to_string())]),
//! ));
//! registry.insert(SpeciesTable::new(
//!     "Mouse",
//!     HashMap::from([("AUA".to_string(), "M".to_string())]),
//!     HashMap::from([("M".to_string(), "AUA".to_string())]),
//! ));
//!
//! // Mouse prefers AUA for methionine where Human uses AUG.
//! let out = convert(&registry, "RNA", "RNA", "AUG", "Human", "Mouse").unwrap();
//! assert_eq!(out, "AUA");
//! ```
//!
//! Registries are read-only once loaded and safe to share across threads;
//! conversions are pure in-memory lookups.

pub mod config;
pub mod registry;
pub mod table;
pub mod transcode;

pub use config::Config;
pub use registry::Registry;
pub use table::{Direction, SpeciesTable};
pub use transcode::{base_transcribe, convert, ConversionRequest, SeqKind};
