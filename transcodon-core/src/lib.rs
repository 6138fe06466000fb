//! Shared primitives for the Transcodon ecosystem.
//!
//! `transcodon-core` provides the foundation the other Transcodon crates
//! build on:
//!
//! - **Error types** — [`TranscodonError`] and [`Result`] for structured
//!   error handling
//! - **Diagnostic gating** — [`LogLevel`] controlling load-time verbosity

pub mod error;
pub mod log;

pub use error::{RequestErrors, Result, SymbolKind, TranscodonError};
pub use log::LogLevel;
