//! Structured error types for the Transcodon ecosystem.

use std::fmt;

use thiserror::Error;

/// Which kind of symbol failed a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A single nucleotide base.
    Base,
    /// A 3-letter codon.
    Codon,
    /// A single amino-acid symbol.
    AminoAcid,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Base => write!(f, "base"),
            SymbolKind::Codon => write!(f, "codon"),
            SymbolKind::AminoAcid => write!(f, "amino acid"),
        }
    }
}

/// Unified error type for all Transcodon operations.
#[derive(Debug, Error)]
pub enum TranscodonError {
    /// I/O error (species directory unreadable, file not found, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A species file's content is not valid structured data.
    /// Load-time only; recoverable per file.
    #[error("parse failure: {0}")]
    ParseFailure(String),

    /// A species file parsed but lacks a required map, or the value
    /// there is not map-shaped. Load-time only; recoverable per file.
    #[error("species table `{file}` is missing or has a malformed `{field}` map")]
    MalformedTable {
        /// Provenance tag of the offending file.
        file: String,
        /// The field that failed the structural check.
        field: &'static str,
    },

    /// A conversion request field has the wrong shape or an
    /// unrecognized value.
    #[error("invalid property `{property}`: {reason}")]
    InvalidProperty {
        property: &'static str,
        reason: String,
    },

    /// A named species is not present in the registry.
    #[error("no such species: `{0}`")]
    NoSuchSpecies(String),

    /// A base, codon, or amino acid has no entry in the relevant table.
    /// Aborts the conversion rather than emitting a placeholder.
    #[error("unmapped {kind} `{symbol}` at position {position}")]
    UnmappedSymbol {
        kind: SymbolKind,
        symbol: String,
        /// Character position for bases and amino acids, codon index
        /// for codons.
        position: usize,
    },

    /// A batch of request validation errors, collected rather than
    /// short-circuited.
    #[error("invalid conversion request: {0}")]
    InvalidRequest(RequestErrors),
}

/// Accumulator for conversion-request validation.
///
/// Every violation is recorded; the request fails as a whole only after
/// all fields have been checked.
#[derive(Debug, Default)]
pub struct RequestErrors(Vec<TranscodonError>);

impl RequestErrors {
    pub fn push(&mut self, err: TranscodonError) {
        self.0.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The collected violations, in the order they were checked.
    pub fn errors(&self) -> &[TranscodonError] {
        &self.0
    }

    /// `Ok(value)` when no violations were recorded, otherwise the batch
    /// wrapped as [`TranscodonError::InvalidRequest`].
    pub fn into_result<T>(self, value: T) -> Result<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(TranscodonError::InvalidRequest(self))
        }
    }
}

impl fmt::Display for RequestErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

/// Convenience alias used throughout the Transcodon ecosystem.
pub type Result<T> = std::result::Result<T, TranscodonError>;
