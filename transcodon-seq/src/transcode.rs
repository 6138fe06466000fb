//! Sequence transcoding between species codon tables.
//!
//! All conversions route through an amino-acid intermediate: the input
//! species' `codonToAmino` map reads codons, the output species'
//! `aminoToCodon` map writes the codons that species prefers. Per-base
//! DNA↔RNA transcription is a literal character substitution, never
//! codon-aware.
//!
//! Every lookup is explicit: an unknown species, an unmapped base, codon,
//! or amino acid fails the operation with a precise error instead of
//! leaking placeholder symbols into the output.

use transcodon_core::{RequestErrors, Result, SymbolKind, TranscodonError};

use crate::registry::Registry;
use crate::table::{Direction, SpeciesTable};

/// The three sequence representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqKind {
    Dna,
    Rna,
    Protein,
}

impl SeqKind {
    /// Case-insensitive parse of `DNA`/`RNA`/`PROTEIN`.
    ///
    /// `property` names the request field in the error.
    pub fn parse(value: &str, property: &'static str) -> Result<Self> {
        match value.to_ascii_uppercase().as_str() {
            "DNA" => Ok(SeqKind::Dna),
            "RNA" => Ok(SeqKind::Rna),
            "PROTEIN" => Ok(SeqKind::Protein),
            other => Err(TranscodonError::InvalidProperty {
                property,
                reason: format!("expected DNA, RNA, or PROTEIN, got `{other}`"),
            }),
        }
    }
}

/// Per-base transcription of a whole sequence against one species' map.
///
/// Output length always equals input length.
pub fn base_transcribe(
    registry: &Registry,
    species: &str,
    sequence: &str,
    direction: Direction,
) -> Result<String> {
    let table = registry.get(species)?;
    transcribe_with(table, &sequence.to_ascii_uppercase(), direction)
}

fn transcribe_with(table: &SpeciesTable, sequence: &str, direction: Direction) -> Result<String> {
    let mut out = String::with_capacity(sequence.len());
    for (i, c) in sequence.chars().enumerate() {
        match table.base(direction, c) {
            Some(sub) => out.push(sub),
            None => {
                return Err(TranscodonError::UnmappedSymbol {
                    kind: SymbolKind::Base,
                    symbol: c.to_string(),
                    position: i,
                })
            }
        }
    }
    Ok(out)
}

fn collect<T>(result: Result<T>, errors: &mut RequestErrors) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

/// A fully validated conversion request.
///
/// Construction checks every field and collects all violations before
/// failing, so a caller sees the complete set of problems at once. A
/// request that constructs successfully holds resolved table references
/// and an uppercased sequence.
#[derive(Debug)]
pub struct ConversionRequest<'r> {
    sequence: String,
    sequence_type: SeqKind,
    output_type: SeqKind,
    input_species: &'r SpeciesTable,
    output_species: &'r SpeciesTable,
}

impl<'r> ConversionRequest<'r> {
    /// Validate a raw request against the registry.
    ///
    /// Violations are collected, not short-circuited; the error is
    /// [`TranscodonError::InvalidRequest`] carrying the whole batch.
    pub fn new(
        registry: &'r Registry,
        sequence_type: &str,
        output_type: &str,
        sequence: &str,
        input_species: &str,
        output_species: &str,
    ) -> Result<Self> {
        let mut errors = RequestErrors::default();

        let sequence_type = collect(SeqKind::parse(sequence_type, "sequenceType"), &mut errors);
        let output_type = collect(SeqKind::parse(output_type, "outputType"), &mut errors);
        let input_species = collect(registry.get(input_species), &mut errors);
        let output_species = collect(registry.get(output_species), &mut errors);

        match (sequence_type, output_type, input_species, output_species) {
            (Some(sequence_type), Some(output_type), Some(input_species), Some(output_species)) => {
                errors.into_result(ConversionRequest {
                    sequence: sequence.to_ascii_uppercase(),
                    sequence_type,
                    output_type,
                    input_species,
                    output_species,
                })
            }
            _ => Err(TranscodonError::InvalidRequest(errors)),
        }
    }

    /// Run the conversion pipeline.
    pub fn run(&self) -> Result<String> {
        let amino = match self.sequence_type {
            SeqKind::Dna => {
                let rna = transcribe_with(self.input_species, &self.sequence, Direction::DnaToRna)?;
                self.codons_to_amino(&rna)?
            }
            SeqKind::Rna => self.codons_to_amino(&self.sequence)?,
            // Already one amino acid per character.
            SeqKind::Protein => self.sequence.clone(),
        };

        match self.output_type {
            SeqKind::Protein => Ok(amino),
            SeqKind::Rna => self.amino_to_codons(&amino),
            SeqKind::Dna => {
                let rna = self.amino_to_codons(&amino)?;
                transcribe_with(self.output_species, &rna, Direction::RnaToDna)
            }
        }
    }

    /// Read non-overlapping codon triplets through the input species'
    /// table. Trailing 1–2 leftover characters are dropped.
    fn codons_to_amino(&self, rna: &str) -> Result<String> {
        let bytes = rna.as_bytes();
        let mut amino = String::with_capacity(bytes.len() / 3);
        for (i, chunk) in bytes.chunks_exact(3).enumerate() {
            let codon = String::from_utf8_lossy(chunk);
            match self.input_species.amino_for_codon(&codon) {
                Some(aa) => amino.push_str(aa),
                None => {
                    return Err(TranscodonError::UnmappedSymbol {
                        kind: SymbolKind::Codon,
                        symbol: codon.into_owned(),
                        position: i,
                    })
                }
            }
        }
        Ok(amino)
    }

    /// Write each amino acid as the output species' preferred codon.
    fn amino_to_codons(&self, amino: &str) -> Result<String> {
        let mut out = String::with_capacity(amino.len() * 3);
        let mut buf = [0u8; 4];
        for (i, aa) in amino.chars().enumerate() {
            let symbol = aa.encode_utf8(&mut buf);
            match self.output_species.codon_for_amino(symbol) {
                Some(codon) => out.push_str(codon),
                None => {
                    return Err(TranscodonError::UnmappedSymbol {
                        kind: SymbolKind::AminoAcid,
                        symbol: symbol.to_owned(),
                        position: i,
                    })
                }
            }
        }
        Ok(out)
    }
}

/// Convert a sequence between representations and species.
///
/// The primary pipeline: validates the request eagerly (collecting every
/// violation), then stages the sequence through the amino-acid
/// intermediate. See the module docs for the staging rules.
pub fn convert(
    registry: &Registry,
    sequence_type: &str,
    output_type: &str,
    sequence: &str,
    input_species: &str,
    output_species: &str,
) -> Result<String> {
    ConversionRequest::new(
        registry,
        sequence_type,
        output_type,
        sequence,
        input_species,
        output_species,
    )?
    .run()
}
