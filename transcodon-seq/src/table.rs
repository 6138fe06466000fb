//! Per-species codon tables.
//!
//! A [`SpeciesTable`] holds one organism's codon semantics: the codon →
//! amino-acid reading map, the amino-acid → preferred-codon writing map,
//! and the per-base DNA↔RNA substitution maps. Tables are parsed from
//! JSON files of the form:
//!
//! ```json
//! {
//!   "speciesName": "Human",
//!   "codonToAmino": { "AUG": "M" },
//!   "aminoToCodon": { "M": "AUG" },
//!   "dnaToRna": { "A": "A", "C": "C", "G": "G", "T": "U" },
//!   "rnaToDna": { "A": "A", "C": "C", "G": "G", "U": "T" }
//! }
//! ```
//!
//! `speciesName` and the per-base maps are optional; the base maps
//! default to the canonical T↔U substitution. Both codon maps are
//! required and must be map-shaped, otherwise the table is rejected.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use transcodon_core::{Result, TranscodonError};

/// Direction of per-base transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    DnaToRna,
    RnaToDna,
}

fn canonical_dna_to_rna() -> HashMap<char, char> {
    HashMap::from([('A', 'A'), ('C', 'C'), ('G', 'G'), ('T', 'U')])
}

fn canonical_rna_to_dna() -> HashMap<char, char> {
    HashMap::from([('A', 'A'), ('C', 'C'), ('G', 'G'), ('U', 'T')])
}

/// One species' codon semantics.
#[derive(Debug, Clone)]
pub struct SpeciesTable {
    name: String,
    codon_to_amino: HashMap<String, String>,
    amino_to_codon: HashMap<String, String>,
    dna_to_rna: HashMap<char, char>,
    rna_to_dna: HashMap<char, char>,
    source: String,
}

impl SpeciesTable {
    /// Build a table in memory with canonical per-base maps.
    ///
    /// Useful for embedding a registry without a species directory.
    pub fn new(
        name: impl Into<String>,
        codon_to_amino: HashMap<String, String>,
        amino_to_codon: HashMap<String, String>,
    ) -> Self {
        let name = name.into();
        SpeciesTable {
            source: format!("<in-memory:{name}>"),
            name,
            codon_to_amino,
            amino_to_codon,
            dna_to_rna: canonical_dna_to_rna(),
            rna_to_dna: canonical_rna_to_dna(),
        }
    }

    /// Read and parse a species table file.
    ///
    /// Invalid JSON is a [`TranscodonError::ParseFailure`]; valid JSON
    /// missing a required map is a [`TranscodonError::MalformedTable`].
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            TranscodonError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| TranscodonError::ParseFailure(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&value, path)
    }

    /// Build a table from an already-parsed JSON value.
    ///
    /// The name is the embedded `speciesName` when present, otherwise the
    /// file stem of `path`.
    pub fn from_json(value: &Value, path: &Path) -> Result<Self> {
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.clone());

        let declared = value
            .get("speciesName")
            .and_then(Value::as_str)
            .map(str::to_owned);

        let codon_to_amino = require_string_map(value, "codonToAmino", &source)?;
        let amino_to_codon = require_string_map(value, "aminoToCodon", &source)?;

        let dna_to_rna = match value.get("dnaToRna") {
            Some(v) => base_map(v, "dnaToRna", &source)?,
            None => canonical_dna_to_rna(),
        };
        let rna_to_dna = match value.get("rnaToDna") {
            Some(v) => base_map(v, "rnaToDna", &source)?,
            None => canonical_rna_to_dna(),
        };

        Ok(SpeciesTable {
            name: declared.unwrap_or(stem),
            codon_to_amino,
            amino_to_codon,
            dna_to_rna,
            rna_to_dna,
            source,
        })
    }

    /// Registry key for this species.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provenance tag (originating filename) for diagnostics.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// The amino acid this species reads a codon as.
    pub fn amino_for_codon(&self, codon: &str) -> Option<&str> {
        self.codon_to_amino.get(codon).map(String::as_str)
    }

    /// The codon this species prefers when encoding an amino acid.
    pub fn codon_for_amino(&self, amino: &str) -> Option<&str> {
        self.amino_to_codon.get(amino).map(String::as_str)
    }

    /// Per-base substitution for one character.
    pub fn base(&self, direction: Direction, base: char) -> Option<char> {
        let map = match direction {
            Direction::DnaToRna => &self.dna_to_rna,
            Direction::RnaToDna => &self.rna_to_dna,
        };
        map.get(&base).copied()
    }
}

/// Extract a required `{string: string}` map field.
fn require_string_map(
    value: &Value,
    field: &'static str,
    source: &str,
) -> Result<HashMap<String, String>> {
    let malformed = || TranscodonError::MalformedTable {
        file: source.to_owned(),
        field,
    };
    let obj = value.get(field).and_then(Value::as_object).ok_or_else(malformed)?;
    let mut map = HashMap::with_capacity(obj.len());
    for (k, v) in obj {
        let v = v.as_str().ok_or_else(malformed)?;
        map.insert(k.to_ascii_uppercase(), v.to_ascii_uppercase());
    }
    Ok(map)
}

/// Extract an optional per-base map; every key and value must be a
/// single character.
fn base_map(value: &Value, field: &'static str, source: &str) -> Result<HashMap<char, char>> {
    let malformed = || TranscodonError::MalformedTable {
        file: source.to_owned(),
        field,
    };
    let obj = value.as_object().ok_or_else(malformed)?;
    let mut map = HashMap::with_capacity(obj.len());
    for (k, v) in obj {
        let mut kc = k.chars();
        let key = match (kc.next(), kc.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(malformed()),
        };
        let v = v.as_str().ok_or_else(malformed)?;
        let mut vc = v.chars();
        let val = match (vc.next(), vc.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(malformed()),
        };
        map.insert(key, val);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn human_json() -> Value {
        json!({
            "speciesName": "Human",
            "codonToAmino": { "AUG": "M" },
            "aminoToCodon": { "M": "AUG" }
        })
    }

    #[test]
    fn from_json_uses_declared_name() {
        let table = SpeciesTable::from_json(&human_json(), &PathBuf::from("h_sapiens.json")).unwrap();
        assert_eq!(table.name(), "Human");
        assert_eq!(table.source(), "h_sapiens.json");
        assert_eq!(table.amino_for_codon("AUG"), Some("M"));
        assert_eq!(table.codon_for_amino("M"), Some("AUG"));
    }

    #[test]
    fn from_json_falls_back_to_file_stem() {
        let value = json!({
            "codonToAmino": { "AUG": "M" },
            "aminoToCodon": { "M": "AUG" }
        });
        let table = SpeciesTable::from_json(&value, &PathBuf::from("mouse.json")).unwrap();
        assert_eq!(table.name(), "mouse");
    }

    #[test]
    fn missing_amino_to_codon_is_malformed() {
        let value = json!({ "codonToAmino": { "AUG": "M" } });
        let err = SpeciesTable::from_json(&value, &PathBuf::from("broken.json")).unwrap_err();
        match err {
            TranscodonError::MalformedTable { file, field } => {
                assert_eq!(file, "broken.json");
                assert_eq!(field, "aminoToCodon");
            }
            other => panic!("expected MalformedTable, got {other:?}"),
        }
    }

    #[test]
    fn non_map_codon_to_amino_is_malformed() {
        let value = json!({
            "codonToAmino": "not a map",
            "aminoToCodon": { "M": "AUG" }
        });
        let err = SpeciesTable::from_json(&value, &PathBuf::from("broken.json")).unwrap_err();
        assert!(matches!(
            err,
            TranscodonError::MalformedTable { field: "codonToAmino", .. }
        ));
    }

    #[test]
    fn default_base_maps_are_canonical() {
        let table = SpeciesTable::from_json(&human_json(), &PathBuf::from("human.json")).unwrap();
        assert_eq!(table.base(Direction::DnaToRna, 'T'), Some('U'));
        assert_eq!(table.base(Direction::DnaToRna, 'A'), Some('A'));
        assert_eq!(table.base(Direction::RnaToDna, 'U'), Some('T'));
        assert_eq!(table.base(Direction::DnaToRna, 'U'), None);
    }

    #[test]
    fn explicit_base_maps_override_defaults() {
        let mut value = human_json();
        value["dnaToRna"] = json!({ "T": "U", "A": "A", "C": "C", "G": "G", "N": "N" });
        let table = SpeciesTable::from_json(&value, &PathBuf::from("human.json")).unwrap();
        assert_eq!(table.base(Direction::DnaToRna, 'N'), Some('N'));
    }

    #[test]
    fn multi_char_base_key_is_malformed() {
        let mut value = human_json();
        value["rnaToDna"] = json!({ "UU": "T" });
        let err = SpeciesTable::from_json(&value, &PathBuf::from("human.json")).unwrap_err();
        assert!(matches!(
            err,
            TranscodonError::MalformedTable { field: "rnaToDna", .. }
        ));
    }

    #[test]
    fn map_entries_are_uppercased() {
        let value = json!({
            "codonToAmino": { "aug": "m" },
            "aminoToCodon": { "m": "aug" }
        });
        let table = SpeciesTable::from_json(&value, &PathBuf::from("x.json")).unwrap();
        assert_eq!(table.amino_for_codon("AUG"), Some("M"));
        assert_eq!(table.codon_for_amino("M"), Some("AUG"));
    }

    #[test]
    fn parse_file_invalid_json_is_parse_failure() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{{ not json").unwrap();
        file.flush().unwrap();

        let err = SpeciesTable::parse_file(file.path()).unwrap_err();
        assert!(matches!(err, TranscodonError::ParseFailure(_)));
    }
}
