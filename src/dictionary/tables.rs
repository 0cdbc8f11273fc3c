use std::{
    collections::HashMap,
    fs,
    path::Path,
};

use serde::Deserialize;

use crate::core::{
    models::AssociationScores,
    AscmineError,
};

/// Lookup key for a (lemma, construction) pair: exact literal join, case as
/// provided. Normalization happens upstream of the tables.
pub fn pair_key(lemma: &str, asc: &str) -> String {
    format!("{}_{}", lemma, asc)
}

/// Raw corpus counts supplied by the external corpus-statistics builder.
///
/// Field names follow the builder's JSON output: lemma counts, construction
/// counts, and counts for the joined (lemma, construction) keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrequencyTable {
    #[serde(rename = "lemmaFreq", default)]
    pub lemma_freq: HashMap<String, u64>,

    #[serde(rename = "ascFreqD", default)]
    pub asc_freq: HashMap<String, u64>,

    #[serde(rename = "ascLemmaFreqD", default)]
    pub asc_lemma_freq: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn from_json_file(path: &Path) -> Result<Self, AscmineError> {
        let data = fs::read_to_string(path)
            .map_err(|e| AscmineError::FailedToLoadFile(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&data)?)
    }
}

/// Association-strength scores for (lemma, construction) pairs, one map per
/// measure, keyed like `ascLemmaFreqD`. Supplied externally and read-only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssociationTable {
    #[serde(default)]
    pub mi: HashMap<String, f64>,

    #[serde(default)]
    pub tscore: HashMap<String, f64>,

    #[serde(default)]
    pub deltap_lemma_cue: HashMap<String, f64>,

    #[serde(default)]
    pub deltap_structure_cue: HashMap<String, f64>,
}

impl AssociationTable {
    pub fn from_json_file(path: &Path) -> Result<Self, AscmineError> {
        let data = fs::read_to_string(path)
            .map_err(|e| AscmineError::FailedToLoadFile(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&data)?)
    }

    /// All four measures for one pair key; absent entries score zero.
    pub fn scores_for(&self, key: &str) -> AssociationScores {
        AssociationScores {
            mi: self.mi.get(key).copied().unwrap_or(0.0),
            tscore: self.tscore.get(key).copied().unwrap_or(0.0),
            deltap_lemma_cue: self.deltap_lemma_cue.get(key).copied().unwrap_or(0.0),
            deltap_structure_cue: self.deltap_structure_cue.get(key).copied().unwrap_or(0.0),
        }
    }
}
