use std::collections::{
    BTreeMap,
    HashSet,
};

use crate::{
    core::models::EnrichedToken,
    dictionary::pair_key,
};

/// Flat per-document mapping from index name to value.
///
/// Scalar indices are always present; which per-label keys exist depends on
/// the construction labels observed in the document, so two records can have
/// different key sets. The exporter aligns them (see `union_columns`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexRecord {
    values: BTreeMap<String, f64>,
}

impl IndexRecord {
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The three parallel per-clause sequences walked out of a document, in
/// document order: one entry per labeled token. Intermediate material for
/// the aggregation; never part of the exported record.
#[derive(Debug, Clone, Default)]
pub struct ClauseInventory {
    pub lemmas: Vec<String>,
    pub ascs: Vec<String>,
    pub pairs: Vec<String>,
}

impl ClauseInventory {
    pub fn len(&self) -> usize {
        self.ascs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ascs.is_empty()
    }
}

pub fn collect_clauses(doc: &[Vec<EnrichedToken>]) -> ClauseInventory {
    let mut inventory = ClauseInventory::default();

    for sentence in doc {
        for token in sentence {
            if let Some(asc) = &token.asc {
                inventory.lemmas.push(token.token.lemma.clone());
                inventory.ascs.push(asc.clone());
                inventory.pairs.push(pair_key(&token.token.lemma, asc));
            }
        }
    }

    inventory
}

const DOC_AVERAGES: &[&str] = &[
    "mi_Av",
    "tscore_Av",
    "deltap_lemma_cue_Av",
    "deltap_structure_cue_Av",
    "lemma_freq_Av",
    "asc_freq_Av",
    "asc_lemma_freq_Av",
];

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Reduce an enriched document to its index record.
///
/// `clauseCount` counts labeled tokens, never raw tokens. A document with no
/// labeled clause reports zeroed scalars and no per-label keys at all.
pub fn aggregate(doc: &[Vec<EnrichedToken>]) -> IndexRecord {
    let inventory = collect_clauses(doc);
    let clause_count = inventory.len();

    let mut record = IndexRecord::default();
    record.insert("clauseCount", clause_count as f64);

    if clause_count == 0 {
        record.insert("mvTTR", 0.0);
        for name in DOC_AVERAGES {
            record.insert(*name, 0.0);
        }
        return record;
    }

    let distinct_lemmas: HashSet<&str> =
        inventory.lemmas.iter().map(String::as_str).collect();
    record.insert("mvTTR", distinct_lemmas.len() as f64 / clause_count as f64);

    let labeled: Vec<&EnrichedToken> =
        doc.iter().flatten().filter(|token| token.asc.is_some()).collect();

    record.insert("mi_Av", mean(labeled.iter().map(|t| t.scores.mi), clause_count));
    record.insert("tscore_Av", mean(labeled.iter().map(|t| t.scores.tscore), clause_count));
    record.insert(
        "deltap_lemma_cue_Av",
        mean(labeled.iter().map(|t| t.scores.deltap_lemma_cue), clause_count),
    );
    record.insert(
        "deltap_structure_cue_Av",
        mean(labeled.iter().map(|t| t.scores.deltap_structure_cue), clause_count),
    );
    record.insert(
        "lemma_freq_Av",
        mean(labeled.iter().map(|t| t.lemma_freq as f64), clause_count),
    );
    record.insert(
        "asc_freq_Av",
        mean(labeled.iter().map(|t| t.asc_freq as f64), clause_count),
    );
    record.insert(
        "asc_lemma_freq_Av",
        mean(labeled.iter().map(|t| t.pair_freq as f64), clause_count),
    );

    let mut by_label: BTreeMap<&str, Vec<&EnrichedToken>> = BTreeMap::new();
    for token in labeled.iter().copied() {
        by_label.entry(token.asc.as_deref().unwrap_or_default()).or_default().push(token);
    }

    for (label, tokens) in &by_label {
        let occurrences = tokens.len();
        record.insert(
            format!("{}_Prop", label),
            occurrences as f64 / clause_count as f64,
        );
        record.insert(
            format!("{}_mi", label),
            mean(tokens.iter().map(|t| t.scores.mi), occurrences),
        );
        record.insert(
            format!("{}_tscore", label),
            mean(tokens.iter().map(|t| t.scores.tscore), occurrences),
        );
        record.insert(
            format!("{}_deltap_lemma_cue", label),
            mean(tokens.iter().map(|t| t.scores.deltap_lemma_cue), occurrences),
        );
        record.insert(
            format!("{}_deltap_structure_cue", label),
            mean(tokens.iter().map(|t| t.scores.deltap_structure_cue), occurrences),
        );
    }

    record
}
