use super::{
    pair_key,
    AssociationTable,
    FrequencyTable,
};
use crate::core::models::{
    EnrichedToken,
    TaggedSentence,
};

/// Attach corpus statistics to every labeled token of a document.
///
/// Pure transform: missing table entries fall back to zero instead of
/// erroring, and unlabeled tokens pass through with default enrichment.
pub fn enrich(
    doc: Vec<TaggedSentence>,
    freq_table: &FrequencyTable,
    assoc_table: &AssociationTable,
) -> Vec<Vec<EnrichedToken>> {
    doc.into_iter()
        .map(|sentence| {
            sentence
                .tokens
                .into_iter()
                .map(|tagged| {
                    let mut enriched = EnrichedToken::from(tagged);

                    if let Some(asc) = enriched.asc.as_deref() {
                        let key = pair_key(&enriched.token.lemma, asc);
                        enriched.lemma_freq = freq_table
                            .lemma_freq
                            .get(&enriched.token.lemma)
                            .copied()
                            .unwrap_or(0);
                        enriched.asc_freq =
                            freq_table.asc_freq.get(asc).copied().unwrap_or(0);
                        enriched.pair_freq =
                            freq_table.asc_lemma_freq.get(&key).copied().unwrap_or(0);
                        enriched.scores = assoc_table.scores_for(&key);
                    }

                    enriched
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        Pos,
        TaggedToken,
        Token,
    };

    fn tagged(lemma: &str, asc: Option<&str>) -> TaggedToken {
        TaggedToken {
            token: Token {
                start: 0,
                end: lemma.len(),
                surface: lemma.to_string(),
                lemma: lemma.to_string(),
                pos: Pos::Verb,
            },
            asc: asc.map(str::to_string),
        }
    }

    fn doc(tokens: Vec<TaggedToken>) -> Vec<TaggedSentence> {
        vec![TaggedSentence { text: String::new(), tokens }]
    }

    #[test]
    fn labeled_tokens_pick_up_counts_and_scores() {
        let freq: FrequencyTable = serde_json::from_str(
            r#"{"lemmaFreq": {"run": 5}, "ascFreqD": {"X": 4}, "ascLemmaFreqD": {"run_X": 3}}"#,
        )
        .unwrap();
        let assoc: AssociationTable =
            serde_json::from_str(r#"{"mi": {"run_X": 1.5}, "tscore": {"run_X": 0.9}}"#).unwrap();

        let enriched = enrich(doc(vec![tagged("run", Some("X"))]), &freq, &assoc);
        let token = &enriched[0][0];

        assert_eq!(token.lemma_freq, 5);
        assert_eq!(token.asc_freq, 4);
        assert_eq!(token.pair_freq, 3);
        assert_eq!(token.scores.mi, 1.5);
        assert_eq!(token.scores.tscore, 0.9);
        assert_eq!(token.scores.deltap_lemma_cue, 0.0);
    }

    #[test]
    fn lookup_misses_default_to_zero() {
        let enriched = enrich(
            doc(vec![tagged("walk", Some("Y"))]),
            &FrequencyTable::default(),
            &AssociationTable::default(),
        );
        let token = &enriched[0][0];

        assert_eq!(token.asc.as_deref(), Some("Y"));
        assert_eq!((token.lemma_freq, token.asc_freq, token.pair_freq), (0, 0, 0));
        assert_eq!(token.scores, Default::default());
    }

    #[test]
    fn unlabeled_tokens_pass_through_untouched() {
        let freq: FrequencyTable =
            serde_json::from_str(r#"{"lemmaFreq": {"run": 5}}"#).unwrap();

        let enriched = enrich(doc(vec![tagged("run", None)]), &freq, &AssociationTable::default());
        let token = &enriched[0][0];

        assert!(token.asc.is_none());
        // No label, no lookups, even though the lemma is in the table.
        assert_eq!(token.lemma_freq, 0);
    }
}
