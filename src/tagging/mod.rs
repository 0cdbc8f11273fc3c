pub mod pattern_tagger;

pub use pattern_tagger::PatternTagger;

use log::warn;

use crate::core::{
    models::{
        Sentence,
        TaggedSentence,
        TaggedToken,
        Token,
    },
    AscmineError,
};

/// Capability interface for the construction classifier.
///
/// Implementations return one label slot per input token, `Some` only on the
/// clause-head token of each detected clause. Anything matching this
/// contract can be swapped in; the index math never sees the classifier
/// itself.
pub trait AscTagger {
    fn tag_sentence(&self, tokens: &[Token]) -> Result<Vec<Option<String>>, AscmineError>;
}

/// Tag every sentence of a document.
///
/// A classifier failure on one sentence leaves that sentence unlabeled and
/// keeps going; it never aborts the document. A label vector of the wrong
/// length is treated the same way.
pub fn tag_document(sentences: &[Sentence], tagger: &dyn AscTagger) -> Vec<TaggedSentence> {
    sentences
        .iter()
        .map(|sentence| {
            let labels = match tagger.tag_sentence(&sentence.tokens) {
                Ok(labels) if labels.len() == sentence.tokens.len() => labels,
                Ok(labels) => {
                    warn!(
                        "tagger returned {} labels for {} tokens in '{}', dropping them",
                        labels.len(),
                        sentence.tokens.len(),
                        sentence.text
                    );
                    vec![None; sentence.tokens.len()]
                }
                Err(e) => {
                    warn!("tagger failed on '{}': {}", sentence.text, e);
                    vec![None; sentence.tokens.len()]
                }
            };

            let tokens = sentence
                .tokens
                .iter()
                .cloned()
                .zip(labels)
                .map(|(token, asc)| TaggedToken { token, asc })
                .collect();

            TaggedSentence { text: sentence.text.clone(), tokens }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::segment;

    struct FailOnShort;

    impl AscTagger for FailOnShort {
        fn tag_sentence(&self, tokens: &[Token]) -> Result<Vec<Option<String>>, AscmineError> {
            if tokens.len() < 4 {
                return Err(AscmineError::Tagging("sentence too short".to_string()));
            }
            let mut labels = vec![None; tokens.len()];
            labels[0] = Some("X".to_string());
            Ok(labels)
        }
    }

    #[test]
    fn classifier_failure_degrades_to_unlabeled_sentence() {
        let sentences = segment("Go. She gave him a book.");
        let tagged = tag_document(&sentences, &FailOnShort);

        assert_eq!(tagged.len(), 2);
        assert!(tagged[0].tokens.iter().all(|t| t.asc.is_none()));
        assert!(tagged[1].tokens.iter().any(|t| t.asc.is_some()));
    }

    struct WrongArity;

    impl AscTagger for WrongArity {
        fn tag_sentence(&self, _tokens: &[Token]) -> Result<Vec<Option<String>>, AscmineError> {
            Ok(vec![Some("X".to_string())])
        }
    }

    #[test]
    fn mismatched_label_count_degrades_to_unlabeled_sentence() {
        let sentences = segment("She gave him a book.");
        let tagged = tag_document(&sentences, &WrongArity);
        assert!(tagged[0].tokens.iter().all(|t| t.asc.is_none()));
    }
}
