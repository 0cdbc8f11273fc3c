use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::morphology::analyze;
use crate::core::models::{
    Sentence,
    Token,
};

fn sentence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^.!?\n]+[.!?]*|[.!?]+").unwrap())
}

/// Split raw text into sentences of tokens.
///
/// Boundaries are punctuation-driven; a chunk keeps its trailing terminators
/// so the token stream reconstructs the text's token content. Empty input
/// yields an empty vector, not an error.
pub fn segment(text: &str) -> Vec<Sentence> {
    sentence_pattern()
        .find_iter(text)
        .filter_map(|chunk| {
            let trimmed = chunk.as_str().trim();
            if trimmed.is_empty() {
                return None;
            }

            Some(Sentence { text: trimmed.to_string(), tokens: tokenize_sentence(trimmed) })
        })
        .filter(|sentence| !sentence.tokens.is_empty())
        .collect()
}

/// Tokenize one sentence. Whitespace segments are dropped; punctuation
/// tokens are kept. Spans are byte offsets into the sentence text.
pub fn tokenize_sentence(sentence: &str) -> Vec<Token> {
    sentence
        .split_word_bound_indices()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .map(|(start, segment)| {
            let (lemma, pos) = analyze(segment);
            Token {
                start,
                end: start + segment.len(),
                surface: segment.to_string(),
                lemma,
                pos,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Pos;

    #[test]
    fn splits_into_two_sentences() {
        let sentences = segment("This is one. This is two.");
        assert_eq!(sentences.len(), 2);
        assert!(!sentences[0].tokens.is_empty());
        assert_eq!(sentences[0].text, "This is one.");
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(segment("").is_empty());
        assert!(segment("   \n  ").is_empty());
    }

    #[test]
    fn token_surfaces_reconstruct_the_text() {
        let text = "Hello world. Run fast!";
        let rebuilt: String = segment(text)
            .iter()
            .flat_map(|sentence| sentence.tokens.iter())
            .map(|token| token.surface.as_str())
            .collect();

        let squeezed: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rebuilt, squeezed);
    }

    #[test]
    fn spans_index_into_the_sentence_text() {
        let sentences = segment("She gave him a book.");
        for token in &sentences[0].tokens {
            assert_eq!(&sentences[0].text[token.start..token.end], token.surface);
        }
    }

    #[test]
    fn unterminated_text_still_forms_a_sentence() {
        let sentences = segment("no final stop");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].tokens.len(), 3);
    }

    #[test]
    fn punctuation_tokens_are_kept() {
        let sentences = segment("Stop!");
        let kinds: Vec<&Pos> = sentences[0].tokens.iter().map(|t| &t.pos).collect();
        assert!(kinds.contains(&&Pos::Punctuation));
    }
}
