use super::AscTagger;
use crate::core::{
    models::{
        Pos,
        Token,
    },
    AscmineError,
};

pub const ATTRIBUTIVE: &str = "ATTR";
pub const PASSIVE: &str = "PASSIVE";
pub const TRANSITIVE_SIMPLE: &str = "TRAN_S";
pub const TRANSITIVE_RESULTATIVE: &str = "TRAN_RES";
pub const DITRANSITIVE: &str = "DITRAN";
pub const CAUSED_MOTION: &str = "CAUS_MOT";
pub const INTRANSITIVE_MOTION: &str = "INTRAN_MOT";
pub const INTRANSITIVE_SIMPLE: &str = "INTRAN_S";

const MOTION_PREPOSITIONS: &[&str] = &[
    "to", "into", "onto", "on", "through", "across", "toward", "towards", "up", "down", "out",
    "over", "along", "around", "past", "off", "from",
];

/// Heuristic argument-pattern classifier used when no external model is
/// wired up. One clause head per finite verb (or per argumentless copula);
/// the label comes from the argument pattern to the head's right.
///
/// The labels are open strings end-to-end, so a classifier with a different
/// inventory can be substituted without touching the index math.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternTagger;

impl AscTagger for PatternTagger {
    fn tag_sentence(&self, tokens: &[Token]) -> Result<Vec<Option<String>>, AscmineError> {
        let mut labels = vec![None; tokens.len()];

        for (idx, token) in tokens.iter().enumerate() {
            if token.pos.is_verb() {
                labels[idx] = Some(classify_verb_clause(tokens, idx).to_string());
            } else if token.pos == Pos::Auxiliary
                && token.lemma == "be"
                && heads_copular_clause(tokens, idx)
            {
                labels[idx] = Some(ATTRIBUTIVE.to_string());
            }
        }

        Ok(labels)
    }
}

/// A form of "be" heads its own clause only when no full verb follows it
/// before the next clause boundary.
fn heads_copular_clause(tokens: &[Token], head: usize) -> bool {
    for token in &tokens[head + 1..] {
        match token.pos {
            Pos::Punctuation | Pos::Conjunction => break,
            Pos::Verb => return false,
            _ => {}
        }
    }

    true
}

fn is_passive(tokens: &[Token], head: usize) -> bool {
    // Progressive forms ("is running") are never passive.
    if tokens[head].surface.to_lowercase().ends_with("ing") {
        return false;
    }

    tokens[..head]
        .iter()
        .rev()
        .take_while(|t| matches!(t.pos, Pos::Auxiliary | Pos::Adverb))
        .any(|t| t.pos == Pos::Auxiliary && t.lemma == "be")
}

fn classify_verb_clause(tokens: &[Token], head: usize) -> &'static str {
    if is_passive(tokens, head) {
        return PASSIVE;
    }

    let mut direct_objects = 0;
    let mut motion_pp = false;
    let mut trailing_adjective = false;
    let mut in_pp = false;
    let mut in_group = false;

    for token in &tokens[head + 1..] {
        match token.pos {
            Pos::Punctuation | Pos::Conjunction | Pos::Verb | Pos::Auxiliary => break,
            Pos::Preposition => {
                in_pp = true;
                in_group = false;
                if MOTION_PREPOSITIONS.contains(&token.lemma.as_str()) {
                    motion_pp = true;
                }
            }
            Pos::Determiner => {
                // A determiner after a closed prepositional object starts a
                // fresh noun phrase outside the PP.
                if in_pp && in_group {
                    in_pp = false;
                }
                in_group = false;
            }
            ref pos if pos.is_nominal() => {
                if !in_pp && !in_group {
                    direct_objects += 1;
                }
                in_group = true;
                trailing_adjective = false;
            }
            Pos::Adjective => {
                if !in_pp && in_group {
                    trailing_adjective = true;
                }
            }
            _ => {
                in_group = false;
            }
        }
    }

    if trailing_adjective && direct_objects > 0 {
        TRANSITIVE_RESULTATIVE
    } else if direct_objects >= 2 {
        DITRANSITIVE
    } else if direct_objects == 1 && motion_pp {
        CAUSED_MOTION
    } else if direct_objects == 1 {
        TRANSITIVE_SIMPLE
    } else if motion_pp {
        INTRANSITIVE_MOTION
    } else {
        INTRANSITIVE_SIMPLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::tokenize_sentence;

    fn labels_for(sentence: &str) -> Vec<Option<String>> {
        let tokens = tokenize_sentence(sentence);
        PatternTagger.tag_sentence(&tokens).expect("pattern tagger is infallible")
    }

    fn single_label(sentence: &str) -> (usize, String) {
        let labels = labels_for(sentence);
        let mut hits =
            labels.iter().enumerate().filter_map(|(i, l)| l.clone().map(|l| (i, l)));
        let head = hits.next().expect("expected one labeled clause head");
        assert!(hits.next().is_none(), "expected exactly one label in '{}'", sentence);
        head
    }

    #[test]
    fn ditransitive_from_two_object_groups() {
        let (idx, label) = single_label("She gave him a book.");
        assert_eq!(idx, 1);
        assert_eq!(label, DITRANSITIVE);
    }

    #[test]
    fn passive_from_be_plus_participle() {
        let (idx, label) = single_label("The letter was written.");
        assert_eq!(idx, 3);
        assert_eq!(label, PASSIVE);
    }

    #[test]
    fn intransitive_motion_from_bare_motion_pp() {
        let (_, label) = single_label("He ran into the room.");
        assert_eq!(label, INTRANSITIVE_MOTION);
    }

    #[test]
    fn copula_without_a_verb_is_attributive() {
        let (idx, label) = single_label("The dog is happy.");
        assert_eq!(idx, 2);
        assert_eq!(label, ATTRIBUTIVE);
    }

    #[test]
    fn resultative_from_object_plus_trailing_adjective() {
        let (_, label) = single_label("She hammered the metal flat.");
        assert_eq!(label, TRANSITIVE_RESULTATIVE);
    }

    #[test]
    fn caused_motion_from_object_plus_motion_pp() {
        let (_, label) = single_label("She sent the children to school.");
        assert_eq!(label, CAUSED_MOTION);
    }

    #[test]
    fn bare_verb_is_simple_intransitive() {
        let (_, label) = single_label("Birds sing.");
        assert_eq!(label, INTRANSITIVE_SIMPLE);
    }

    #[test]
    fn transitive_from_single_object() {
        let (_, label) = single_label("She reads books.");
        assert_eq!(label, TRANSITIVE_SIMPLE);
    }

    #[test]
    fn coordinated_clauses_get_one_head_each() {
        let labels = labels_for("He is happy and she is sad.");
        let labeled: Vec<&String> = labels.iter().flatten().collect();
        assert_eq!(labeled, vec![ATTRIBUTIVE, ATTRIBUTIVE]);
    }
}
