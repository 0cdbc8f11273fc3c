use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pos {
    Noun,
    ProperNoun,
    Pronoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Interjection,
    Punctuation,
    Symbol,
    Unknown,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            Pos::Noun => "Noun",
            Pos::ProperNoun => "Proper Noun",
            Pos::Pronoun => "Pronoun",
            Pos::Verb => "Verb",
            Pos::Auxiliary => "Auxiliary",
            Pos::Adjective => "Adjective",
            Pos::Adverb => "Adverb",
            Pos::Determiner => "Determiner",
            Pos::Preposition => "Preposition",
            Pos::Conjunction => "Conjunction",
            Pos::Number => "Number",
            Pos::Interjection => "Interjection",
            Pos::Punctuation => "Punctuation",
            Pos::Symbol => "Symbol",
            Pos::Unknown => "Unknown",
        };
        write!(f, "{}", readable)
    }
}

impl Pos {
    pub fn is_verb(&self) -> bool {
        matches!(self, Pos::Verb)
    }

    /// Categories that can head a noun phrase.
    pub fn is_nominal(&self) -> bool {
        matches!(self, Pos::Noun | Pos::ProperNoun | Pos::Pronoun | Pos::Number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub start: usize,    // Byte offset within the sentence
    pub end: usize,
    pub surface: String, // As found in the sentence
    pub lemma: String,   // Case-normalized dictionary form
    pub pos: Pos,
}

#[derive(Debug, Clone)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Segmenter output plus one optional construction label per token. Only the
/// clause-head token of a detected clause carries a label.
#[derive(Debug, Clone)]
pub struct TaggedToken {
    pub token: Token,
    pub asc: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TaggedSentence {
    pub text: String,
    pub tokens: Vec<TaggedToken>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AssociationScores {
    pub mi: f64,
    pub tscore: f64,
    pub deltap_lemma_cue: f64,
    pub deltap_structure_cue: f64,
}

/// A tagged token with its corpus statistics attached. Tokens without a
/// construction label keep the all-zero defaults.
#[derive(Debug, Clone)]
pub struct EnrichedToken {
    pub token: Token,
    pub asc: Option<String>,
    pub lemma_freq: u64,
    pub asc_freq: u64,
    pub pair_freq: u64,
    pub scores: AssociationScores,
}

impl From<TaggedToken> for EnrichedToken {
    fn from(tagged: TaggedToken) -> Self {
        EnrichedToken {
            token: tagged.token,
            asc: tagged.asc,
            lemma_freq: 0,
            asc_freq: 0,
            pair_freq: 0,
            scores: AssociationScores::default(),
        }
    }
}
