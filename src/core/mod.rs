pub mod errors;
pub mod models;
pub mod pipeline;

pub use errors::AscmineError;
pub use models::{
    AssociationScores,
    EnrichedToken,
    Pos,
    Sentence,
    TaggedSentence,
    TaggedToken,
    Token,
};
