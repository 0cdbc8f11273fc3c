pub mod morphology;

pub mod segmenter;

pub use segmenter::{
    segment,
    tokenize_sentence,
};
