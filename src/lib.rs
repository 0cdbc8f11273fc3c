pub mod analysis;
pub mod core;
pub mod dictionary;
pub mod segmentation;
pub mod tagging;

pub use crate::{
    analysis::{
        run_batch,
        union_columns,
        write_csv,
        BatchOutcome,
        IndexRecord,
    },
    core::{
        pipeline::{
            extract_enriched_doc,
            process_text,
        },
        AscmineError,
    },
    dictionary::{
        AssociationTable,
        FrequencyTable,
    },
    tagging::{
        AscTagger,
        PatternTagger,
    },
};
