pub mod enricher;
pub mod tables;

pub use enricher::enrich;
pub use tables::{
    pair_key,
    AssociationTable,
    FrequencyTable,
};
