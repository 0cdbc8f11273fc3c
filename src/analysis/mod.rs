pub mod batch;
pub mod export;
pub mod indices;


pub use batch::{
    find_text_files_recursive,
    run_batch,
    BatchOutcome,
};
pub use export::{
    union_columns,
    write_csv,
};
pub use indices::{
    aggregate,
    collect_clauses,
    ClauseInventory,
    IndexRecord,
};
