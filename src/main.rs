use std::path::PathBuf;

use clap::Parser;

use ascmine::{
    analysis::batch::find_text_files_recursive,
    run_batch,
    union_columns,
    write_csv,
    AscmineError,
    AssociationTable,
    FrequencyTable,
    PatternTagger,
};

/// Compute argument structure construction indices for a set of text files.
#[derive(Parser, Debug)]
#[command(name = "ascmine", version)]
struct Cli {
    /// Input text files or directories (directories are searched for .txt
    /// files recursively)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON file with lemma, construction, and pair frequency counts
    #[arg(long)]
    freq: PathBuf,

    /// JSON file with association strength scores
    #[arg(long)]
    soa: PathBuf,

    /// Destination for the index table
    #[arg(long, default_value = "asc_indices.csv")]
    output: PathBuf,
}

fn main() -> Result<(), AscmineError> {
    env_logger::init();
    let cli = Cli::parse();

    let freq_table = FrequencyTable::from_json_file(&cli.freq)?;
    let assoc_table = AssociationTable::from_json_file(&cli.soa)?;

    let mut paths = Vec::new();
    for input in &cli.inputs {
        if input.is_dir() {
            paths.extend(find_text_files_recursive(input));
        } else {
            paths.push(input.clone());
        }
    }

    let tagger = PatternTagger;
    let outcome = run_batch(&paths, &tagger, &freq_table, &assoc_table)?;

    let columns = union_columns(&outcome.records);
    write_csv(&outcome.records, &columns, &cli.output)?;

    println!("Wrote {} records to {}", outcome.records.len(), cli.output.display());
    for (name, reason) in &outcome.skipped_files {
        eprintln!("Skipped {}: {}", name, reason);
    }

    Ok(())
}
