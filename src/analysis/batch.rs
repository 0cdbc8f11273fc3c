use std::{
    collections::HashMap,
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use log::{
    debug,
    warn,
};
use rayon::prelude::*;

use super::indices::IndexRecord;
use crate::{
    core::{
        pipeline::process_text,
        AscmineError,
    },
    dictionary::{
        AssociationTable,
        FrequencyTable,
    },
    tagging::AscTagger,
};

/// Per-file index records in input order, plus the files that had to be
/// skipped and why.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub records: Vec<(String, IndexRecord)>,
    pub skipped_files: Vec<(String, String)>,
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Two distinct paths collapsing onto one output key would silently
/// overwrite each other; refuse the batch before any file is read.
fn check_duplicate_names(paths: &[PathBuf]) -> Result<(), AscmineError> {
    let mut seen: HashMap<String, &Path> = HashMap::new();

    for path in paths {
        let name = base_name(path);
        if let Some(first) = seen.insert(name.clone(), path) {
            return Err(AscmineError::DuplicateFileName(format!(
                "'{}' refers to both {} and {}",
                name,
                first.display(),
                path.display()
            )));
        }
    }

    Ok(())
}

/// Run the whole pipeline over a file list.
///
/// Files are processed in parallel but `records` follows the input order.
/// One file's read failure never stops the batch; it becomes a
/// `skipped_files` entry instead.
pub fn run_batch<T: AscTagger + Sync>(
    paths: &[PathBuf],
    tagger: &T,
    freq_table: &FrequencyTable,
    assoc_table: &AssociationTable,
) -> Result<BatchOutcome, AscmineError> {
    check_duplicate_names(paths)?;

    let results: Vec<(String, Result<IndexRecord, AscmineError>)> = paths
        .par_iter()
        .map(|path| {
            let record = fs::read_to_string(path)
                .map_err(|e| {
                    AscmineError::FailedToLoadFile(format!("{}: {}", path.display(), e))
                })
                .map(|text| process_text(&text, tagger, freq_table, assoc_table));
            (base_name(path), record)
        })
        .collect();

    let mut outcome = BatchOutcome::default();
    for (name, result) in results {
        match result {
            Ok(record) => {
                debug!("processed {}: {} indices", name, record.len());
                outcome.records.push((name, record));
            }
            Err(e) => {
                warn!("skipping {}: {}", name, e);
                outcome.skipped_files.push((name, e.to_string()));
            }
        }
    }

    Ok(outcome)
}

/// Collect `.txt` files under a directory, depth first.
pub fn find_text_files_recursive(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(find_text_files_recursive(&path));
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}
