use std::{
    collections::BTreeSet,
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
};

use super::indices::IndexRecord;
use crate::core::AscmineError;

// Scalar indices lead the table; per-label keys follow alphabetically.
const LEADING_COLUMNS: &[&str] = &[
    "clauseCount",
    "mvTTR",
    "mi_Av",
    "tscore_Av",
    "deltap_lemma_cue_Av",
    "deltap_structure_cue_Av",
    "lemma_freq_Av",
    "asc_freq_Av",
    "asc_lemma_freq_Av",
];

/// The reference column order for a result set: the union of every observed
/// key, scalar indices first, the dynamically-named rest sorted.
pub fn union_columns(records: &[(String, IndexRecord)]) -> Vec<String> {
    let mut rest: BTreeSet<&str> = BTreeSet::new();
    for (_, record) in records {
        for key in record.keys() {
            if !LEADING_COLUMNS.contains(&key.as_str()) {
                rest.insert(key.as_str());
            }
        }
    }

    let mut columns: Vec<String> = Vec::new();
    for name in LEADING_COLUMNS {
        if records.iter().any(|(_, record)| record.contains(name)) {
            columns.push(name.to_string());
        }
    }
    columns.extend(rest.into_iter().map(str::to_string));
    columns
}

/// Write one row per record, in insertion order, under a `filename,...`
/// header. Keys absent from a record render as empty fields so every row
/// keeps the same width.
pub fn write_csv(
    records: &[(String, IndexRecord)],
    columns: &[String],
    out_path: &Path,
) -> Result<(), AscmineError> {
    let file = File::create(out_path)
        .map_err(|e| AscmineError::Custom(format!("Failed to create CSV file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    let header: Vec<&str> =
        std::iter::once("filename").chain(columns.iter().map(String::as_str)).collect();
    writeln!(writer, "{}", header.join(","))
        .map_err(|e| AscmineError::Custom(format!("Failed to write CSV header: {}", e)))?;

    for (filename, record) in records {
        let row: Vec<String> = std::iter::once(filename.clone())
            .chain(columns.iter().map(|column| {
                record.get(column).map(|value| value.to_string()).unwrap_or_default()
            }))
            .collect();
        writeln!(writer, "{}", row.join(","))
            .map_err(|e| AscmineError::Custom(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| AscmineError::Custom(format!("Failed to flush CSV file: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn record(entries: &[(&str, f64)]) -> IndexRecord {
        let mut record = IndexRecord::default();
        for (name, value) in entries {
            record.insert(*name, *value);
        }
        record
    }

    #[test]
    fn union_puts_scalars_first_and_sorts_the_rest() {
        let records = vec![
            ("a.txt".to_string(), record(&[("clauseCount", 1.0), ("Y_Prop", 1.0)])),
            ("b.txt".to_string(), record(&[("clauseCount", 2.0), ("mvTTR", 0.5), ("X_Prop", 1.0)])),
        ];

        let columns = union_columns(&records);
        assert_eq!(columns, vec!["clauseCount", "mvTTR", "X_Prop", "Y_Prop"]);
    }

    #[test]
    fn rows_keep_constant_width_with_missing_keys_empty() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");

        let records = vec![
            ("a.txt".to_string(), record(&[("clauseCount", 0.0), ("mvTTR", 0.0)])),
            (
                "b.txt".to_string(),
                record(&[("clauseCount", 3.0), ("mvTTR", 0.5), ("X_Prop", 1.0)]),
            ),
        ];
        let columns: Vec<String> =
            ["clauseCount", "mvTTR", "X_Prop"].iter().map(|s| s.to_string()).collect();

        write_csv(&records, &columns, &out).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "filename,clauseCount,mvTTR,X_Prop");
        assert_eq!(lines[1], "a.txt,0,0,");
        assert_eq!(lines[2], "b.txt,3,0.5,1");
        assert!(lines.iter().all(|line| line.split(',').count() == 4));
    }

    #[test]
    fn rows_follow_record_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");

        let records = vec![
            ("z.txt".to_string(), record(&[("clauseCount", 1.0)])),
            ("a.txt".to_string(), record(&[("clauseCount", 2.0)])),
        ];
        let columns = vec!["clauseCount".to_string()];

        write_csv(&records, &columns, &out).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        let names: Vec<&str> =
            content.lines().skip(1).map(|line| line.split(',').next().unwrap()).collect();
        assert_eq!(names, vec!["z.txt", "a.txt"]);
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let records = vec![("a.txt".to_string(), record(&[("clauseCount", 1.0)]))];
        let columns = vec!["clauseCount".to_string()];

        let result = write_csv(&records, &columns, Path::new("/nonexistent/dir/out.csv"));
        assert!(result.is_err());
    }
}
