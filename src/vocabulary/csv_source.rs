//! Reader for the `Hanzi,Pinyin,English,Category` dictionary CSV.
//!
//! The header row names the columns (any order, surrounding spaces ignored).
//! Blank lines are skipped. Rows that cannot become a [`VocabEntry`] are
//! logged, recorded in [`CsvImport::skipped`], and parsing carries on.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};

use crate::error::{LoadError, MalformedRowError};
use crate::models::VocabEntry;

pub const COLUMNS: [&str; 4] = ["Hanzi", "Pinyin", "English", "Category"];

/// Outcome of one CSV import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvImport {
    pub entries: Vec<VocabEntry>,
    pub skipped: Vec<MalformedRowError>,
}

pub fn parse_csv(text: &str) -> Result<CsvImport, LoadError> {
    read_csv(text.as_bytes())
}

pub fn read_csv_path(path: impl AsRef<Path>) -> Result<CsvImport, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let import = read_csv(file)?;
    info!(
        "read {} entries from {} ({} skipped)",
        import.entries.len(),
        path.display(),
        import.skipped.len()
    );
    Ok(import)
}

pub fn read_csv<R: Read>(source: R) -> Result<CsvImport, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut import = CsvImport::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                skip(&mut import, line, e.to_string());
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match row_to_entry(&record, &headers) {
            Ok(entry) => import.entries.push(entry),
            Err(reason) => skip(&mut import, line, reason),
        }
    }
    Ok(import)
}

fn row_to_entry(record: &StringRecord, headers: &StringRecord) -> Result<VocabEntry, String> {
    let entry: VocabEntry = record
        .deserialize(Some(headers))
        .map_err(|e| e.to_string())?;
    if entry.hanzi.trim().is_empty() {
        return Err("empty Hanzi".to_string());
    }
    Ok(entry)
}

fn skip(import: &mut CsvImport, line: u64, reason: String) {
    let err = MalformedRowError { line, reason };
    warn!("skipping CSV row: {err}");
    import.skipped.push(err);
}
