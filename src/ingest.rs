//! Bulk CSV ingestion.
//!
//! A dataset is four headered CSV sources (dynasties, kings, scholars,
//! events) concatenated in that order. Loading is all-or-nothing: any
//! unreadable file or malformed row fails the whole load and no partial
//! dataset escapes; the embedding shell shows its error state instead.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::core::{RawRecord, RecordCategory, parse_significance};
use crate::error::{TimelineError, TimelineResult};

/// Source file stems in load order.
pub const SOURCE_STEMS: [&str; 4] = ["dynasties", "kings", "scholars", "events"];

/// Physical CSV row; every column is optional at this layer. The dynasty
/// column answers to both the logical `dynasty_reference` header and the
/// legacy `dynasty_name` one.
#[derive(Debug, Deserialize)]
struct SourceRow {
    id: Option<String>,
    #[serde(rename = "type")]
    record_type: Option<String>,
    name: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    significance: Option<String>,
    #[serde(alias = "dynasty_name")]
    dynasty_reference: Option<String>,
    color: Option<String>,
    image: Option<String>,
    description: Option<String>,
}

/// Reads one headered CSV source, synthesizing `<stem>-<index>` ids for rows
/// that do not carry their own.
pub fn load_records(stem: &str, reader: impl Read) -> TimelineResult<Vec<RawRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize().enumerate() {
        let row: SourceRow = row.map_err(|e| source_error(stem, format!("row {index}: {e}")))?;
        records.push(into_record(stem, index, row));
    }
    debug!(source = stem, rows = records.len(), "parsed source");
    Ok(records)
}

/// Loads the four-source dataset from a directory, in fixed stem order.
///
/// Fatal on the first failure; no partial dataset is ever returned.
pub fn load_dataset(dir: impl AsRef<Path>) -> TimelineResult<Vec<RawRecord>> {
    let dir = dir.as_ref();
    let mut records = Vec::new();
    for stem in SOURCE_STEMS {
        let path = dir.join(format!("{stem}.csv"));
        let file = File::open(&path)
            .map_err(|e| source_error(stem, format!("cannot open {}: {e}", path.display())))?;
        records.extend(load_records(stem, file)?);
    }
    info!(records = records.len(), "dataset loaded");
    Ok(records)
}

fn into_record(stem: &str, index: usize, row: SourceRow) -> RawRecord {
    RawRecord {
        id: row.id.unwrap_or_else(|| format!("{stem}-{index}")),
        category: RecordCategory::from_source_type(row.record_type.as_deref().unwrap_or("")),
        name: row.name.unwrap_or_default(),
        start_date: row.start_date,
        end_date: row.end_date,
        significance: parse_significance(row.significance.as_deref()),
        dynasty_reference: row.dynasty_reference,
        color: row.color,
        image: row.image,
        description: row.description,
    }
}

fn source_error(stem: &str, detail: String) -> TimelineError {
    TimelineError::SourceLoad {
        source_name: stem.to_owned(),
        detail,
    }
}
