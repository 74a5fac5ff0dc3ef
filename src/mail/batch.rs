//! Whole-export processing: read, decode, validate the `value` array, then
//! extract every record in order.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde_json::Value;

use crate::domain::email::NormalizedMessage;
use crate::error::{BatchError, RecordIssue, json_kind};
use crate::mail::graph::extract;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of a successfully decoded export. `messages` has one entry per
/// record of the `value` array, in the same order, indexed `1..=N`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    pub messages: Vec<NormalizedMessage>,
    pub issues: Vec<RecordIssue>,
}

impl Batch {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn log_issues(&self) {
        for issue in &self.issues {
            warn!("{issue}");
        }
    }
}

/// Extract every record; per-record problems never drop a record.
pub fn extract_all(records: &[Value]) -> Batch {
    let mut batch = Batch {
        messages: Vec::with_capacity(records.len()),
        issues: Vec::new(),
    };
    for (i, record) in records.iter().enumerate() {
        let out = extract(record, i + 1);
        if let Some(issue) = out.issue {
            batch.issues.push(issue);
        }
        batch.messages.push(out.message);
    }
    batch
}

/// Decode an export document held in memory.
pub fn parse_document(bytes: &[u8]) -> Result<Batch, BatchError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let document: Value = serde_json::from_slice(bytes)?;

    match document.get("value") {
        Some(Value::Array(records)) => {
            debug!("decoded export with {} records", records.len());
            Ok(extract_all(records))
        }
        Some(other) => Err(BatchError::ValueNotArray {
            found: json_kind(other),
        }),
        None => Err(BatchError::MissingValue),
    }
}

/// Read and decode an export file, keeping fatal errors distinguishable.
pub fn load_file(path: impl AsRef<Path>) -> Result<Batch, BatchError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let batch = parse_document(&bytes)?;
    info!(
        "processed {} emails from {} ({} with problems)",
        batch.messages.len(),
        path.display(),
        batch.issues.len()
    );
    Ok(batch)
}

/// Process an export file into its normalized messages.
///
/// Never fails: every diagnostic is logged, and a document-level failure
/// yields an empty list. Use [`load_file`] to tell those cases apart.
pub fn process_file(path: impl AsRef<Path>) -> Vec<NormalizedMessage> {
    match load_file(path) {
        Ok(batch) => {
            batch.log_issues();
            batch.messages
        }
        Err(e) => {
            warn!("{e}");
            Vec::new()
        }
    }
}
