//! Error types for the extraction pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failure that aborts a whole export: nothing from the document is usable.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The export file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The bytes are not a JSON document.
    #[error("Error decoding JSON: {0}")]
    Decode(#[from] serde_json::Error),
    /// The document has no top-level `value` field.
    #[error("No 'value' array found in the JSON data.")]
    MissingValue,
    /// `value` exists but is not an array.
    #[error("No 'value' array found in the JSON data ('value' is {found}).")]
    ValueNotArray { found: &'static str },
}

/// Problem confined to one record. The record is still emitted, only its
/// cleaned content is left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordIssue {
    #[error("Body content not found for email with subject: {subject}")]
    MissingBody { subject: String },
    #[error("Body content of email with subject {subject:?} is {found}, not text")]
    UnreadableBody { subject: String, found: &'static str },
}

impl RecordIssue {
    pub fn subject(&self) -> &str {
        match self {
            RecordIssue::MissingBody { subject } | RecordIssue::UnreadableBody { subject, .. } => {
                subject
            }
        }
    }
}

/// Name of a JSON value's kind, for diagnostics.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
