//! Field extraction from Microsoft Graph message records.
//!
//! Records are read as loose `serde_json::Value`s: any field may be absent or
//! of the wrong type, and every lookup falls back to a fixed default.

use serde_json::Value;

use crate::domain::email::{
    MessageIndex, NO_ADDRESS, NO_SUBJECT, NormalizedMessage, UNKNOWN_SENDER,
};
use crate::error::{RecordIssue, json_kind};
use crate::mail::decoders::clean_html;
use crate::mail::timestamp::format_timestamp;

const SUBJECT: &[&str] = &["subject"];
const SENDER_NAME: &[&str] = &["sender", "emailAddress", "name"];
const SENDER_ADDRESS: &[&str] = &["sender", "emailAddress", "address"];
const SENT_TIME: &[&str] = &["sentDateTime"];
const BODY_CONTENT: &[&str] = &["body", "content"];

/// A normalized message plus whatever went wrong while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub message: NormalizedMessage,
    pub issue: Option<RecordIssue>,
}

/// Walk nested keys; a missing or non-object level ends the walk with `None`.
pub fn lookup<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(record, |node, key| node.get(*key))
}

/// String leaf at `path`, or `default` when absent or not a string.
pub fn text_field(record: &Value, path: &[&str], default: &str) -> String {
    lookup(record, path)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Raw HTML of the body. Missing `body`/`content` and non-text content are
/// both reported against the record's subject.
pub fn body_content<'a>(record: &'a Value, subject: &str) -> Result<&'a str, RecordIssue> {
    let content = lookup(record, BODY_CONTENT).ok_or_else(|| RecordIssue::MissingBody {
        subject: subject.to_string(),
    })?;
    content.as_str().ok_or_else(|| RecordIssue::UnreadableBody {
        subject: subject.to_string(),
        found: json_kind(content),
    })
}

/// Build the normalized form of one record. Never fails: problems degrade
/// to defaults or to absent content and are returned alongside.
pub fn extract(record: &Value, index: MessageIndex) -> Extracted {
    let subject = text_field(record, SUBJECT, NO_SUBJECT);

    let (cleaned_content, issue) = match body_content(record, &subject) {
        Ok(html) => {
            let text = clean_html(html);
            // an empty rendering is reported as no content at all
            ((!text.is_empty()).then_some(text), None)
        }
        Err(issue) => (None, Some(issue)),
    };

    let raw_time = text_field(record, SENT_TIME, "");

    Extracted {
        message: NormalizedMessage {
            index,
            sender_name: text_field(record, SENDER_NAME, UNKNOWN_SENDER),
            sender_address: text_field(record, SENDER_ADDRESS, NO_ADDRESS),
            sent_time: format_timestamp(&raw_time),
            cleaned_content,
            subject,
        },
        issue,
    }
}
