//! Normalize Microsoft Graph mailbox exports into readable plain-text messages.

pub mod config;
pub mod domain;
pub mod error;
pub mod mail;
pub mod report;
pub mod terminal;

pub use domain::email::NormalizedMessage;
pub use error::{BatchError, RecordIssue};
pub use mail::batch::{Batch, load_file, parse_document, process_file};
pub use mail::decoders::clean_html;
pub use mail::timestamp::format_timestamp;
