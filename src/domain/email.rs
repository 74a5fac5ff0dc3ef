use serde::Serialize;

/// 1-based position of a message in the exported `value` array.
pub type MessageIndex = usize;

pub const NO_SUBJECT: &str = "No subject";
pub const UNKNOWN_SENDER: &str = "Unknown";
pub const NO_ADDRESS: &str = "No address";
pub const UNKNOWN_TIME: &str = "Unknown";

/// Shown in place of the body when no cleaned content could be produced.
pub const NO_CONTENT: &str = "(no content)";

/// One exported message after extraction. Built once per record and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMessage {
    pub index: MessageIndex,
    pub subject: String,
    pub sender_name: String,
    pub sender_address: String,
    pub sent_time: String,
    pub cleaned_content: Option<String>,
}

impl NormalizedMessage {
    /// `Name <address>`
    pub fn sender_line(&self) -> String {
        format!("{} <{}>", self.sender_name, self.sender_address)
    }

    pub fn list_label(&self) -> String {
        format!("{}. {}", self.index, self.subject.trim())
    }

    pub fn content_or_notice(&self) -> &str {
        self.cleaned_content.as_deref().unwrap_or(NO_CONTENT)
    }
}
