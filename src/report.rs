//! Plain console rendering of processed messages.

use crate::domain::email::NormalizedMessage;

pub const EMPTY_NOTICE: &str = "No emails found in the selected file.";
const RULE_WIDTH: usize = 50;

pub fn success_line(count: usize) -> String {
    format!("Successfully processed {count} emails.")
}

/// One block per message, or [`EMPTY_NOTICE`] when there are none.
pub fn render_text(messages: &[NormalizedMessage]) -> String {
    if messages.is_empty() {
        return format!("{EMPTY_NOTICE}\n");
    }
    messages.iter().map(render_block).collect()
}

fn render_block(m: &NormalizedMessage) -> String {
    format!(
        "\n--- Email {} ---\nSubject: {}\nSender: {}\nSent Time: {}\nCleaned Content:\n{}\n{}\n",
        m.index,
        m.subject,
        m.sender_line(),
        m.sent_time,
        m.content_or_notice(),
        "-".repeat(RULE_WIDTH),
    )
}

pub fn render_json(messages: &[NormalizedMessage]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(index: usize, content: Option<&str>) -> NormalizedMessage {
        NormalizedMessage {
            index,
            subject: "Status".into(),
            sender_name: "Ops".into(),
            sender_address: "ops@example.com".into(),
            sent_time: "2024-03-01 10:15:30 UTC".into(),
            cleaned_content: content.map(str::to_string),
        }
    }

    #[test]
    fn block_layout() {
        let out = render_text(&[message(1, Some("All green"))]);
        let expected = format!(
            "\n--- Email 1 ---\nSubject: Status\nSender: Ops <ops@example.com>\n\
             Sent Time: 2024-03-01 10:15:30 UTC\nCleaned Content:\nAll green\n{}\n",
            "-".repeat(50)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn blocks_concatenate_in_order() {
        let out = render_text(&[message(1, Some("a")), message(2, Some("b"))]);
        assert_eq!(out.matches("--- Email ").count(), 2);
        assert!(out.find("--- Email 1 ---").unwrap() < out.find("--- Email 2 ---").unwrap());
    }

    #[test]
    fn missing_content_and_empty_list() {
        assert!(render_text(&[message(2, None)]).contains("Cleaned Content:\n(no content)\n"));
        assert_eq!(render_text(&[]), "No emails found in the selected file.\n");
    }

    #[test]
    fn json_array_in_order() {
        let out = render_json(&[message(1, None), message(2, Some("x"))]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["index"], 1);
        assert!(v[0]["cleanedContent"].is_null());
        assert_eq!(v[1]["cleanedContent"], "x");
    }

    #[test]
    fn success_wording() {
        assert_eq!(success_line(2), "Successfully processed 2 emails.");
    }
}
