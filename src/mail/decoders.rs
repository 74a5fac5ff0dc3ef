use std::borrow::Cow;

use scraper::Html;

/// Elements whose text never belongs in a readable body.
pub const DROPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Elements html5ever keeps as one unparsed text node. Their text may still
/// hold markup, so it is parsed again before use.
pub const RAW_TEXT_ELEMENTS: &[&str] = &[
    "noscript", "iframe", "noembed", "noframes", "xmp", "title", "textarea", "plaintext",
];

/// Turn an HTML body into one line of readable text.
///
/// Markup is parsed leniently (html5ever recovers from anything), script and
/// style subtrees are removed, remaining text nodes are joined with newlines
/// and the result is collapsed to single spaces.
pub fn clean_html(html: &str) -> String {
    let mut document = Html::parse_document(html);
    remove_elements(&mut document, DROPPED_ELEMENTS);
    let text = collect_text(&document, "\n");
    normalize_whitespace(&text)
}

/// Detach every element named in `tags`, with its whole subtree.
/// Returns how many elements were removed.
pub fn remove_elements(document: &mut Html, tags: &[&str]) -> usize {
    let doomed: Vec<_> = document
        .tree
        .root()
        .descendants()
        .filter(|node| {
            node.value()
                .as_element()
                .is_some_and(|el| tags.contains(&el.name()))
        })
        .map(|node| node.id())
        .collect();

    for id in &doomed {
        if let Some(mut node) = document.tree.get_mut(*id) {
            node.detach();
        }
    }
    doomed.len()
}

/// Concatenate all text nodes in document order, `separator` between nodes.
/// Text held by a raw-text element contributes only its own text content.
pub fn collect_text(document: &Html, separator: &str) -> String {
    let mut pieces: Vec<Cow<'_, str>> = Vec::new();
    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let in_raw_element = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|el| RAW_TEXT_ELEMENTS.contains(&el.name()));
        if in_raw_element {
            pieces.push(Cow::Owned(fragment_text(text, separator)));
        } else {
            pieces.push(Cow::Borrowed(&**text));
        }
    }
    pieces.join(separator)
}

// Each pass consumes at least one level of tags, so nesting terminates.
fn fragment_text(markup: &str, separator: &str) -> String {
    let mut fragment = Html::parse_fragment(markup);
    remove_elements(&mut fragment, DROPPED_ELEMENTS);
    collect_text(&fragment, separator)
}

/// Trim lines, drop blank ones, then squeeze every whitespace run
/// (newlines included) to one space.
pub fn normalize_whitespace(text: &str) -> String {
    let joined = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of already-clean text, for list previews.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().nth(max_chars).is_some() {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_become_space_separated() {
        assert_eq!(clean_html("<p>Hello</p><p>World</p>"), "Hello World");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(clean_html("   "), "");
        assert_eq!(clean_html(""), "");
    }

    #[test]
    fn script_and_style_text_is_dropped() {
        let html = r#"<html><head><style>p { color: red; }</style>
            <script>var secret = "leak";</script></head>
            <body><p>Visible</p><script>alert("also leak")</script></body></html>"#;
        let out = clean_html(html);
        assert_eq!(out, "Visible");
        assert!(!out.contains("leak"));
        assert!(!out.contains("color"));
    }

    #[test]
    fn adjacent_inline_nodes_do_not_run_together() {
        assert_eq!(clean_html("<b>bold</b><i>italic</i>"), "bold italic");
    }

    #[test]
    fn entities_and_nbsp_are_decoded_and_collapsed() {
        assert_eq!(
            clean_html("<div>Fish&nbsp;&amp;&nbsp;chips</div>\r\n<div>  </div>"),
            "Fish & chips"
        );
    }

    #[test]
    fn malformed_markup_degrades_to_text() {
        let out = clean_html("<div><p>unclosed <b>bold <i>mess</div></span>tail");
        assert_eq!(out, "unclosed bold mess tail");
    }

    #[test]
    fn comments_are_not_text() {
        assert_eq!(clean_html("<p>a<!-- hidden -->b</p>"), "a b");
    }

    #[test]
    fn noscript_pixel_leaves_no_markup() {
        assert_eq!(
            clean_html(r#"<p>Hi</p><noscript><img src="t.gif"></noscript>"#),
            "Hi"
        );
        assert_eq!(clean_html("<noscript><p>ns</p></noscript>t"), "ns t");
    }

    #[test]
    fn raw_text_elements_yield_only_their_text() {
        for tag in ["iframe", "xmp", "noembed", "noframes", "title", "textarea"] {
            let out = clean_html(&format!("<{tag}><b>i</b></{tag}><p>after</p>"));
            assert_eq!(out, "i after", "inside <{tag}>");
        }
    }

    #[test]
    fn nested_raw_text_and_script_inside_noscript() {
        let out = clean_html(
            "<noscript><iframe><i>deep</i></iframe><script>x()</script></noscript>",
        );
        assert_eq!(out, "deep");
    }

    #[test]
    fn remove_elements_counts_and_detaches() {
        let mut doc = Html::parse_document("<p>x</p><script>1</script><style>2</style>");
        assert_eq!(remove_elements(&mut doc, DROPPED_ELEMENTS), 2);
        assert_eq!(collect_text(&doc, "|"), "x");
    }

    #[test]
    fn collect_text_separates_nodes() {
        let doc = Html::parse_document("<p>one</p><p>two</p>");
        assert_eq!(collect_text(&doc, "\n"), "one\ntwo");
    }

    #[test]
    fn normalize_whitespace_steps() {
        assert_eq!(
            normalize_whitespace("  first  line \n\n\t\n second\tline  \n"),
            "first line second line"
        );
        assert_eq!(normalize_whitespace(" \n \n "), "");
    }

    #[test]
    fn normalize_whitespace_is_idempotent() {
        let once = normalize_whitespace("a \n\n b\t\tc\u{a0} d ");
        assert_eq!(normalize_whitespace(&once), once);
        assert_eq!(clean_html(&once), once);
    }

    #[test]
    fn snippet_truncates_on_chars() {
        assert_eq!(snippet("héllo world", 5), "héllo…");
        assert_eq!(snippet("short", 10), "short");
    }
}
