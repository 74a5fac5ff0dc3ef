use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::mail::decoders::snippet;
use crate::report::EMPTY_NOTICE;
use crate::terminal::state::{AppState, Focus, LoadStatus};

const WELCOME: &str = "Welcome to Email Processor.\nStart by pressing 'o' and entering the path of a JSON file containing email data.";

pub fn render(f: &mut Frame, state: &mut AppState) {
    let [main, status_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .margin(1)
            .areas(main);

    render_list(f, state, left);
    render_body(f, state, right);
    render_status(f, state, status_area);
    render_hint(f, hint_area);

    if state.focus == Focus::Prompt {
        render_prompt(f, state);
    }
}

fn border_for(active: bool) -> Style {
    Style::default().fg(if active { Color::Yellow } else { Color::DarkGray })
}

fn render_list(f: &mut Frame, state: &mut AppState, area: Rect) {
    let title = match &state.status {
        LoadStatus::Loaded { path, .. } | LoadStatus::Failed { path, .. } => {
            format!(" {} ", path.display())
        }
        LoadStatus::NotLoaded => " Processed Emails ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_for(state.focus == Focus::List));

    if state.visible.is_empty() {
        let text = match state.status {
            LoadStatus::NotLoaded => WELCOME,
            _ => EMPTY_NOTICE,
        };
        let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
        f.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = state
        .visible_messages()
        .map(|m| {
            let label = Span::styled(m.list_label(), Style::default().add_modifier(Modifier::BOLD));
            let preview = Span::styled(
                snippet(m.content_or_notice(), state.snippet_chars),
                Style::default().fg(Color::Gray),
            );
            ListItem::new(Text::from(vec![Line::from(label), Line::from(preview)]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("➜ ")
        .highlight_style(Style::default().fg(Color::Green));

    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn render_body(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .title(" Email ")
        .borders(Borders::ALL)
        .border_style(border_for(state.focus == Focus::Body));

    let text = match state.opened_message() {
        Some(m) => {
            let bold = Style::default().add_modifier(Modifier::BOLD);
            Text::from(vec![
                Line::from(vec![Span::styled("Subject: ", bold), Span::raw(m.subject.clone())]),
                Line::from(vec![Span::styled("Sender: ", bold), Span::raw(m.sender_line())]),
                Line::from(vec![Span::styled("Sent Time: ", bold), Span::raw(m.sent_time.clone())]),
                Line::default(),
                Line::from(Span::styled("Email Content:", bold)),
                Line::from(m.content_or_notice().to_string()),
            ])
        }
        None if state.notices.is_empty() => Text::from("Select an email and press Enter."),
        None => {
            let mut lines = vec![Line::from(Span::styled(
                "Problems in this file:",
                Style::default().fg(Color::Yellow),
            ))];
            lines.extend(state.notices.iter().map(|n| Line::from(n.clone())));
            Text::from(lines)
        }
    };

    let p = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.body_scroll, 0));

    f.render_widget(p, area);
}

fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(msg) = state.status.message() else {
        return;
    };
    let color = match state.status {
        LoadStatus::Failed { .. } => Color::Red,
        _ => Color::Green,
    };
    f.render_widget(Paragraph::new(msg).style(Style::default().fg(color)), area);
}

fn render_hint(f: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("j/k", bold),
        Span::raw(" move  "),
        Span::styled("Enter", bold),
        Span::raw(" open  "),
        Span::styled("Tab", bold),
        Span::raw(" focus  "),
        Span::styled("o", bold),
        Span::raw(" open file  "),
        Span::styled("q", bold),
        Span::raw(" quit"),
    ]));
    f.render_widget(hint, area);
}

fn render_prompt(f: &mut Frame, state: &AppState) {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(f.area());
    let [_, area, _] = Layout::horizontal([
        Constraint::Percentage(15),
        Constraint::Percentage(70),
        Constraint::Percentage(15),
    ])
    .areas(row);

    let p = Paragraph::new(format!("{}_", state.prompt.input_value)).block(
        Block::default()
            .title(" Select File (Enter to load, Esc to cancel) ")
            .borders(Borders::ALL)
            .border_style(border_for(true)),
    );
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::mail::batch::parse_document;
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::Path;

    fn screen(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 24)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn welcome_before_any_load() {
        let mut s = AppState::new(&Config::default());
        assert!(screen(&mut s).contains("Welcome to Email Processor."));
    }

    #[test]
    fn empty_load_shows_empty_notice_and_status() {
        let mut s = AppState::new(&Config::default());
        s.apply_load(Path::new("e.json"), parse_document(br#"{"value":[]}"#));
        let out = screen(&mut s);
        assert!(out.contains(EMPTY_NOTICE));
        assert!(out.contains("Successfully processed 0 emails."));
    }

    #[test]
    fn opened_message_detail() {
        let mut s = AppState::new(&Config::default());
        s.apply_load(
            Path::new("e.json"),
            parse_document(
                br#"{"value":[{"subject":"Hello","sender":{"emailAddress":{"name":"Bo","address":"bo@x.io"}},
                    "body":{"content":"<p>Body text</p>"}}]}"#,
            ),
        );
        s.open_selected();
        let out = screen(&mut s);
        assert!(out.contains("1. Hello"));
        assert!(out.contains("Sender: Bo <bo@x.io>"));
        assert!(out.contains("Sent Time: Unknown"));
        assert!(out.contains("Body text"));
    }

    #[test]
    fn list_scroll_offset_survives_redraws() {
        let records: Vec<String> = (1..=30)
            .map(|i| format!(r#"{{"subject":"Message {i}"}}"#))
            .collect();
        let json = format!(r#"{{"value":[{}]}}"#, records.join(","));
        let mut s = AppState::new(&Config::default());
        s.apply_load(Path::new("long.json"), parse_document(json.as_bytes()));

        s.select_last();
        screen(&mut s);
        let offset = s.list_state.offset();
        assert!(offset > 0);

        // moving up inside the visible window must not scroll the list
        s.move_selection(-1);
        screen(&mut s);
        assert_eq!(s.list_state.offset(), offset);
        assert!(screen(&mut s).contains("30. Message 30"));
    }
}
