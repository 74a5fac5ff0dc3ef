use crossterm::event::{KeyCode, KeyEvent};

use crate::terminal::state::{AppState, Focus, ViewMode};

/// Apply one key press. Returns `true` when the browser should exit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    if state.focus == Focus::Prompt {
        handle_prompt_keys(key, state);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,

        KeyCode::Esc => {
            if state.mode == ViewMode::Split {
                state.close_message();
                return false;
            }
            return true;
        }

        KeyCode::Enter => {
            state.open_selected();
            return false;
        }

        KeyCode::Tab => {
            state.toggle_focus();
            return false;
        }

        KeyCode::Char('o') => {
            state.begin_prompt();
            return false;
        }

        _ => {}
    }

    match state.focus {
        Focus::List => handle_list_keys(key, state),
        Focus::Body => handle_body_keys(key, state),
        Focus::Prompt => {}
    }
    false
}

fn handle_prompt_keys(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter => {
            let action = state.prompt.submit();
            state.finish_prompt(action);
        }
        KeyCode::Esc => {
            let action = state.prompt.cancel();
            state.finish_prompt(action);
        }
        KeyCode::Backspace => state.prompt.backspace(),
        KeyCode::Char(c) => state.prompt.push(c),
        _ => {}
    }
}

fn handle_list_keys(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => state.move_selection(-1),
        KeyCode::Home => state.select_first(),
        KeyCode::End => state.select_last(),
        _ => {}
    }
}

fn handle_body_keys(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.scroll_body(1),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_body(-1),
        KeyCode::PageDown => state.scroll_body(10),
        KeyCode::PageUp => state.scroll_body(-10),
        KeyCode::Home => state.body_scroll = 0,
        _ => {}
    }
}
