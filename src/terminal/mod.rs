pub mod events;
pub mod state;
pub mod structs;
pub mod ui;

use std::path::Path;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::config::Config;
use crate::terminal::state::AppState;

/// Run the interactive browser, optionally loading `initial` first.
pub fn run_tui(cfg: &Config, initial: Option<&Path>) -> Result<()> {
    color_eyre::install().map_err(|e| anyhow!("{e}"))?;

    let mut state = AppState::new(cfg);
    if let Some(path) = initial {
        state.load_path(path);
    }

    let terminal = ratatui::init();
    let result = run(terminal, &mut state);

    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, state: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, state))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if events::handle_key(key, state) {
                break;
            }
        }
    }
    Ok(())
}
