use std::path::{Path, PathBuf};

use ratatui::widgets::ListState;

use crate::config::Config;
use crate::domain::email::{MessageIndex, NormalizedMessage};
use crate::error::BatchError;
use crate::mail::batch::{Batch, load_file};
use crate::report::success_line;
use crate::terminal::structs::{FormAction, PathPrompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Body,
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    ListOnly,
    Split,
}

/// What the last load did. `NotLoaded` is distinct from a load that found
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loaded { path: PathBuf, count: usize },
    Failed { path: PathBuf, error: String },
}

impl LoadStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            LoadStatus::NotLoaded => None,
            LoadStatus::Loaded { count, .. } => Some(success_line(*count)),
            LoadStatus::Failed { error, .. } => {
                Some(format!("An error occurred while processing the file: {error}"))
            }
        }
    }
}

pub struct AppState {
    pub messages: Vec<NormalizedMessage>,
    /// Message indexes shown in the list, in list order.
    pub visible: Vec<MessageIndex>,
    pub list_state: ListState,

    /// The message currently opened in the right panel (only when Split)
    pub opened: Option<MessageIndex>,
    pub body_scroll: u16,

    pub focus: Focus,
    pub mode: ViewMode,
    pub previous_focus: Option<Focus>,

    pub prompt: PathPrompt,
    pub status: LoadStatus,
    /// Per-record diagnostics of the last load.
    pub notices: Vec<String>,

    pub hide_blank_subjects: bool,
    pub snippet_chars: usize,
}

impl AppState {
    pub fn new(cfg: &Config) -> Self {
        Self {
            messages: vec![],
            visible: vec![],
            list_state: ListState::default(),
            opened: None,
            body_scroll: 0,
            focus: Focus::List,
            mode: ViewMode::ListOnly,
            previous_focus: None,
            prompt: PathPrompt::default(),
            status: LoadStatus::NotLoaded,
            notices: vec![],
            hide_blank_subjects: cfg.hide_blank_subjects,
            snippet_chars: cfg.snippet_chars,
        }
    }

    pub fn load_path(&mut self, path: &Path) {
        let result = load_file(path);
        self.apply_load(path, result);
    }

    pub fn apply_load(&mut self, path: &Path, result: Result<Batch, BatchError>) {
        self.close_message();
        match result {
            Ok(batch) => {
                self.status = LoadStatus::Loaded {
                    path: path.to_path_buf(),
                    count: batch.messages.len(),
                };
                self.notices = batch.issues.iter().map(ToString::to_string).collect();
                self.messages = batch.messages;
            }
            Err(e) => {
                log::warn!("{e}");
                self.status = LoadStatus::Failed {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                };
                self.notices.clear();
                self.messages.clear();
            }
        }
        self.rebuild_visible();
    }

    fn rebuild_visible(&mut self) {
        let hide = self.hide_blank_subjects;
        self.visible = self
            .messages
            .iter()
            .filter(|m| !hide || !m.subject.trim().is_empty())
            .map(|m| m.index)
            .collect();
        self.list_state
            .select(if self.visible.is_empty() { None } else { Some(0) });
    }

    pub fn message(&self, index: MessageIndex) -> Option<&NormalizedMessage> {
        // indexes are 1..=N in order, so position is index - 1
        self.messages
            .get(index.checked_sub(1)?)
            .filter(|m| m.index == index)
    }

    pub fn visible_messages(&self) -> impl Iterator<Item = &NormalizedMessage> {
        self.visible.iter().filter_map(|i| self.message(*i))
    }

    pub fn current_selected_index(&self) -> Option<MessageIndex> {
        let pos = self.list_state.selected()?;
        self.visible.get(pos).copied()
    }

    pub fn opened_message(&self) -> Option<&NormalizedMessage> {
        self.message(self.opened?)
    }

    pub fn move_selection(&mut self, delta: i32) {
        if self.visible.is_empty() {
            self.list_state.select(None);
            return;
        }
        let cur = self.list_state.selected().unwrap_or(0) as i32;
        let len = self.visible.len() as i32;
        let next = (cur + delta).clamp(0, len - 1) as usize;
        self.list_state.select(Some(next));
    }

    pub fn select_first(&mut self) {
        if !self.visible.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.list_state.select(Some(self.visible.len() - 1));
        }
    }

    pub fn open_selected(&mut self) {
        let Some(index) = self.current_selected_index() else {
            return;
        };
        self.mode = ViewMode::Split;
        self.focus = Focus::Body;
        self.body_scroll = 0;
        self.opened = Some(index);
    }

    pub fn close_message(&mut self) {
        self.mode = ViewMode::ListOnly;
        self.focus = Focus::List;
        self.opened = None;
        self.body_scroll = 0;
    }

    pub fn toggle_focus(&mut self) {
        if self.mode != ViewMode::Split {
            return;
        }
        self.focus = match self.focus {
            Focus::List => Focus::Body,
            Focus::Body => Focus::List,
            Focus::Prompt => Focus::Prompt,
        };
    }

    pub fn scroll_body(&mut self, delta: i32) {
        if self.mode != ViewMode::Split {
            return;
        }
        if delta < 0 {
            self.body_scroll = self.body_scroll.saturating_sub((-delta) as u16);
        } else {
            self.body_scroll = self.body_scroll.saturating_add(delta as u16);
        }
    }

    // ----- File prompt -----

    pub fn begin_prompt(&mut self) {
        let initial = match &self.status {
            LoadStatus::Loaded { path, .. } | LoadStatus::Failed { path, .. } => {
                path.display().to_string()
            }
            LoadStatus::NotLoaded => String::new(),
        };
        self.prompt.open(&initial);
        self.previous_focus = Some(self.focus);
        self.focus = Focus::Prompt;
    }

    pub fn finish_prompt(&mut self, action: FormAction) {
        self.focus = self.previous_focus.take().unwrap_or(Focus::List);
        if let FormAction::Submit(path) = action {
            self.load_path(Path::new(&path));
        }
    }
}
