use super::keymap::{KeyConfig, KeyMap};
use crate::domain::models::{ExecutableInfo, PassEntry};
use crate::theme::Theme;
use ratatui::widgets::ListState;
use std::sync::Arc;

pub mod input;

pub use input::{AppTextArea, EditState};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,        // Navigating the entry list
    FilterInput,   // Typing into the filter bar
    ConfirmRemove, // Waiting for y/n before deleting an entry
    Edit,          // Rewriting the selected entry's content
    Help,          // Showing the help overlay
}

#[derive(Debug)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,

    // --- Store Data (The "Source of Truth") ---
    pub entries: Vec<PassEntry>,
    pub filter: Option<String>,
    pub selected_entry: Option<String>,
    // Sequence number of the newest list request; older responses are dropped
    pub list_seq: u64,

    // --- UI State ---
    pub list_state: ListState,
    pub detail_scroll: u16,
    pub filter_input: AppTextArea<'a>,
    pub editor: Option<EditState<'a>>,
    pub pending_removal: Option<String>,

    // --- Host Info ---
    pub executable: ExecutableInfo,
    pub store_dir: String,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState<'_> {
    pub fn new(config: &KeyConfig) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(config)),
            ..Default::default()
        }
    }

    pub fn selected(&self) -> Option<&PassEntry> {
        let name = self.selected_entry.as_ref()?;
        self.entries.iter().find(|e| &e.name == name)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let name = self.selected_entry.as_ref()?;
        self.entries.iter().position(|e| &e.name == name)
    }

    /// Bump and return the sequence number for a new list request.
    pub fn next_list_seq(&mut self) -> u64 {
        self.list_seq = self.list_seq.wrapping_add(1);
        self.list_seq
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            entries: Vec::new(),
            filter: None,
            selected_entry: None,
            list_seq: 0,
            list_state: ListState::default(),
            detail_scroll: 0,
            filter_input: AppTextArea::default(),
            editor: None,
            pending_removal: None,
            executable: ExecutableInfo::default(),
            store_dir: String::new(),
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme: Theme::default(),
        }
    }
}
