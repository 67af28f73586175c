use crate::app::command::Command;
use crate::domain::models::{ExecutableInfo, PassEntry};
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation (Entry List) ---
    SelectNext,
    SelectPrev,
    SelectIndex(usize),
    ScrollDetailUp(u16),
    ScrollDetailDown(u16),

    // --- State Machine ---
    // The four transitions of the entry reducer
    SetEntries { seq: u64, entries: Vec<PassEntry> },
    SelectEntry(Option<String>),
    SetFilter(Option<String>),
    SetEntryContent { name: String, content: String },

    // --- Store Intents ---
    // These trigger async tasks
    Refresh,                           // re-run the list query with the current filter
    RemoveEntryIntent(Option<String>), // ask for confirmation (None = selected entry)
    RemoveEntry(String),               // `pass rm --force <name>`
    EditEntryIntent,                   // open the editor on the selected entry
    SaveEdit,                          // `pass insert --multiline --force <name>`

    // --- UI Mode Transitions ---
    EnterFilterMode, // Focus the filter bar (/)
    ClearFilter,     // Drop the filter and re-list
    CancelMode,      // ESC key (close modal/mode)
    ToggleHelp,      // Toggle the help overlay (?)
    TextAreaInput(KeyEvent),

    // --- Async Results (The "Callback") ---
    EntryRemoved(String),
    EntryEdited { name: String, content: String },
    ExecutableInfoLoaded(ExecutableInfo),
    ExternalChangeDetected, // The store directory changed on disk
}
