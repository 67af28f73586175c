use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.editor = None;
            state.pending_removal = None;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) if state.mode == AppMode::Edit => {
            if let Some(editor) = &mut state.editor {
                editor.text_area.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        // Layout is recomputed from the frame on every draw; these only wake the loop
        Action::Resize(..) | Action::Tick => UpdateResult::Handled(None),
        _ => UpdateResult::NotHandled,
    }
}
