use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, AppTextArea},
};

use super::entries::set_filter;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EnterFilterMode => {
            state.mode = AppMode::FilterInput;
            UpdateResult::Handled(None)
        }
        Action::ClearFilter => {
            state.filter_input = AppTextArea::default();
            if state.mode == AppMode::FilterInput {
                state.mode = AppMode::Normal;
            }
            UpdateResult::Handled(Some(set_filter(state, None)))
        }
        Action::TextAreaInput(key) if state.mode == AppMode::FilterInput => {
            let before = state.filter_input.single_line();
            state.filter_input.input(*key);
            let after = state.filter_input.single_line();
            if before == after {
                UpdateResult::Handled(None)
            } else {
                UpdateResult::Handled(Some(Command::QueueFilter(after)))
            }
        }
        _ => UpdateResult::NotHandled,
    }
}
