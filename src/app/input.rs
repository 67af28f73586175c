use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::entry_list::delete_marker_column;
use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

const WHEEL_SCROLL: u16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    match app_state.mode {
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::ConfirmRemove => match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('y' | 'Y') => app_state
                    .pending_removal
                    .clone()
                    .map(Action::RemoveEntry),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CancelMode),
                _ => None,
            },
            _ => None,
        },
        AppMode::Edit => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::SaveEdit)
                }
                _ => Some(Action::TextAreaInput(key)),
            },
            _ => None,
        },
        AppMode::FilterInput => match event {
            Event::Key(key) => app_state
                .keymap
                .get_action(key, app_state.mode)
                .or(Some(Action::TextAreaInput(key))),
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => app_state.keymap.get_action(key, app_state.mode),
            Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
            _ => None,
        },
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let layout = ui::get_layout(Rect::new(0, 0, terminal_size.width, terminal_size.height));
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let inner = layout.list_inner();
            if inner.contains(pos) {
                let idx = app_state.list_state.offset() + (mouse.row - inner.y) as usize;
                let entry = app_state.entries.get(idx)?;
                if mouse.column == delete_marker_column(inner) {
                    return Some(Action::RemoveEntryIntent(Some(entry.name.clone())));
                }
                return Some(Action::SelectIndex(idx));
            }
            if layout.filter.contains(pos) {
                return Some(Action::EnterFilterMode);
            }
            None
        }
        MouseEventKind::ScrollDown => {
            if layout.detail.contains(pos) {
                Some(Action::ScrollDetailDown(WHEEL_SCROLL))
            } else if layout.list.contains(pos) {
                Some(Action::SelectNext)
            } else {
                None
            }
        }
        MouseEventKind::ScrollUp => {
            if layout.detail.contains(pos) {
                Some(Action::ScrollDetailUp(WHEEL_SCROLL))
            } else if layout.list.contains(pos) {
                Some(Action::SelectPrev)
            } else {
                None
            }
        }
        _ => None,
    }
}
