use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};

use super::entries::select_entry;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext => UpdateResult::Handled(move_selection(state, 1)),
        Action::SelectPrev => UpdateResult::Handled(move_selection(state, -1)),
        Action::SelectIndex(idx) => {
            let name = state.entries.get(*idx).map(|e| e.name.clone());
            UpdateResult::Handled(name.and_then(|n| select_entry(state, Some(&n))))
        }
        Action::ScrollDetailUp(n) => {
            state.detail_scroll = state.detail_scroll.saturating_sub(*n);
            UpdateResult::Handled(None)
        }
        Action::ScrollDetailDown(n) => {
            let max_scroll = state
                .selected()
                .and_then(|e| e.content.as_ref())
                .map(|c| c.lines().count().saturating_sub(1) as u16)
                .unwrap_or(0);
            state.detail_scroll = state.detail_scroll.saturating_add(*n).min(max_scroll);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

// Wraps around at both ends, like the list it drives.
fn move_selection(state: &mut AppState, delta: isize) -> Option<Command> {
    let len = state.entries.len();
    if len == 0 {
        return None;
    }
    let next = match state.selected_index() {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None if delta < 0 => len - 1,
        None => 0,
    };
    let name = state.entries[next].name.clone();
    select_entry(state, Some(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer::update as reduce;
    use crate::domain::models::PassEntry;

    fn state_with(names: &[&str]) -> AppState<'static> {
        let mut state = AppState::default();
        state.entries = names.iter().map(|n| PassEntry::new(*n)).collect();
        state
    }

    #[test]
    fn test_select_next_wraps() {
        let mut state = state_with(&["a", "b"]);
        assert_eq!(
            reduce(&mut state, Action::SelectNext),
            Some(Command::LoadEntry("a".into()))
        );
        reduce(&mut state, Action::SelectNext);
        assert_eq!(state.selected_entry.as_deref(), Some("b"));
        reduce(&mut state, Action::SelectNext);
        assert_eq!(state.selected_entry.as_deref(), Some("a"));
    }

    #[test]
    fn test_select_prev_from_nothing_picks_last() {
        let mut state = state_with(&["a", "b", "c"]);
        reduce(&mut state, Action::SelectPrev);
        assert_eq!(state.selected_entry.as_deref(), Some("c"));
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut state = state_with(&[]);
        assert_eq!(reduce(&mut state, Action::SelectNext), None);
        assert_eq!(reduce(&mut state, Action::SelectIndex(3)), None);
        assert_eq!(state.selected_entry, None);
    }

    #[test]
    fn test_scroll_detail_clamped_to_content() {
        let mut state = state_with(&["a"]);
        state.entries[0].content = Some("1\n2\n3\n4".into());
        reduce(&mut state, Action::SelectIndex(0));

        reduce(&mut state, Action::ScrollDetailDown(10));
        assert_eq!(state.detail_scroll, 3);
        reduce(&mut state, Action::ScrollDetailUp(2));
        assert_eq!(state.detail_scroll, 1);
        reduce(&mut state, Action::ScrollDetailUp(5));
        assert_eq!(state.detail_scroll, 0);
    }
}
