use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, AppTextArea, EditState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SetEntries { seq, entries } => {
            if *seq != state.list_seq {
                tracing::debug!(seq, latest = state.list_seq, "dropping stale entry list");
                return UpdateResult::Handled(None);
            }
            state.entries = entries.clone();
            UpdateResult::Handled(reconcile_selection(state))
        }
        Action::SelectEntry(name) => UpdateResult::Handled(select_entry(state, name.as_deref())),
        Action::SetFilter(value) => UpdateResult::Handled(Some(set_filter(state, value.clone()))),
        Action::SetEntryContent { name, content } => {
            if let Some(entry) = state.entries.iter_mut().find(|e| &e.name == name) {
                entry.content = Some(content.clone());
            }
            UpdateResult::Handled(None)
        }
        Action::Refresh | Action::ExternalChangeDetected => {
            let seq = state.next_list_seq();
            UpdateResult::Handled(Some(Command::ListEntries {
                seq,
                filter: state.filter.clone(),
            }))
        }
        Action::RemoveEntryIntent(name) => {
            let target = name.clone().or_else(|| state.selected_entry.clone());
            if let Some(target) = target {
                state.pending_removal = Some(target);
                state.mode = AppMode::ConfirmRemove;
            }
            UpdateResult::Handled(None)
        }
        Action::RemoveEntry(name) => {
            state.pending_removal = None;
            state.mode = AppMode::Normal;
            UpdateResult::Handled(Some(Command::RemoveEntry(name.clone())))
        }
        Action::EntryRemoved(name) => {
            state.entries.retain(|e| &e.name != name);
            if state.selected_entry.as_ref() == Some(name) {
                state.selected_entry = None;
                state.detail_scroll = 0;
            }
            sync_list_state(state);
            UpdateResult::Handled(None)
        }
        Action::EditEntryIntent => {
            if let Some(entry) = state.selected() {
                if let Some(content) = &entry.content {
                    state.editor = Some(EditState {
                        name: entry.name.clone(),
                        text_area: AppTextArea::with_text(content),
                    });
                    state.mode = AppMode::Edit;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::SaveEdit => {
            let command = state.editor.take().map(|editor| {
                // The text area holds the content minus its final newline
                let mut content = editor.text_area.text();
                content.push('\n');
                Command::EditEntry(editor.name, content)
            });
            state.mode = AppMode::Normal;
            UpdateResult::Handled(command)
        }
        Action::EntryEdited { name, content } => {
            if let Some(entry) = state.entries.iter_mut().find(|e| &e.name == name) {
                entry.content = Some(content.clone());
            }
            UpdateResult::Handled(None)
        }
        Action::ExecutableInfoLoaded(info) => {
            state.executable = info.clone();
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Mark exactly one entry (or none) as selected and ask for its content if it
/// has not been loaded yet. Unknown names leave the state untouched.
pub fn select_entry(state: &mut AppState, name: Option<&str>) -> Option<Command> {
    if let Some(name) = name {
        if !state.entries.iter().any(|e| e.name == name) {
            return None;
        }
    }

    for entry in state.entries.iter_mut() {
        entry.selected = Some(entry.name.as_str()) == name;
    }
    let changed = state.selected_entry.as_deref() != name;
    state.selected_entry = name.map(str::to_string);
    if changed {
        state.detail_scroll = 0;
    }
    sync_list_state(state);

    let entry = state.selected()?;
    if entry.is_loaded() {
        None
    } else {
        Some(Command::LoadEntry(entry.name.clone()))
    }
}

pub fn set_filter(state: &mut AppState, value: Option<String>) -> Command {
    state.filter = value.filter(|v| !v.is_empty());
    let seq = state.next_list_seq();
    Command::ListEntries {
        seq,
        filter: state.filter.clone(),
    }
}

// A refresh drops loaded content; a selection that survived it needs its
// content fetched again, one that did not is cleared.
fn reconcile_selection(state: &mut AppState) -> Option<Command> {
    let survivor = state
        .selected_entry
        .clone()
        .filter(|name| state.entries.iter().any(|e| &e.name == name));
    let scroll = if survivor.is_some() {
        state.detail_scroll
    } else {
        0
    };
    state.selected_entry = None;
    let command = select_entry(state, survivor.as_deref());
    state.detail_scroll = scroll;
    command
}

fn sync_list_state(state: &mut AppState) {
    let idx = state.selected_index();
    state.list_state.select(idx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer::update as reduce;
    use crate::domain::models::PassEntry;

    fn entries(names: &[&str]) -> Vec<PassEntry> {
        names.iter().map(|n| PassEntry::new(*n)).collect()
    }

    fn loaded_state(names: &[&str]) -> AppState<'static> {
        let mut state = AppState::default();
        let seq = state.next_list_seq();
        reduce(
            &mut state,
            Action::SetEntries {
                seq,
                entries: entries(names),
            },
        );
        state
    }

    #[test]
    fn test_select_marks_exactly_one() {
        let mut state = loaded_state(&["a", "b", "c"]);

        let cmd = reduce(&mut state, Action::SelectEntry(Some("b".into())));
        assert_eq!(cmd, Some(Command::LoadEntry("b".into())));
        let flags: Vec<bool> = state.entries.iter().map(|e| e.selected).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(state.selected_entry.as_deref(), Some("b"));
        assert_eq!(state.list_state.selected(), Some(1));

        reduce(&mut state, Action::SelectEntry(Some("c".into())));
        let flags: Vec<bool> = state.entries.iter().map(|e| e.selected).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_select_loaded_entry_does_not_refetch() {
        let mut state = loaded_state(&["a"]);
        reduce(
            &mut state,
            Action::SetEntryContent {
                name: "a".into(),
                content: "secret".into(),
            },
        );
        assert_eq!(reduce(&mut state, Action::SelectEntry(Some("a".into()))), None);
    }

    #[test]
    fn test_select_none_clears_flags() {
        let mut state = loaded_state(&["a", "b"]);
        reduce(&mut state, Action::SelectEntry(Some("a".into())));
        reduce(&mut state, Action::SelectEntry(None));
        assert!(state.entries.iter().all(|e| !e.selected));
        assert_eq!(state.selected_entry, None);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_set_entry_content_unknown_name_is_noop() {
        let mut state = loaded_state(&["a", "b"]);
        reduce(&mut state, Action::SelectEntry(Some("a".into())));
        let before = state.entries.clone();

        reduce(
            &mut state,
            Action::SetEntryContent {
                name: "zzz".into(),
                content: "x".into(),
            },
        );
        assert_eq!(state.entries, before);
        assert_eq!(state.selected_entry.as_deref(), Some("a"));
    }

    #[test]
    fn test_set_entries_discards_loaded_content() {
        let mut state = loaded_state(&["a", "b"]);
        reduce(
            &mut state,
            Action::SetEntryContent {
                name: "b".into(),
                content: "old".into(),
            },
        );
        assert!(state.entries[1].is_loaded());

        let seq = state.next_list_seq();
        reduce(
            &mut state,
            Action::SetEntries {
                seq,
                entries: entries(&["a", "b"]),
            },
        );
        assert!(state.entries.iter().all(|e| e.content.is_none()));
    }

    #[test]
    fn test_stale_list_response_is_dropped() {
        let mut state = AppState::default();
        let first = match reduce(&mut state, Action::SetFilter(Some("f".into()))) {
            Some(Command::ListEntries { seq, .. }) => seq,
            other => panic!("expected ListEntries, got {other:?}"),
        };
        let second = match reduce(&mut state, Action::SetFilter(Some("fo".into()))) {
            Some(Command::ListEntries { seq, filter }) => {
                assert_eq!(filter.as_deref(), Some("fo"));
                seq
            }
            other => panic!("expected ListEntries, got {other:?}"),
        };

        // the newer response lands first, the older one afterwards
        reduce(
            &mut state,
            Action::SetEntries {
                seq: second,
                entries: entries(&["foo"]),
            },
        );
        reduce(
            &mut state,
            Action::SetEntries {
                seq: first,
                entries: entries(&["foo", "fab"]),
            },
        );
        assert_eq!(state.entries, entries(&["foo"]));
    }

    #[test]
    fn test_refresh_keeps_surviving_selection_and_refetches() {
        let mut state = loaded_state(&["a", "b"]);
        reduce(&mut state, Action::SelectEntry(Some("b".into())));

        let seq = state.next_list_seq();
        let cmd = reduce(
            &mut state,
            Action::SetEntries {
                seq,
                entries: entries(&["b", "c"]),
            },
        );
        assert_eq!(cmd, Some(Command::LoadEntry("b".into())));
        assert_eq!(state.selected_entry.as_deref(), Some("b"));
        assert!(state.entries[0].selected);
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_refresh_clears_dangling_selection() {
        let mut state = loaded_state(&["a", "b"]);
        reduce(&mut state, Action::SelectEntry(Some("a".into())));

        let seq = state.next_list_seq();
        let cmd = reduce(
            &mut state,
            Action::SetEntries {
                seq,
                entries: entries(&["b"]),
            },
        );
        assert_eq!(cmd, None);
        assert_eq!(state.selected_entry, None);
        assert!(state.entries.iter().all(|e| !e.selected));
    }

    #[test]
    fn test_set_filter_empty_clears() {
        let mut state = AppState::default();
        reduce(&mut state, Action::SetFilter(Some("x".into())));
        assert_eq!(state.filter.as_deref(), Some("x"));
        let cmd = reduce(&mut state, Action::SetFilter(Some(String::new())));
        assert_eq!(state.filter, None);
        assert!(matches!(cmd, Some(Command::ListEntries { filter: None, .. })));
    }

    #[test]
    fn test_remove_flow_clears_selection() {
        let mut state = loaded_state(&["a", "b"]);
        reduce(&mut state, Action::SelectEntry(Some("a".into())));

        reduce(&mut state, Action::RemoveEntryIntent(None));
        assert_eq!(state.mode, AppMode::ConfirmRemove);
        assert_eq!(state.pending_removal.as_deref(), Some("a"));

        let cmd = reduce(&mut state, Action::RemoveEntry("a".into()));
        assert_eq!(cmd, Some(Command::RemoveEntry("a".into())));
        assert_eq!(state.mode, AppMode::Normal);
        // nothing changes until the backend confirms
        assert_eq!(state.entries.len(), 2);

        reduce(&mut state, Action::EntryRemoved("a".into()));
        assert_eq!(state.entries, entries(&["b"]));
        assert_eq!(state.selected_entry, None);
    }

    #[test]
    fn test_removing_other_entry_keeps_selection() {
        let mut state = loaded_state(&["a", "b", "c"]);
        reduce(&mut state, Action::SelectEntry(Some("c".into())));
        reduce(&mut state, Action::EntryRemoved("a".into()));
        assert_eq!(state.selected_entry.as_deref(), Some("c"));
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_edit_requires_loaded_content() {
        let mut state = loaded_state(&["a"]);
        reduce(&mut state, Action::SelectEntry(Some("a".into())));
        reduce(&mut state, Action::EditEntryIntent);
        assert_eq!(state.mode, AppMode::Normal);

        reduce(
            &mut state,
            Action::SetEntryContent {
                name: "a".into(),
                content: "pw\n".into(),
            },
        );
        reduce(&mut state, Action::EditEntryIntent);
        assert_eq!(state.mode, AppMode::Edit);

        let cmd = reduce(&mut state, Action::SaveEdit);
        assert_eq!(cmd, Some(Command::EditEntry("a".into(), "pw\n".into())));
        assert!(state.editor.is_none());

        reduce(
            &mut state,
            Action::EntryEdited {
                name: "a".into(),
                content: "new\n".into(),
            },
        );
        assert_eq!(state.selected().unwrap().content.as_deref(), Some("new\n"));
    }

    #[test]
    fn test_unchanged_save_writes_content_back_verbatim() {
        for content in ["pw\n\n", "pw\r\nuser: me\r\n", "pw\n"] {
            let mut state = loaded_state(&["a"]);
            reduce(&mut state, Action::SelectEntry(Some("a".into())));
            reduce(
                &mut state,
                Action::SetEntryContent {
                    name: "a".into(),
                    content: content.into(),
                },
            );
            reduce(&mut state, Action::EditEntryIntent);

            let cmd = reduce(&mut state, Action::SaveEdit);
            assert_eq!(cmd, Some(Command::EditEntry("a".into(), content.into())));
        }
    }

    #[test]
    fn test_refresh_and_store_change_relist_with_current_filter() {
        for trigger in [Action::Refresh, Action::ExternalChangeDetected] {
            let mut state = loaded_state(&["bank", "mail"]);
            reduce(&mut state, Action::SetFilter(Some("ba".into())));
            let previous = state.list_seq;

            let cmd = reduce(&mut state, trigger);
            assert_eq!(state.list_seq, previous + 1);
            assert_eq!(
                cmd,
                Some(Command::ListEntries {
                    seq: previous + 1,
                    filter: Some("ba".into()),
                })
            );

            // A response to the superseded request is ignored
            reduce(
                &mut state,
                Action::SetEntries {
                    seq: previous,
                    entries: entries(&["stale"]),
                },
            );
            assert_eq!(
                state.entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
                vec!["bank", "mail"]
            );
        }
    }
}
