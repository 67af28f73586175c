use super::{FooterGroup, FooterItem};
use crate::app::action::Action;
use crate::app::state::{AppMode, AppState};

pub fn mode_label(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Normal => "NORMAL",
        AppMode::FilterInput => "FILTER",
        AppMode::ConfirmRemove => "CONFIRM",
        AppMode::Edit => "EDIT",
        AppMode::Help => "HELP",
    }
}

fn item(key: impl Into<String>, desc: &'static str) -> FooterItem {
    FooterItem {
        key: key.into(),
        desc,
    }
}

// Normal-mode hints name whatever key the active keymap binds
fn bound(state: &AppState, action: Action, desc: &'static str) -> Option<FooterItem> {
    state.keymap.hint(&action).map(|key| item(key, desc))
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Normal => {
            let movement = match (
                state.keymap.hint(&Action::SelectNext),
                state.keymap.hint(&Action::SelectPrev),
            ) {
                (Some(next), Some(prev)) => Some(item(format!("{next}/{prev}"), "move")),
                _ => None,
            };
            let mut nav = vec![movement, bound(state, Action::EnterFilterMode, "filter")];
            if state.filter.is_some() {
                nav.push(bound(state, Action::ClearFilter, "clear"));
            }

            let mut groups = vec![FooterGroup {
                name: "NAV",
                items: nav.into_iter().flatten().collect(),
            }];
            if state.selected_entry.is_some() {
                groups.push(FooterGroup {
                    name: "ENTRY",
                    items: [
                        bound(state, Action::EditEntryIntent, "edit"),
                        bound(state, Action::RemoveEntryIntent(None), "remove"),
                    ]
                    .into_iter()
                    .flatten()
                    .collect(),
                });
            }
            groups.push(FooterGroup {
                name: "APP",
                items: [
                    bound(state, Action::Refresh, "reload"),
                    bound(state, Action::ToggleHelp, "help"),
                    bound(state, Action::Quit, "quit"),
                ]
                .into_iter()
                .flatten()
                .collect(),
            });
            groups
        }
        AppMode::FilterInput => vec![FooterGroup {
            name: "FILTER",
            items: vec![item("Enter/Esc", "done"), item("\u{2191}/\u{2193}", "move")],
        }],
        AppMode::ConfirmRemove => vec![FooterGroup {
            name: "REMOVE",
            items: vec![item("y", "confirm"), item("n/Esc", "cancel")],
        }],
        AppMode::Edit => vec![FooterGroup {
            name: "EDIT",
            items: vec![item("Ctrl-s", "save"), item("Esc", "cancel")],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![item("Esc/?", "close")],
        }],
    }
}
