use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Extra bindings, key string to action name: `"ctrl-d" = "remove"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub filter_mode: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut filter_mode = HashMap::new();

        // --- Global / Normal Mode ---
        global.insert(ch('q'), Action::Quit);
        global.insert(key(KeyCode::Down), Action::SelectNext);
        global.insert(key(KeyCode::Up), Action::SelectPrev);
        global.insert(ch('/'), Action::EnterFilterMode);
        global.insert(ch('c'), Action::ClearFilter);
        global.insert(ch('r'), Action::Refresh);
        global.insert(key(KeyCode::Delete), Action::RemoveEntryIntent(None));
        global.insert(ch('e'), Action::EditEntryIntent);
        global.insert(ch('?'), Action::ToggleHelp);
        global.insert(key(KeyCode::PageDown), Action::ScrollDetailDown(10));
        global.insert(key(KeyCode::PageUp), Action::ScrollDetailUp(10));
        global.insert(key(KeyCode::Esc), Action::CancelMode);
        global.insert(ctrl('c'), Action::Quit);

        if config.profile == "vim" {
            global.insert(ch('j'), Action::SelectNext);
            global.insert(ch('k'), Action::SelectPrev);
            global.insert(ch('x'), Action::RemoveEntryIntent(None));
            global.insert(ctrl('d'), Action::ScrollDetailDown(10));
            global.insert(ctrl('u'), Action::ScrollDetailUp(10));
        }

        // --- Filter Mode Overrides ---
        filter_mode.insert(key(KeyCode::Esc), Action::CancelMode);
        filter_mode.insert(key(KeyCode::Enter), Action::CancelMode);
        filter_mode.insert(key(KeyCode::Down), Action::SelectNext);
        filter_mode.insert(key(KeyCode::Up), Action::SelectPrev);
        filter_mode.insert(ctrl('c'), Action::Quit);

        if let Some(custom) = &config.custom {
            for (key_str, action_name) in custom {
                match (parse_key(key_str), parse_action(action_name)) {
                    (Some(event), Some(action)) => {
                        global.insert(event, action);
                    }
                    _ => tracing::warn!(key = %key_str, action = %action_name, "ignoring invalid key binding"),
                }
            }
        }

        Self {
            global,
            filter_mode,
        }
    }

    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        let event = KeyEvent::new(event.code, normalize(event.code, event.modifiers));
        if mode == AppMode::FilterInput {
            return self.filter_mode.get(&event).cloned();
        }
        self.global.get(&event).cloned()
    }

    /// Label of the normal-mode key bound to `action`, shortest first.
    pub fn hint(&self, action: &Action) -> Option<String> {
        self.global
            .iter()
            .filter(|(_, bound)| *bound == action)
            .map(|(event, _)| key_label(event))
            .min_by(|a, b| (a.chars().count(), a).cmp(&(b.chars().count(), b)))
    }
}

fn key_label(event: &KeyEvent) -> String {
    let code = match event.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "\u{2191}".to_string(),
        KeyCode::Down => "\u{2193}".to_string(),
        KeyCode::Left => "\u{2190}".to_string(),
        KeyCode::Right => "\u{2192}".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        other => format!("{other:?}"),
    };
    let mut label = String::new();
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        label.push_str("ctrl-");
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        label.push_str("alt-");
    }
    label.push_str(&code);
    label
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

// Terminals report `?` or `J` with SHIFT set; the character already carries it.
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    }
}

/// Parse `"j"`, `"ctrl-d"`, `"alt-x"`, `"pagedown"` and friends.
pub fn parse_key(s: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = s.trim();
    loop {
        let lower = rest.to_ascii_lowercase();
        if let Some(r) = lower.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            rest = &rest[rest.len() - r.len()..];
        } else if let Some(r) = lower.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            rest = &rest[rest.len() - r.len()..];
        } else {
            break;
        }
    }

    let code = match rest.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyEvent::new(code, modifiers))
}

pub fn parse_action(name: &str) -> Option<Action> {
    let action = match name {
        "quit" => Action::Quit,
        "select_next" => Action::SelectNext,
        "select_prev" => Action::SelectPrev,
        "filter" => Action::EnterFilterMode,
        "clear_filter" => Action::ClearFilter,
        "refresh" => Action::Refresh,
        "remove" => Action::RemoveEntryIntent(None),
        "edit" => Action::EditEntryIntent,
        "help" => Action::ToggleHelp,
        "scroll_down" => Action::ScrollDetailDown(10),
        "scroll_up" => Action::ScrollDetailUp(10),
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("j"), Some(ch('j')));
        assert_eq!(parse_key("ctrl-d"), Some(ctrl('d')));
        assert_eq!(parse_key("PageDown"), Some(key(KeyCode::PageDown)));
        assert_eq!(
            parse_key("ctrl-alt-x"),
            Some(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            ))
        );
        assert_eq!(parse_key("nonsense"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_custom_bindings_override_defaults() {
        let mut custom = HashMap::new();
        custom.insert("d".to_string(), "remove".to_string());
        custom.insert("z".to_string(), "not-an-action".to_string());
        let map = KeyMap::from_config(&KeyConfig {
            profile: "vim".to_string(),
            custom: Some(custom),
        });

        assert_eq!(
            map.get_action(ch('d'), AppMode::Normal),
            Some(Action::RemoveEntryIntent(None))
        );
        assert_eq!(map.get_action(ch('z'), AppMode::Normal), None);
    }

    #[test]
    fn test_filter_mode_only_sees_filter_bindings() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(ch('q'), AppMode::FilterInput), None);
        assert_eq!(
            map.get_action(key(KeyCode::Enter), AppMode::FilterInput),
            Some(Action::CancelMode)
        );
    }

    #[test]
    fn test_shifted_chars_match_plain_bindings() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            map.get_action(shifted, AppMode::Normal),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_hint_follows_profile_and_custom_bindings() {
        let vim = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(vim.hint(&Action::SelectNext).as_deref(), Some("j"));
        assert_eq!(vim.hint(&Action::RemoveEntryIntent(None)).as_deref(), Some("x"));
        assert_eq!(vim.hint(&Action::Quit).as_deref(), Some("q"));

        let plain = KeyMap::from_config(&KeyConfig {
            profile: "plain".to_string(),
            custom: None,
        });
        assert_eq!(plain.hint(&Action::SelectNext).as_deref(), Some("\u{2193}"));
        assert_eq!(plain.hint(&Action::RemoveEntryIntent(None)).as_deref(), Some("Del"));

        let mut custom = HashMap::new();
        custom.insert("ctrl-r".to_string(), "refresh".to_string());
        let map = KeyMap::from_config(&KeyConfig {
            profile: "plain".to_string(),
            custom: Some(custom),
        });
        assert_eq!(map.hint(&Action::Refresh).as_deref(), Some("r"));
        assert_eq!(map.hint(&Action::SelectIndex(0)), None);
    }

    #[test]
    fn test_plain_profile_has_no_vim_keys() {
        let map = KeyMap::from_config(&KeyConfig {
            profile: "plain".to_string(),
            custom: None,
        });
        assert_eq!(map.get_action(ch('j'), AppMode::Normal), None);
        assert_eq!(
            map.get_action(key(KeyCode::Down), AppMode::Normal),
            Some(Action::SelectNext)
        );
    }
}
