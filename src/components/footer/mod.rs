mod groups;

use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: String,
    pub desc: &'static str,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let mut spans = vec![Span::styled(
            format!("  {}  ", groups::mode_label(state.mode)),
            theme.header_active,
        )];
        spans.push(Span::raw(" "));

        if let Some(filter) = &state.filter {
            spans.push(Span::styled(
                format!(" FILTER: {filter} "),
                theme.footer_segment_val,
            ));
            spans.push(Span::raw("  "));
        }

        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            let Some(first) = group.items.first() else {
                continue;
            };
            if current_width + first.key.len() + first.desc.len() + 4 > available_width {
                break;
            }

            if area.width > 100 {
                spans.push(Span::styled(format!("{}: ", group.name), theme.header_item));
                current_width += group.name.len() + 2;
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);
                let item_width = key_str.len() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }
                spans.push(Span::styled(key_str, theme.footer_segment_key));
                spans.push(Span::styled(desc_str, theme.footer_segment_val));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::KeyConfig;
    use crate::app::state::AppMode;

    fn render(state: &AppState, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        Footer {
            state,
            theme: &theme,
        }
        .render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_normal_mode_hints() {
        let state = AppState::new(&KeyConfig::default());
        let line = render(&state, 120);
        assert!(line.contains("NORMAL"));
        assert!(line.contains(" q "));
    }

    #[test]
    fn test_active_filter_is_shown() {
        let mut state = AppState::new(&KeyConfig::default());
        state.filter = Some("bank".to_string());
        state.mode = AppMode::FilterInput;
        let line = render(&state, 120);
        assert!(line.contains("FILTER: bank"));
        assert!(line.contains("Esc"));
    }

    #[test]
    fn test_hints_follow_key_profile() {
        let mut state = AppState::new(&KeyConfig {
            profile: "plain".to_string(),
            custom: None,
        });
        state.selected_entry = Some("bank".to_string());
        let line = render(&state, 160);
        assert!(line.contains(" Del "));
        assert!(!line.contains(" x "));
        assert!(!line.contains("j/k"));

        let mut state = AppState::new(&KeyConfig::default());
        state.selected_entry = Some("bank".to_string());
        let line = render(&state, 160);
        assert!(line.contains(" x "));
        assert!(line.contains("j/k"));
    }

    #[test]
    fn test_narrow_footer_drops_groups() {
        let state = AppState::new(&KeyConfig::default());
        let line = render(&state, 14);
        assert!(!line.contains("quit"));
    }
}
