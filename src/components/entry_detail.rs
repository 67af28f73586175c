use crate::domain::models::PassEntry;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Name and decrypted content of the selected entry.
pub struct EntryDetail<'a> {
    pub entry: Option<&'a PassEntry>,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl Widget for EntryDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Nothing selected, nothing to show
        let Some(entry) = self.entry else {
            return;
        };

        let Some(content) = &entry.content else {
            Paragraph::new(Line::from(Span::styled(
                LOADING_PLACEHOLDER,
                self.theme.placeholder,
            )))
            .render(area, buf);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(entry.name.as_str(), self.theme.detail_title)),
            Line::from(""),
        ];
        lines.extend(
            content
                .lines()
                .map(|l| Line::from(Span::styled(l, self.theme.detail_text))),
        );

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entry: Option<&PassEntry>) -> Buffer {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        EntryDetail {
            entry,
            scroll: 0,
            theme: &theme,
        }
        .render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_unloaded_entry_shows_loading() {
        let entry = PassEntry::new("bank");
        let buf = render(Some(&entry));
        assert_eq!(row(&buf, 0), LOADING_PLACEHOLDER);
    }

    #[test]
    fn test_loaded_entry_shows_name_and_content() {
        let entry = PassEntry::new("bank").with_content("pin: 1234\nuser: me");
        let buf = render(Some(&entry));
        assert_eq!(row(&buf, 0), "bank");
        assert_eq!(row(&buf, 2), "pin: 1234");
        assert_eq!(row(&buf, 3), "user: me");
    }

    #[test]
    fn test_no_selection_renders_nothing() {
        let buf = render(None);
        assert_eq!(row(&buf, 0), "");
    }
}
