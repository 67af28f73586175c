use crate::domain::models::ExecutableInfo;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub executable: &'a ExecutableInfo,
    pub store_dir: &'a str,
    pub entry_count: usize,
    pub filter: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let backend = if self.executable.is_known() {
            let version = if self.executable.version.is_empty() {
                "?".to_string()
            } else {
                format!("v{}", self.executable.version)
            };
            format!(" pass {} · {} ", version, self.executable.path)
        } else {
            " pass: unknown ".to_string()
        };

        let count = match self.filter {
            Some(f) => format!(" {} entries matching '{}' ", self.entry_count, f),
            None => format!(" {} entries ", self.entry_count),
        };

        let spans = vec![
            Span::styled(" PASSVIEW ", self.theme.header_logo),
            Span::styled(format!(" {} ", self.store_dir), self.theme.header),
            Span::styled("│", self.theme.header),
            Span::styled(count, self.theme.header),
            Span::styled("│", self.theme.header),
            Span::styled(backend, self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
