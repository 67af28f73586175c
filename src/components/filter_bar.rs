use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct FilterBar<'a> {
    pub text_area: &'a AppTextArea<'a>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("FILTER", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if !self.focused && self.text_area.single_line().is_empty() {
            Paragraph::new(Line::from(vec![
                Span::styled("/", self.theme.footer_segment_key),
                Span::styled(" to filter", self.theme.placeholder),
            ]))
            .render(inner, buf);
            return;
        }

        // The cursor only shows while the bar has focus
        let mut text_area = self.text_area.clone();
        text_area.set_cursor_line_style(Style::default());
        if !self.focused {
            text_area.set_cursor_style(Style::default());
        }
        Widget::render(&text_area, inner, buf);
    }
}
