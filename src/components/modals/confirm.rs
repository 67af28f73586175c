use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

/// Asks before an entry is deleted from the store.
pub struct ConfirmRemoveModal<'a> {
    pub theme: &'a Theme,
    pub name: &'a str,
}

impl Widget for ConfirmRemoveModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(60, 6, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" REMOVE ENTRY ", self.theme.status_error),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.theme.status_error);

        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("Remove "),
                Span::styled(self.name, self.theme.footer_segment_val),
                Span::raw(" from the store?"),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", self.theme.footer_segment_key),
                Span::raw(" remove   "),
                Span::styled("n / Esc", self.theme.footer_segment_key),
                Span::raw(" keep"),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block)
            .render(modal_area, buf);
    }
}
