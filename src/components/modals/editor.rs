use crate::app::state::EditState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Multi-line editor over the decrypted content of one entry.
pub struct EditorModal<'a> {
    pub theme: &'a Theme,
    pub edit: &'a EditState<'a>,
}

impl Widget for EditorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(70, 60, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" EDIT {} ", self.edit.name), self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let text_area = Rect {
            x: chunks[0].x + 1,
            y: chunks[0].y,
            width: chunks[0].width.saturating_sub(2),
            height: chunks[0].height,
        };
        if text_area.width > 0 && text_area.height > 0 {
            Widget::render(&self.edit.text_area, text_area, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled(" Ctrl-s", self.theme.footer_segment_key),
            Span::styled(" save  ", self.theme.footer_segment_val),
            Span::styled("Esc", self.theme.footer_segment_key),
            Span::styled(" cancel", self.theme.footer_segment_val),
        ]))
        .render(chunks[1], buf);
    }
}
