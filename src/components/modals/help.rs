use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            (" j / \u{2193}", "Select next entry"),
            (" k / \u{2191}", "Select previous entry"),
            (" Ctrl-d / PgDn", "Scroll detail down"),
            (" Ctrl-u / PgUp", "Scroll detail up"),
        ],
    ),
    (
        "Entries",
        &[
            (" e", "Edit selected entry"),
            (" x / Del", "Remove selected entry"),
            (" r", "Reload the store"),
        ],
    ),
    (
        "Filtering",
        &[
            (" /", "Focus the filter"),
            (" Enter / Esc", "Leave the filter"),
            (" c", "Clear the filter"),
        ],
    ),
    (
        "General",
        &[
            (" ?", "Show this help"),
            (" Esc", "Close modal"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let rows = help_rows(
            self.theme.header_item,
            self.theme.footer_segment_key,
            self.theme.list_item,
        );

        Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block)
        .render(help_area, buf);
    }
}

fn help_rows(category: Style, key: Style, desc: Style) -> Vec<Row<'static>> {
    let mut rows = Vec::new();
    for (i, (title, bindings)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
        }
        rows.push(Row::new(vec![
            Cell::from(Span::styled(*title, category)),
            Cell::from(""),
        ]));
        for (k, d) in bindings.iter() {
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*k, key)),
                Cell::from(Span::styled(*d, desc)),
            ]));
        }
    }
    rows
}
