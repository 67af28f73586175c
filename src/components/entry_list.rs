use crate::domain::models::PassEntry;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

pub const DELETE_MARKER: &str = "✗";
pub const EMPTY_PLACEHOLDER: &str = "No pass entries found";

/// One row per entry: the name, and a delete marker in the last column.
pub struct EntryList<'a> {
    pub entries: &'a [PassEntry],
    pub theme: &'a Theme,
}

impl StatefulWidget for EntryList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.entries.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                EMPTY_PLACEHOLDER,
                self.theme.placeholder,
            )))
            .render(area, buf);
            return;
        }

        let name_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let style = if entry.selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let name = truncate(&entry.name, name_width);
                let padding = name_width.saturating_sub(name.chars().count());
                ListItem::new(Line::from(vec![
                    Span::styled(name, style),
                    Span::styled(" ".repeat(padding + 1), style),
                    Span::styled(DELETE_MARKER, self.theme.delete_marker),
                ]))
            })
            .collect();

        StatefulWidget::render(
            List::new(items).highlight_style(self.theme.list_selected),
            area,
            buf,
            state,
        );
    }
}

/// Column of the delete marker inside `area`.
pub fn delete_marker_column(area: Rect) -> u16 {
    area.x + area.width.saturating_sub(1)
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let mut out: String = name.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
