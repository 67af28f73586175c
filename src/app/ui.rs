use crate::app::state::{AppMode, AppState};
use crate::components::entry_detail::EntryDetail;
use crate::components::entry_list::EntryList;
use crate::components::filter_bar::FilterBar;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::ModalManager;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub filter: Rect,
    pub list: Rect,
    pub detail: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Area inside the list border, where rows are drawn.
    pub fn list_inner(&self) -> Rect {
        bordered_inner(self.list)
    }

    pub fn detail_inner(&self) -> Rect {
        bordered_inner(self.detail)
    }
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter
            Constraint::Min(0),    // Entries
        ])
        .split(body[0]);

    AppLayout {
        header: main[0],
        filter: left[0],
        list: left[1],
        detail: body[1],
        footer: main[2],
    }
}

fn bordered_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let (border, title_style) = if focused {
        (theme.border_focus, theme.header_active)
    } else {
        (theme.border, theme.header_item)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());
    let theme = &app_state.theme;

    // --- Header ---
    if layout.header.width > 0 && layout.header.height > 0 {
        f.render_widget(
            Header {
                executable: &app_state.executable,
                store_dir: &app_state.store_dir,
                entry_count: app_state.entries.len(),
                filter: app_state.filter.as_deref(),
                theme,
            },
            layout.header,
        );
    }

    // --- Filter ---
    f.render_widget(
        FilterBar {
            text_area: &app_state.filter_input,
            focused: app_state.mode == AppMode::FilterInput,
            theme,
        },
        layout.filter,
    );

    // --- Entries ---
    let list_block = panel("ENTRIES", app_state.mode == AppMode::Normal, theme);
    f.render_widget(list_block, layout.list);
    f.render_stateful_widget(
        EntryList {
            entries: &app_state.entries,
            theme,
        },
        layout.list_inner(),
        &mut app_state.list_state,
    );

    // --- Detail ---
    f.render_widget(panel("DETAIL", false, theme), layout.detail);
    f.render_widget(
        EntryDetail {
            entry: app_state.selected(),
            scroll: app_state.detail_scroll,
            theme,
        },
        layout.detail_inner(),
    );

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme,
            app_state,
        },
        f.area(),
    );
}
