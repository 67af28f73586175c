use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub header_item: Style,
    pub header_active: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub delete_marker: Style,
    pub placeholder: Style,

    pub detail_title: Style,
    pub detail_text: Style,

    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,

    pub status_error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Cyan),

            header_logo: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            header_item: Style::default().fg(Color::Rgb(150, 150, 150)),
            header_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            list_item: Style::default().fg(Color::Rgb(200, 200, 200)),
            list_selected: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            delete_marker: Style::default().fg(Color::Red),
            placeholder: Style::default()
                .fg(Color::Rgb(130, 130, 130))
                .add_modifier(Modifier::ITALIC),

            detail_title: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            detail_text: Style::default().fg(Color::Rgb(220, 220, 220)),

            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            footer_segment_key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().fg(Color::White),

            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}
