use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::confirm::ConfirmRemoveModal;
use super::editor::EditorModal;
use super::help::HelpModal;
use super::helpers::dim_area;

/// Draws whichever modal the current mode calls for, over a dimmed screen.
pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.app_state;
        match state.mode {
            AppMode::Normal | AppMode::FilterInput => {}
            AppMode::Help => {
                dim_area(buf, area);
                HelpModal { theme: self.theme }.render(area, buf);
            }
            AppMode::ConfirmRemove => {
                if let Some(name) = &state.pending_removal {
                    dim_area(buf, area);
                    ConfirmRemoveModal {
                        theme: self.theme,
                        name,
                    }
                    .render(area, buf);
                }
            }
            AppMode::Edit => {
                if let Some(edit) = &state.editor {
                    dim_area(buf, area);
                    EditorModal {
                        theme: self.theme,
                        edit,
                    }
                    .render(area, buf);
                }
            }
        }
    }
}
