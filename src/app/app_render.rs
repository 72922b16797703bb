use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::edit::edit_render;
use crate::list::list_render;
use crate::menu::menu_render;
use crate::notification::render_notification;
use crate::tooltip::tooltip_render;

const KEY_HINTS: &[(&str, &str)] = &[
    ("↑↓", "select"),
    ("Enter", "run/toggle"),
    ("m", "menu"),
    ("e", "rename"),
    ("d", "delete"),
    ("J/K", "reorder"),
    ("t", "tooltips"),
    ("q", "quit"),
];

impl App {
    /// Render the UI
    ///
    /// Layers, bottom to top: list, footer, menu or tooltip, rename popup,
    /// notification. Regions are re-recorded on every pass.
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_area = frame.area();
        self.layout_regions.clear();

        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        list_render::render_list(
            frame,
            list_area,
            &self.library,
            &mut self.list,
            &mut self.layout_regions,
        );
        render_footer(frame, footer_area);

        if self.menu.is_open() {
            self.layout_regions.menu =
                menu_render::render_menu(frame, &mut self.menu, &self.placement);
        } else {
            tooltip_render::render_tooltip(frame, &mut self.tooltip);
        }

        edit_render::render_edit_popup(frame, &mut self.edit);
        render_notification(frame, &self.notification);
    }
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
    for (key, action) in KEY_HINTS {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}  ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
