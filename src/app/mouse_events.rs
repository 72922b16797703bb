//! Mouse event routing
//!
//! Resolves the region under the pointer and hands the event to the hover
//! or click handlers.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use super::{mouse_click, mouse_hover};
use crate::layout::{Region, region_at};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    // The rename popup is modal
    if app.edit.is_visible() {
        return;
    }

    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved => mouse_hover::handle_hover(app, region),
        MouseEventKind::Down(MouseButton::Left) => mouse_click::handle_press(app, region, mouse),
        MouseEventKind::Drag(MouseButton::Left) => mouse_click::handle_drag(app, region),
        MouseEventKind::Up(MouseButton::Left) => mouse_click::handle_release(app, region),
        MouseEventKind::Down(MouseButton::Right) => {
            mouse_click::handle_right_click(app, region, mouse)
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            handle_scroll(app, region, mouse.kind == MouseEventKind::ScrollDown)
        }
        _ => {}
    }
}

/// The wheel moves the menu selection over an open menu and the list
/// selection over the list. Elsewhere it does nothing.
fn handle_scroll(app: &mut App, region: Option<Region>, down: bool) {
    match region {
        Some(Region::Menu) => {
            if down {
                app.menu.select_next();
            } else {
                app.menu.select_prev();
            }
        }
        Some(Region::Row(_) | Region::RowAction(_) | Region::ListPane) => {
            if down {
                let row_count = app.rows().len();
                app.list.select_next(row_count);
            } else {
                app.list.select_prev();
            }
            app.tooltip.hide();
        }
        None => {}
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
