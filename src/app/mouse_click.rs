//! Mouse click handling
//!
//! Left press selects a row and starts a drag; releasing on another row
//! reorders, releasing on the same group header toggles it. The `⋯` button
//! and right click open the row's context menu. An open menu sees every
//! click first.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::command::{Command, MenuTarget};
use crate::layout::Region;
use crate::library::RowRef;
use crate::menu::MenuClick;

fn region_row(app: &App, region: Option<Region>) -> Option<(usize, RowRef)> {
    match region {
        Some(Region::Row(index)) | Some(Region::RowAction(index)) => app
            .layout_regions
            .row(index)
            .map(|r| (index, r.row)),
        _ => None,
    }
}

/// Give an open menu the first look at a click. Returns true if consumed.
fn route_to_menu(app: &mut App, mouse: MouseEvent) -> bool {
    let target = app.menu.target();
    match app.menu.handle_click(mouse.column, mouse.row) {
        MenuClick::NotOpen => false,
        MenuClick::Item(item) => {
            if let Some(command) = target.and_then(|t| item.command(t)) {
                app.commands.dispatch(command);
            }
            app.menu.close();
            true
        }
        MenuClick::Inside | MenuClick::Outside => true,
    }
}

pub fn handle_press(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if route_to_menu(app, mouse) {
        return;
    }

    let Some((index, row)) = region_row(app, region) else {
        return;
    };
    let row_count = app.rows().len();
    app.list.select(index, row_count);
    app.tooltip.hide();

    if matches!(region, Some(Region::RowAction(_))) {
        app.commands.dispatch(Command::ToggleMenu(MenuTarget::from(row)));
    } else {
        app.list.begin_drag(row, index);
    }
}

pub fn handle_drag(app: &mut App, region: Option<Region>) {
    if !app.list.is_dragging() {
        return;
    }
    let hover = region_row(app, region).map(|(index, _)| index);
    app.list.update_drag_hover(hover);
    app.tooltip.hide();
}

pub fn handle_release(app: &mut App, region: Option<Region>) {
    let Some(drag) = app.list.end_drag() else {
        return;
    };
    let Some((_, target)) = region_row(app, region) else {
        return;
    };

    if target == drag.origin {
        if let RowRef::Group(id) = target {
            app.commands.dispatch(Command::ToggleGroup(id));
        }
    } else {
        app.commands.dispatch(Command::MoveRow {
            from: drag.origin,
            to: target,
        });
    }
}

pub fn handle_right_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if route_to_menu(app, mouse) {
        return;
    }

    let Some((index, row)) = region_row(app, region) else {
        return;
    };
    let row_count = app.rows().len();
    app.list.select(index, row_count);
    app.commands.dispatch(Command::ToggleMenu(MenuTarget::from(row)));
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
