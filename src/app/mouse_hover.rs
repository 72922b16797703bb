//! Mouse hover handling
//!
//! Shows the tooltip for the row under the pointer. Moving within the same
//! row keeps the current tooltip; leaving it hides it.

use super::app_state::App;
use crate::geometry::Rectangle;
use crate::layout::Region;
use crate::library::RowRef;
use crate::tooltip::{group_tooltip, snippet_tooltip};

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>) {
    if app.menu.is_open() || app.list.is_dragging() {
        app.tooltip.hide();
        return;
    }

    match region {
        Some(Region::Row(index)) | Some(Region::RowAction(index)) => hover_row(app, index),
        Some(Region::Menu) | Some(Region::ListPane) | None => app.tooltip.hide(),
    }
}

fn hover_row(app: &mut App, index: usize) {
    let Some(region) = app.layout_regions.row(index).copied() else {
        app.tooltip.hide();
        return;
    };
    if app.tooltip.owner() == Some(region.row) {
        return;
    }

    let content = match region.row {
        RowRef::Group(id) => app.library.group(id).map(group_tooltip),
        RowRef::Snippet(id) => app.library.snippet(id).map(snippet_tooltip),
    };

    match content {
        Some(content) => app
            .tooltip
            .show(region.row, Rectangle::from(region.label), content),
        None => app.tooltip.hide(),
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
