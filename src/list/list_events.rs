//! Keyboard handling for the list
//!
//! Navigation changes the selection directly. Everything that touches the
//! library goes through the command channel.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::command::{Command, MenuTarget};
use crate::library::{Library, RowRef};

pub fn handle_list_key(app: &mut App, key: KeyEvent) {
    let rows = app.rows();
    let row_count = rows.len();
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        // Reorder
        KeyCode::Up if shift => move_selected(app, &rows, true),
        KeyCode::Down if shift => move_selected(app, &rows, false),
        KeyCode::Char('K') => move_selected(app, &rows, true),
        KeyCode::Char('J') => move_selected(app, &rows, false),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.list.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.list.select_next(row_count),
        KeyCode::Home | KeyCode::Char('g') => app.list.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.list.select_last(row_count),

        KeyCode::Enter => match app.selected_row() {
            Some(RowRef::Group(id)) => app.commands.dispatch(Command::ToggleGroup(id)),
            Some(RowRef::Snippet(id)) => app.commands.dispatch(Command::RunSnippet(id)),
            None => {}
        },
        KeyCode::Char(' ') => {
            if let Some(RowRef::Group(id)) = app.selected_row() {
                app.commands.dispatch(Command::ToggleGroup(id));
            }
        }
        KeyCode::Left => collapse_selected(app, &rows),
        KeyCode::Right => {
            if let Some(RowRef::Group(id)) = app.selected_row() {
                if app.library.group(id).is_some_and(|g| g.collapsed) {
                    app.commands.dispatch(Command::ToggleGroup(id));
                }
            }
        }

        KeyCode::Char('m') => {
            if let Some(row) = app.selected_row() {
                app.commands
                    .dispatch(Command::ToggleMenu(MenuTarget::from(row)));
            }
        }
        KeyCode::Char('e') => match app.selected_row() {
            Some(RowRef::Group(id)) => app.commands.dispatch(Command::EditGroup(id)),
            Some(RowRef::Snippet(id)) => app.commands.dispatch(Command::EditSnippet(id)),
            None => {}
        },
        KeyCode::Char('d') | KeyCode::Delete => match app.selected_row() {
            Some(RowRef::Group(id)) => app.commands.dispatch(Command::DeleteGroup(id)),
            Some(RowRef::Snippet(id)) => app.commands.dispatch(Command::DeleteSnippet(id)),
            None => {}
        },
        _ => {}
    }
}

/// On an expanded group, collapse it. On a snippet, jump to its group.
fn collapse_selected(app: &mut App, rows: &[RowRef]) {
    match app.selected_row() {
        Some(RowRef::Group(id)) => {
            if app.library.group(id).is_some_and(|g| !g.collapsed) {
                app.commands.dispatch(Command::ToggleGroup(id));
            }
        }
        Some(RowRef::Snippet(id)) => {
            if let Some(group) = app.library.group_of(id) {
                app.list.select_row(rows, RowRef::Group(group));
            }
        }
        None => {}
    }
}

fn move_selected(app: &mut App, rows: &[RowRef], up: bool) {
    let index = app.list.selected();
    let Some(from) = rows.get(index).copied() else {
        return;
    };
    if let Some(to) = move_target(&app.library, rows, index, up) {
        app.commands.dispatch(Command::MoveRow { from, to });
    }
}

/// Where a one-step keyboard move of `rows[index]` lands.
///
/// Groups swap with the neighbouring group. Snippets swap with the row next
/// to them, which crosses into the neighbouring group at a header.
pub fn move_target(library: &Library, rows: &[RowRef], index: usize, up: bool) -> Option<RowRef> {
    match rows.get(index)? {
        RowRef::Group(id) => {
            let groups = library.groups();
            let position = groups.iter().position(|g| g.id == *id)?;
            let neighbour = if up {
                position.checked_sub(1)?
            } else {
                position + 1
            };
            groups.get(neighbour).map(|g| RowRef::Group(g.id))
        }
        RowRef::Snippet(_) => {
            let neighbour = if up { index.checked_sub(1)? } else { index + 1 };
            rows.get(neighbour).copied()
        }
    }
}

#[cfg(test)]
#[path = "list_events_tests.rs"]
mod list_events_tests;
