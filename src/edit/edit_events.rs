use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::Input;

use crate::app::App;
use crate::library::RowRef;

pub fn handle_edit_popup_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.edit.close();
        }
        KeyCode::Enter => {
            commit_edit(app);
        }
        _ => {
            app.edit.textarea_mut().input(Input::from(key));
        }
    }
}

fn commit_edit(app: &mut App) {
    let name = app.edit.value();
    let Some(target) = app.edit.target() else {
        return;
    };
    if name.is_empty() {
        app.notification.show_warning("Name cannot be empty");
        return;
    }

    let renamed = match target {
        RowRef::Group(id) => app.library.rename_group(id, &name),
        RowRef::Snippet(id) => app.library.rename_snippet(id, &name),
    };
    if renamed {
        app.notification.show(&format!("Renamed to '{}'", name));
        app.tooltip.hide();
    }
    app.edit.close();
}

#[cfg(test)]
#[path = "edit_events_tests.rs"]
mod edit_events_tests;
