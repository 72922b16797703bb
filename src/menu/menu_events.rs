use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::command::Command;

/// Keys while a context menu is open. The menu swallows every key.
pub fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.menu.close(),
        KeyCode::Up | KeyCode::Char('k') => app.menu.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.select_next(),
        KeyCode::Enter => {
            let command = app
                .menu
                .target()
                .zip(app.menu.selected_item())
                .and_then(|(target, item)| item.command(target));
            if let Some(command) = command {
                app.commands.dispatch(command);
            }
            app.menu.close();
        }
        KeyCode::Char('m') => {
            if let Some(target) = app.menu.target() {
                app.commands.dispatch(Command::ToggleMenu(target));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "menu_events_tests.rs"]
mod menu_events_tests;
