use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use super::mouse_events;
use crate::edit::edit_events;
use crate::list::list_events;
use crate::menu::menu_events;
use crate::tooltip::tooltip_events;

/// How long to wait for input before checking notification expiry
const POLL_INTERVAL: Duration = Duration::from_millis(250);

impl App {
    /// Wait briefly for one terminal event and process it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            self.handle_event(event);
        }
        self.notification.clear_if_expired();
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key);
            }
            Event::Mouse(mouse) => mouse_events::handle_mouse_event(self, mouse),
            Event::Resize(_, _) => {
                // Anchors moved; the tooltip does not follow them
                self.tooltip.hide();
            }
            _ => {}
        }
        self.apply_pending_commands();
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: Exit application from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Popups take keys before the list
        if self.edit.is_visible() {
            edit_events::handle_edit_popup_key(self, key);
            return;
        }
        if self.menu.is_open() {
            menu_events::handle_menu_key(self, key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('t') => {
                let enabled = tooltip_events::handle_tooltip_toggle(&mut self.tooltip);
                let status = if enabled { "on" } else { "off" };
                self.notification.show(&format!("Tooltips {}", status));
            }
            _ => list_events::handle_list_key(self, key),
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
