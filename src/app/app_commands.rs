use super::app_state::App;
use crate::command::{Command, MenuTarget};
use crate::geometry::Rectangle;
use crate::library::RowRef;
use crate::menu::menu_items_for;

impl App {
    /// Apply every command views dispatched since the last call.
    pub fn apply_pending_commands(&mut self) {
        for command in self.commands.drain() {
            self.apply_command(command);
        }
    }

    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::RunSnippet(id) => {
                if let Some(snippet) = self.library.snippet(id) {
                    self.output = Some(snippet.body.clone());
                    self.should_quit = true;
                }
                self.menu.close();
            }
            Command::EditSnippet(id) => {
                if let Some(snippet) = self.library.snippet(id) {
                    let name = snippet.name.clone();
                    self.begin_edit(RowRef::Snippet(id), &name);
                }
            }
            Command::EditGroup(id) => {
                if let Some(group) = self.library.group(id) {
                    let name = group.name.clone();
                    self.begin_edit(RowRef::Group(id), &name);
                }
            }
            Command::DeleteSnippet(id) => {
                let group = self.library.group_of(id);
                if let Some(snippet) = self.library.remove_snippet(id) {
                    self.notification.show(&format!("Deleted snippet '{}'", snippet.name));
                    self.after_mutation(group.map(RowRef::Group));
                }
            }
            Command::DeleteGroup(id) => {
                if let Some(group) = self.library.remove_group(id) {
                    self.notification.show(&format!("Deleted group '{}'", group.name));
                    self.after_mutation(None);
                }
            }
            Command::ToggleGroup(id) => {
                if self.library.toggle_group(id) {
                    self.after_mutation(Some(RowRef::Group(id)));
                }
            }
            Command::ToggleMenu(target) => self.toggle_menu(target),
            Command::MoveRow { from, to } => {
                if self.library.move_row(from, to) {
                    self.after_mutation(Some(from));
                }
            }
        }
    }

    fn begin_edit(&mut self, target: RowRef, current_name: &str) {
        self.menu.close();
        self.tooltip.hide();
        self.edit.open(target, current_name);
    }

    fn toggle_menu(&mut self, target: MenuTarget) {
        let Some(items) = menu_items_for(target, &self.library) else {
            self.menu.close();
            return;
        };
        // Only rows drawn in the last frame can anchor a menu
        let Some(anchor) = self
            .layout_regions
            .row_for(RowRef::from(target))
            .map(|region| Rectangle::from(region.label))
        else {
            log::debug!("No on-screen anchor for {:?}, menu not toggled", target);
            return;
        };

        self.tooltip.hide();
        self.menu.toggle(target, anchor, items);
    }

    /// Rows shifted: drop floating UI anchored to old positions and move the
    /// selection onto `focus` (or its group when it is hidden).
    fn after_mutation(&mut self, focus: Option<RowRef>) {
        self.tooltip.hide();
        self.menu.close();

        let rows = self.rows();
        if let Some(row) = focus {
            if !self.list.select_row(&rows, row) {
                if let RowRef::Snippet(id) = row {
                    if let Some(group) = self.library.group_of(id) {
                        self.list.select_row(&rows, RowRef::Group(group));
                    }
                }
            }
        }
        self.list.clamp(rows.len());
    }
}

#[cfg(test)]
#[path = "app_commands_tests.rs"]
mod app_commands_tests;
