use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::library::RowRef;

/// Single-line rename editor for a group or snippet
pub struct EditState {
    target: Option<RowRef>,
    textarea: TextArea<'static>,
}

impl Default for EditState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditState {
    pub fn new() -> Self {
        Self {
            target: None,
            textarea: Self::create_textarea(""),
        }
    }

    fn create_textarea(text: &str) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![text.to_string()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        textarea
    }

    pub fn open(&mut self, target: RowRef, current_name: &str) {
        self.target = Some(target);
        self.textarea = Self::create_textarea(current_name);
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_visible(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<RowRef> {
        self.target
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            Some(RowRef::Group(_)) => " Rename group ",
            Some(RowRef::Snippet(_)) => " Rename snippet ",
            None => "",
        }
    }

    /// Entered name with surrounding whitespace removed
    pub fn value(&self) -> String {
        self.textarea
            .lines()
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_default()
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }
}

#[cfg(test)]
#[path = "edit_state_tests.rs"]
mod edit_state_tests;
