use crate::library::RowRef;

/// A row being dragged with the mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub origin: RowRef,
    /// Row index currently under the pointer
    pub hover: Option<usize>,
}

#[derive(Debug, Default)]
pub struct ListState {
    selected: usize,
    offset: usize,
    drag: Option<DragState>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn select(&mut self, index: usize, row_count: usize) {
        if index < row_count {
            self.selected = index;
        }
    }

    /// Select `row` if it is among `rows`. Returns whether it was found.
    pub fn select_row(&mut self, rows: &[RowRef], row: RowRef) -> bool {
        match rows.iter().position(|r| *r == row) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 && self.selected < row_count - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, row_count: usize) {
        self.selected = row_count.saturating_sub(1);
    }

    /// Keep the selection valid after rows disappeared.
    pub fn clamp(&mut self, row_count: usize) {
        if self.selected >= row_count {
            self.selected = row_count.saturating_sub(1);
        }
    }

    /// Scroll just enough for the selection to be inside `viewport_height` rows.
    pub fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + viewport_height {
            self.offset = self.selected + 1 - viewport_height;
        }
    }

    pub fn begin_drag(&mut self, origin: RowRef, index: usize) {
        self.drag = Some(DragState {
            origin,
            hover: Some(index),
        });
    }

    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn update_drag_hover(&mut self, hover: Option<usize>) {
        if let Some(drag) = self.drag.as_mut() {
            drag.hover = hover;
        }
    }

    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }
}

#[cfg(test)]
#[path = "list_state_tests.rs"]
mod list_state_tests;
