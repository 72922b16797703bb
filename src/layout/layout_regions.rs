use ratatui::layout::Rect;

use crate::library::RowRef;

/// A UI component a mouse position can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Row label, by index into the flattened row list
    Row(usize),
    /// The `⋯` action button at the end of a row
    RowAction(usize),
    /// Open context menu
    Menu,
    /// Inside the list pane but not on a row
    ListPane,
}

/// Where a single row was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRegion {
    pub index: usize,
    pub row: RowRef,
    /// The full row line
    pub area: Rect,
    /// Just the indented label text; tooltips anchor here
    pub label: Rect,
    pub action: Rect,
}

/// Regions recorded during the last render pass
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub list: Option<Rect>,
    pub rows: Vec<RowRegion>,
    pub menu: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list = None;
        self.rows.clear();
        self.menu = None;
    }

    pub fn row(&self, index: usize) -> Option<&RowRegion> {
        self.rows.iter().find(|r| r.index == index)
    }

    pub fn row_for(&self, row: RowRef) -> Option<&RowRegion> {
        self.rows.iter().find(|r| r.row == row)
    }
}
