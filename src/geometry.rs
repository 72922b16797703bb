//! Screen geometry snapshots
//!
//! Signed, cell-based rectangles used for placement math. Naive positions may
//! go negative before clamping, which `ratatui::layout::Rect` cannot express,
//! so placement works on these types and converts back at the render edge.

use ratatui::layout::Rect;

/// Snapshot of an element's bounds in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rectangle {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        Self::new(
            i32::from(rect.x),
            i32::from(rect.y),
            i32::from(rect.width),
            i32::from(rect.height),
        )
    }
}

/// Visible area used as the positioning boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<Rect> for Viewport {
    fn from(rect: Rect) -> Self {
        Self::new(
            i32::from(rect.x) + i32::from(rect.width),
            i32::from(rect.y) + i32::from(rect.height),
        )
    }
}

/// Measured dimensions of a floating element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Substitute `fallback` for any dimension that has not been measured yet.
    pub fn or_fallback(self, fallback: Size) -> Size {
        Size {
            width: if self.width > 0 {
                self.width
            } else {
                fallback.width
            },
            height: if self.height > 0 {
                self.height
            } else {
                fallback.height
            },
        }
    }
}

/// Absolute offsets assigned to a floating element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub left: i32,
    pub top: i32,
}

impl Placement {
    pub fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    /// Convert to a terminal rect of `size`, clipped to `frame`.
    pub fn to_rect(self, size: Size, frame: Rect) -> Rect {
        let frame_right = i32::from(frame.x) + i32::from(frame.width);
        let frame_bottom = i32::from(frame.y) + i32::from(frame.height);

        let x = self.left.clamp(i32::from(frame.x), frame_right);
        let y = self.top.clamp(i32::from(frame.y), frame_bottom);
        let width = size.width.max(0).min(frame_right - x);
        let height = size.height.max(0).min(frame_bottom - y);

        Rect {
            x: to_u16(x),
            y: to_u16(y),
            width: to_u16(width),
            height: to_u16(height),
        }
    }
}

fn to_u16(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
