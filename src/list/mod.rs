//! Group and snippet list
//!
//! Rows are flattened from the library on every pass: each group header is
//! followed by its snippets unless the group is collapsed.

pub mod list_events;
pub mod list_render;
mod list_state;

pub use list_state::{DragState, ListState};
