//! snipdeck: a terminal snippet browser
//!
//! Groups of shell snippets shown as a collapsible, reorderable list with
//! hover tooltips and per-row context menus.

pub mod app;
pub mod command;
pub mod config;
pub mod edit;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod library;
pub mod list;
pub mod menu;
pub mod notification;
pub mod tooltip;
pub mod widgets;

mod test_utils;

pub use app::App;
pub use error::SnipdeckError;
