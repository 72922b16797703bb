//! Context menus for list rows
//!
//! At most one menu is open. It is owned by the app, placed next to the row
//! it belongs to, and listens for outside clicks only while it is open.

pub mod menu_events;
pub mod menu_render;
mod menu_state;

pub use menu_state::{MenuClick, MenuItem, MenuState, OutsideClickSubscription, menu_items_for};
