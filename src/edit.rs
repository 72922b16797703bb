pub mod edit_events;
pub mod edit_render;
mod edit_state;

pub use edit_state::EditState;
