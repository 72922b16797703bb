//! Tooltip module
//!
//! Hover tooltips for list rows. A tooltip is measured during the render pass
//! it first appears in and positioned right after that pass completes; from
//! then on it is repositioned only when its measured size changes.

mod placement;
mod size_observer;
mod tooltip_content;
pub mod tooltip_events;
pub mod tooltip_render;
mod tooltip_state;

pub use placement::{PlacementConfig, resolve_placement, try_resolve_placement};
pub use size_observer::SizeObserver;
pub use tooltip_content::{
    TooltipContent, TooltipLine, group_tooltip, measure_tooltip, snippet_tooltip,
};
pub use tooltip_state::TooltipState;
