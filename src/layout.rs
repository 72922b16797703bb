//! Layout module for tracking UI component regions
//!
//! The renderer records where rows, their action buttons and the open menu
//! were drawn. `region_at()` maps a mouse position back to a component.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region, RowRegion};
