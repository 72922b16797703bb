//! Viewport-aware placement for floating elements
//!
//! Prefers the right side of the anchor, falls back to the left, and when
//! neither side has room picks the roomier one and clamps inside the
//! gap-inset viewport. Vertically the element sits below the anchor and flips
//! above when it would overflow the bottom edge.

use crate::geometry::{Placement, Rectangle, Size, Viewport};

/// Spacing and fallback dimensions used by [`resolve_placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Distance kept from the anchor and from every viewport edge
    pub gap: i32,
    /// Size assumed while the floating element has not been measured
    pub fallback: Size,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            gap: 8,
            fallback: Size::new(400, 100),
        }
    }
}

impl PlacementConfig {
    /// Cell-scaled spacing for terminal frames.
    pub fn terminal() -> Self {
        Self {
            gap: 1,
            fallback: Size::new(40, 5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Right,
    Left,
}

/// Compute where to put a floating element of `size` next to `anchor`.
pub fn resolve_placement(
    anchor: &Rectangle,
    size: Size,
    viewport: Viewport,
    config: &PlacementConfig,
) -> Placement {
    let size = size.or_fallback(config.fallback);
    let gap = config.gap;

    let space_on_right = viewport.width - anchor.right;
    let space_on_left = anchor.left;
    let min_space_required = size.width + gap * 2;

    let left = if space_on_right >= min_space_required {
        anchor.right + gap
    } else if space_on_left >= min_space_required {
        anchor.left - size.width - gap
    } else {
        let side = if space_on_right > space_on_left {
            Side::Right
        } else {
            Side::Left
        };
        match side {
            Side::Right => {
                let naive = anchor.right + gap;
                if naive + size.width > viewport.width - gap {
                    gap.max(viewport.width - size.width - gap)
                } else {
                    naive
                }
            }
            Side::Left => gap.max(anchor.left - size.width - gap),
        }
    };

    let below = anchor.bottom + gap;
    let top = if below + size.height > viewport.height - gap {
        gap.max(anchor.top - size.height - gap)
    } else {
        below
    };

    Placement::new(left, top)
}

/// Guarded variant: skips the update when either element is absent.
pub fn try_resolve_placement(
    anchor: Option<&Rectangle>,
    size: Option<Size>,
    viewport: Viewport,
    config: &PlacementConfig,
) -> Option<Placement> {
    let anchor = anchor?;
    let size = size?;
    Some(resolve_placement(anchor, size, viewport, config))
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod placement_tests;
