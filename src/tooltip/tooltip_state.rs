use crate::geometry::{Placement, Rectangle, Size, Viewport};
use crate::library::RowRef;

use super::placement::{PlacementConfig, try_resolve_placement};
use super::size_observer::SizeObserver;
use super::tooltip_content::TooltipContent;

/// Everything that exists only while a tooltip is on screen.
///
/// Hiding drops this as a whole, which detaches the size observer.
struct ShownTooltip {
    owner: RowRef,
    anchor: Rectangle,
    content: TooltipContent,
    observer: SizeObserver,
    /// First placement waits for a completed render pass that measured the tooltip
    placement_deferred: bool,
    placement: Option<Placement>,
}

pub struct TooltipState {
    /// Whether hover tooltips are shown at all
    pub enabled: bool,
    config: PlacementConfig,
    max_width: u16,
    shown: Option<ShownTooltip>,
}

impl TooltipState {
    pub fn new(enabled: bool, config: PlacementConfig, max_width: u16) -> Self {
        Self {
            enabled,
            config,
            max_width,
            shown: None,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        if !self.enabled {
            self.hide();
        }
    }

    /// Show `content` next to `anchor`. Any previous tooltip is replaced.
    pub fn show(&mut self, owner: RowRef, anchor: Rectangle, content: TooltipContent) {
        if !self.enabled {
            return;
        }
        log::debug!("Showing tooltip for {:?}", owner);
        self.shown = Some(ShownTooltip {
            owner,
            anchor,
            content,
            observer: SizeObserver::attach(),
            placement_deferred: true,
            placement: None,
        });
    }

    pub fn hide(&mut self) {
        if let Some(shown) = self.shown.take() {
            log::debug!("Hiding tooltip for {:?}", shown.owner);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    pub fn owner(&self) -> Option<RowRef> {
        self.shown.as_ref().map(|s| s.owner)
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.shown.as_ref().map(|s| &s.content)
    }

    pub fn placement(&self) -> Option<Placement> {
        self.shown.as_ref().and_then(|s| s.placement)
    }

    /// True while this state owns an attached size observer
    pub fn is_observing(&self) -> bool {
        self.shown.is_some()
    }

    pub fn has_deferred_placement(&self) -> bool {
        self.shown.as_ref().is_some_and(|s| s.placement_deferred)
    }

    pub fn max_width(&self) -> u16 {
        self.max_width
    }

    /// Feed the size measured during rendering. Once the initial placement has
    /// run, a size change repositions immediately. Returns whether it changed.
    pub fn report_size(&mut self, size: Size, viewport: Viewport) -> bool {
        let config = self.config;
        let Some(shown) = self.shown.as_mut() else {
            return false;
        };

        let changed = shown.observer.observe(size);
        if changed && !shown.placement_deferred {
            log::debug!("Tooltip resized to {:?}, repositioning", size);
            recompute(shown, viewport, &config);
        }
        changed
    }

    /// Run the deferred initial placement after a completed render pass.
    ///
    /// Returns true when a placement was produced and the frame should be
    /// redrawn. Stays deferred while the tooltip has not been measured.
    pub fn on_frame_rendered(&mut self, viewport: Viewport) -> bool {
        let config = self.config;
        let Some(shown) = self.shown.as_mut() else {
            return false;
        };
        if !shown.placement_deferred || shown.observer.last().is_none() {
            return false;
        }

        shown.placement_deferred = false;
        recompute(shown, viewport, &config)
    }
}

fn recompute(shown: &mut ShownTooltip, viewport: Viewport, config: &PlacementConfig) -> bool {
    let Some(placement) =
        try_resolve_placement(Some(&shown.anchor), shown.observer.last(), viewport, config)
    else {
        return false;
    };
    log::debug!("Tooltip placed at {:?}", placement);
    shown.placement = Some(placement);
    true
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new(true, PlacementConfig::terminal(), 48)
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
