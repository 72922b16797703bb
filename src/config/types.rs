// Configuration type definitions

use serde::Deserialize;

use crate::geometry::Size;
use crate::tooltip::PlacementConfig;

/// Tooltip configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Show tooltips when hovering rows
    pub enabled: bool,
    /// Cells kept between the tooltip, its anchor and the screen edges
    pub gap: u16,
    pub fallback_width: u16,
    pub fallback_height: u16,
    /// Content wraps past this many columns
    pub max_width: u16,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            enabled: true,
            gap: 1,
            fallback_width: 40,
            fallback_height: 5,
            max_width: 48,
        }
    }
}

impl TooltipConfig {
    pub fn placement(&self) -> PlacementConfig {
        PlacementConfig {
            gap: i32::from(self.gap),
            fallback: Size::new(
                i32::from(self.fallback_width),
                i32::from(self.fallback_height),
            ),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
}
