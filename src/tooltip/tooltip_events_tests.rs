//! Tests for tooltip/tooltip_events

use super::*;
use crate::geometry::Rectangle;
use crate::library::{GroupId, RowRef};
use crate::tooltip::{PlacementConfig, TooltipContent};

#[test]
fn test_handle_tooltip_toggle_from_enabled() {
    let mut state = TooltipState::new(true, PlacementConfig::terminal(), 48);

    let enabled = handle_tooltip_toggle(&mut state);

    assert!(!enabled);
    assert!(!state.enabled);
}

#[test]
fn test_handle_tooltip_toggle_from_disabled() {
    let mut state = TooltipState::new(false, PlacementConfig::terminal(), 48);

    let enabled = handle_tooltip_toggle(&mut state);

    assert!(enabled);
    assert!(state.enabled);
}

#[test]
fn test_handle_tooltip_toggle_hides_visible_tooltip() {
    let mut state = TooltipState::default();
    state.show(
        RowRef::Group(GroupId(1)),
        Rectangle::new(0, 0, 5, 1),
        TooltipContent {
            title: "Git".to_string(),
            lines: Vec::new(),
        },
    );

    handle_tooltip_toggle(&mut state);

    assert!(!state.is_visible());
    assert!(!state.is_observing());
}
