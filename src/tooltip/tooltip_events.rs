use super::tooltip_state::TooltipState;

/// Flip tooltips on or off. Returns whether they are now enabled.
pub fn handle_tooltip_toggle(state: &mut TooltipState) -> bool {
    state.toggle();
    state.enabled
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;
