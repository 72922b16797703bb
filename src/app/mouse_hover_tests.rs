//! Tests for app/mouse_hover

use crate::app::App;
use crate::library::RowRef;
use crate::test_utils::test_helpers::{
    buffer_text, create_test_terminal, left_down, moved, render_app, test_app,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn rendered() -> (App, Terminal<TestBackend>) {
    let mut app = test_app();
    let mut terminal = create_test_terminal(80, 24);
    render_app(&mut app, &mut terminal);
    (app, terminal)
}

fn hover(app: &mut App, column: u16, row: u16) {
    app.handle_event(ratatui::crossterm::event::Event::Mouse(moved(column, row)));
}

#[test]
fn test_hover_snippet_shows_tooltip_with_deferred_placement() {
    let (mut app, _terminal) = rendered();
    let status = app.library.groups()[0].snippets[0].id;

    hover(&mut app, 3, 2);

    assert!(app.tooltip.is_visible());
    assert!(app.tooltip.is_observing());
    assert_eq!(app.tooltip.owner(), Some(RowRef::Snippet(status)));
    assert!(app.tooltip.has_deferred_placement());
    assert_eq!(app.tooltip.placement(), None);
}

#[test]
fn test_tooltip_is_drawn_after_render_loop() {
    let (mut app, mut terminal) = rendered();

    hover(&mut app, 3, 2);
    render_app(&mut app, &mut terminal);

    assert!(app.tooltip.placement().is_some());
    let text = buffer_text(&terminal);
    assert!(text.contains("Short branch status"));
    assert!(text.contains("git status -sb"));
}

#[test]
fn test_hover_group_shows_count() {
    let (mut app, mut terminal) = rendered();

    hover(&mut app, 3, 1);
    render_app(&mut app, &mut terminal);

    let text = buffer_text(&terminal);
    assert!(text.contains("2 snippets"));
    assert!(text.contains("Click to collapse"));
}

#[test]
fn test_moving_within_same_row_keeps_tooltip() {
    let (mut app, mut terminal) = rendered();
    hover(&mut app, 3, 2);
    render_app(&mut app, &mut terminal);
    let placement = app.tooltip.placement();

    hover(&mut app, 40, 2);

    assert_eq!(app.tooltip.placement(), placement);
    assert!(!app.tooltip.has_deferred_placement());
}

#[test]
fn test_moving_to_another_row_reanchors() {
    let (mut app, mut terminal) = rendered();
    let last = app.library.groups()[0].snippets[1].id;
    hover(&mut app, 3, 2);
    render_app(&mut app, &mut terminal);

    hover(&mut app, 3, 3);

    assert_eq!(app.tooltip.owner(), Some(RowRef::Snippet(last)));
    assert!(app.tooltip.has_deferred_placement());
}

#[test]
fn test_leaving_rows_hides_and_releases_observer() {
    let (mut app, _terminal) = rendered();
    hover(&mut app, 3, 2);

    // Empty list space below the last row
    hover(&mut app, 3, 15);

    assert!(!app.tooltip.is_visible());
    assert!(!app.tooltip.is_observing());
}

#[test]
fn test_hover_outside_list_hides() {
    let (mut app, _terminal) = rendered();
    hover(&mut app, 3, 2);

    // Footer line
    hover(&mut app, 3, 23);

    assert!(!app.tooltip.is_visible());
}

#[test]
fn test_disabled_tooltips_never_show() {
    let (mut app, _terminal) = rendered();
    app.tooltip.toggle();

    hover(&mut app, 3, 2);

    assert!(!app.tooltip.is_visible());
}

#[test]
fn test_no_tooltip_while_menu_open() {
    let (mut app, mut terminal) = rendered();
    // Right edge of row 1 is its action button
    app.handle_event(ratatui::crossterm::event::Event::Mouse(left_down(77, 2)));
    render_app(&mut app, &mut terminal);
    assert!(app.menu.is_open());

    hover(&mut app, 3, 3);

    assert!(!app.tooltip.is_visible());
}

#[test]
fn test_rapid_in_out_retriggers_each_time() {
    let (mut app, _terminal) = rendered();

    for _ in 0..3 {
        hover(&mut app, 3, 2);
        assert!(app.tooltip.has_deferred_placement());
        hover(&mut app, 3, 15);
        assert!(!app.tooltip.is_observing());
    }
}
