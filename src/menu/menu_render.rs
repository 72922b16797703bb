use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::MenuState;
use crate::geometry::{Size, Viewport};
use crate::tooltip::{PlacementConfig, resolve_placement};
use crate::widgets::popup;

/// Columns between an item label and the border on each side
const ITEM_PADDING: usize = 2;

pub fn menu_size(menu: &MenuState) -> Size {
    let widest = menu
        .items()
        .iter()
        .map(|item| item.label().len())
        .max()
        .unwrap_or(0);
    Size::new(
        (widest + ITEM_PADDING * 2 + 2) as i32,
        (menu.items().len() + 2) as i32,
    )
}

/// Draw the open menu beside its anchor row and record where it went.
pub fn render_menu(
    frame: &mut Frame,
    menu: &mut MenuState,
    config: &PlacementConfig,
) -> Option<Rect> {
    let anchor = menu.anchor()?;
    let size = menu_size(menu);
    let frame_area = frame.area();

    let placement = resolve_placement(&anchor, size, Viewport::from(frame_area), config);
    let area = placement.to_rect(size, frame_area);
    menu.set_area(area);

    let selected = menu.selected_index();
    let lines: Vec<Line> = menu
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if matches!(item, super::MenuItem::Delete) {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            let width = usize::from(area.width.saturating_sub(2));
            let label = format!("{:pad$}{}", "", item.label(), pad = ITEM_PADDING);
            Line::from(Span::styled(format!("{:<width$}", label), style))
        })
        .collect();

    popup::clear_area(frame, area);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(widget, area);

    Some(area)
}

#[cfg(test)]
#[path = "menu_render_tests.rs"]
mod menu_render_tests;
