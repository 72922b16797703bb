use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::TooltipState;
use super::tooltip_content::{TooltipLine, measure_tooltip};
use crate::geometry::Viewport;
use crate::widgets::popup;

/// Measure and draw the tooltip.
///
/// Measuring happens on every pass so size changes reach the observer. The
/// box is only drawn once a placement exists, so the first pass after
/// showing is a measure-only pass. Returns the drawn area.
pub fn render_tooltip(frame: &mut Frame, state: &mut TooltipState) -> Option<Rect> {
    let (lines, size, title) = {
        let content = state.content()?;
        let (lines, size) = measure_tooltip(content, state.max_width());
        (lines, size, content.title.clone())
    };

    let frame_area = frame.area();
    state.report_size(size, Viewport::from(frame_area));

    let area = state.placement()?.to_rect(size, frame_area);
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let text: Vec<Line> = lines.into_iter().map(styled_line).collect();

    popup::clear_area(frame, area);
    let tooltip = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format_tooltip_title(&title))
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(tooltip, area);

    Some(area)
}

pub fn format_tooltip_title(title: &str) -> String {
    if title.is_empty() {
        String::new()
    } else {
        format!(" {} ", title)
    }
}

fn styled_line(line: TooltipLine) -> Line<'static> {
    match line {
        TooltipLine::Text(text) => Line::from(Span::styled(text, Style::default().fg(Color::Gray))),
        TooltipLine::Code(code) => Line::from(Span::styled(
            code,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        TooltipLine::Blank => Line::default(),
    }
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;
