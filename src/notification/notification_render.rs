use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{NotificationKind, NotificationState};
use crate::widgets::popup;

pub fn render_notification(frame: &mut Frame, state: &NotificationState) -> Option<Rect> {
    let notification = state.current()?;
    let frame_area = frame.area();

    let width = (notification.message.width() as u16 + 4).min(frame_area.width);
    let height = 3u16.min(frame_area.height);
    let area = Rect {
        x: frame_area.right().saturating_sub(width + 1),
        y: frame_area.y + 1u16.min(frame_area.height.saturating_sub(height)),
        width,
        height,
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Warning => Color::Yellow,
    };

    popup::clear_area(frame, area);
    let widget = Paragraph::new(format!(" {}", notification.message))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(widget, area);

    Some(area)
}
