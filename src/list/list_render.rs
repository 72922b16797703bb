use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::ListState;
use crate::layout::{LayoutRegions, RowRegion};
use crate::library::{Library, RowRef};

const ACTION_GLYPH: &str = " ⋯ ";
const ACTION_WIDTH: u16 = 3;
const SNIPPET_INDENT: &str = "    ";

pub fn row_label(library: &Library, row: RowRef) -> String {
    match row {
        RowRef::Group(id) => match library.group(id) {
            Some(group) => {
                let marker = if group.collapsed { '▸' } else { '▾' };
                format!("{} {} ({})", marker, group.name, group.snippets.len())
            }
            None => String::new(),
        },
        RowRef::Snippet(id) => match library.snippet(id) {
            Some(snippet) => format!("{}{}", SNIPPET_INDENT, snippet.name),
            None => String::new(),
        },
    }
}

/// Draw the list and record every visible row in `regions`.
pub fn render_list(
    frame: &mut Frame,
    area: Rect,
    library: &Library,
    list: &mut ListState,
    regions: &mut LayoutRegions,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Snippets ({}) ", library.snippet_count()))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    regions.list = Some(area);

    let rows = library.rows();
    if rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No snippets yet. Add some to ~/.config/snipdeck/snippets.toml",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    list.clamp(rows.len());
    list.ensure_visible(usize::from(inner.height));

    let drag = list.drag();
    let visible = rows
        .iter()
        .enumerate()
        .skip(list.offset())
        .take(usize::from(inner.height));

    for (line, (index, row)) in visible.enumerate() {
        let y = inner.y + line as u16;
        let row_area = Rect::new(inner.x, y, inner.width, 1);

        let label = row_label(library, *row);
        let label_limit = inner.width.saturating_sub(ACTION_WIDTH);
        let label_width = (label.width() as u16).min(label_limit);

        let mut style = match row {
            RowRef::Group(_) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            RowRef::Snippet(_) => Style::default().fg(Color::White),
        };
        if index == list.selected() {
            style = style.bg(Color::DarkGray);
        }
        if let Some(drag) = drag {
            if drag.origin == *row {
                style = style.add_modifier(Modifier::ITALIC | Modifier::DIM);
            } else if drag.hover == Some(index) {
                style = style.add_modifier(Modifier::UNDERLINED).bg(Color::Blue);
            }
        }

        let padding = usize::from(label_limit.saturating_sub(label_width));
        let row_line = Line::from(vec![
            Span::raw(truncate_to_width(&label, usize::from(label_limit))),
            Span::raw(" ".repeat(padding)),
            Span::styled(ACTION_GLYPH, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(row_line).style(style), row_area);

        let action_x = inner.x + label_limit;
        regions.rows.push(RowRegion {
            index,
            row: *row,
            area: row_area,
            label: Rect::new(inner.x, y, label_width, 1),
            action: Rect::new(action_x, y, inner.width.saturating_sub(label_limit), 1),
        });
    }
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out
}

#[cfg(test)]
#[path = "list_render_tests.rs"]
mod list_render_tests;
