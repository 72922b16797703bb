use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::geometry::Size;
use crate::library::{Group, Snippet};

const MAX_BODY_LINES: usize = 8;
/// Border plus one column of padding on each side
const HORIZONTAL_CHROME: usize = 4;
const VERTICAL_CHROME: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipLine {
    Text(String),
    Code(String),
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

pub fn snippet_tooltip(snippet: &Snippet) -> TooltipContent {
    let mut lines = Vec::new();

    if let Some(description) = &snippet.description {
        lines.push(TooltipLine::Text(description.clone()));
        lines.push(TooltipLine::Blank);
    }

    let body_lines: Vec<&str> = snippet.body.lines().collect();
    for line in body_lines.iter().take(MAX_BODY_LINES) {
        lines.push(TooltipLine::Code((*line).to_string()));
    }
    if body_lines.len() > MAX_BODY_LINES {
        lines.push(TooltipLine::Text(format!(
            "… {} more lines",
            body_lines.len() - MAX_BODY_LINES
        )));
    }
    if body_lines.is_empty() {
        lines.push(TooltipLine::Text("(empty snippet)".to_string()));
    }

    TooltipContent {
        title: snippet.name.clone(),
        lines,
    }
}

pub fn group_tooltip(group: &Group) -> TooltipContent {
    let count = match group.snippets.len() {
        1 => "1 snippet".to_string(),
        n => format!("{} snippets", n),
    };
    let hint = if group.collapsed {
        "Click to expand"
    } else {
        "Click to collapse"
    };

    TooltipContent {
        title: group.name.clone(),
        lines: vec![TooltipLine::Text(count), TooltipLine::Text(hint.to_string())],
    }
}

/// Wrap `content` to fit `max_width` columns (including chrome) and return the
/// wrapped lines with the outer size of the tooltip box.
pub fn measure_tooltip(content: &TooltipContent, max_width: u16) -> (Vec<TooltipLine>, Size) {
    let inner_max = usize::from(max_width)
        .saturating_sub(HORIZONTAL_CHROME)
        .max(1);

    let mut wrapped = Vec::new();
    for line in &content.lines {
        match line {
            TooltipLine::Text(text) => wrapped.extend(
                wrap_words(text, inner_max)
                    .into_iter()
                    .map(TooltipLine::Text),
            ),
            TooltipLine::Code(code) => wrapped.extend(
                wrap_chars(code, inner_max)
                    .into_iter()
                    .map(TooltipLine::Code),
            ),
            TooltipLine::Blank => wrapped.push(TooltipLine::Blank),
        }
    }

    let title_width = (content.title.width() + 2).min(inner_max);
    let inner_width = wrapped
        .iter()
        .map(|line| match line {
            TooltipLine::Text(s) | TooltipLine::Code(s) => s.width(),
            TooltipLine::Blank => 0,
        })
        .max()
        .unwrap_or(0)
        .max(title_width);

    let size = Size::new(
        (inner_width + HORIZONTAL_CHROME) as i32,
        (wrapped.len() + VERTICAL_CHROME) as i32,
    );
    (wrapped, size)
}

fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= max_width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // Full chunks become lines; the tail can still take more words
            let mut chunks = wrap_chars(word, max_width);
            if let Some(tail) = chunks.pop() {
                out.extend(chunks);
                current_width = tail.width();
                current = tail;
            }
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Hard-wrap by display width, keeping whitespace intact.
fn wrap_chars(text: &str, max_width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > max_width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
#[path = "tooltip_content_tests.rs"]
mod tooltip_content_tests;
