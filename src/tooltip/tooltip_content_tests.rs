//! Tests for tooltip/tooltip_content

use super::*;
use crate::library::{GroupId, SnippetId};

fn snippet(name: &str, body: &str, description: Option<&str>) -> Snippet {
    Snippet {
        id: SnippetId(1),
        name: name.to_string(),
        body: body.to_string(),
        description: description.map(str::to_string),
    }
}

#[test]
fn test_snippet_tooltip_with_description() {
    let content = snippet_tooltip(&snippet("Status", "git status", Some("Working tree state")));

    assert_eq!(content.title, "Status");
    assert_eq!(
        content.lines,
        vec![
            TooltipLine::Text("Working tree state".to_string()),
            TooltipLine::Blank,
            TooltipLine::Code("git status".to_string()),
        ]
    );
}

#[test]
fn test_snippet_tooltip_truncates_long_bodies() {
    let body = (1..=12).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
    let content = snippet_tooltip(&snippet("Long", &body, None));

    assert_eq!(content.lines.len(), 9);
    assert_eq!(
        content.lines.last(),
        Some(&TooltipLine::Text("… 4 more lines".to_string()))
    );
}

#[test]
fn test_snippet_tooltip_empty_body() {
    let content = snippet_tooltip(&snippet("Nothing", "", None));
    assert_eq!(
        content.lines,
        vec![TooltipLine::Text("(empty snippet)".to_string())]
    );
}

#[test]
fn test_group_tooltip_counts_snippets() {
    let group = Group {
        id: GroupId(1),
        name: "Git".to_string(),
        collapsed: true,
        snippets: vec![snippet("a", "b", None)],
    };

    let content = group_tooltip(&group);
    assert_eq!(content.title, "Git");
    assert_eq!(content.lines[0], TooltipLine::Text("1 snippet".to_string()));
    assert_eq!(
        content.lines[1],
        TooltipLine::Text("Click to expand".to_string())
    );
}

#[test]
fn test_measure_adds_chrome() {
    let content = TooltipContent {
        title: "T".to_string(),
        lines: vec![TooltipLine::Code("echo hi".to_string())],
    };

    let (lines, size) = measure_tooltip(&content, 48);

    assert_eq!(lines.len(), 1);
    assert_eq!(size, Size::new(7 + 4, 1 + 2));
}

#[test]
fn test_measure_title_can_set_width() {
    let content = TooltipContent {
        title: "A much longer title".to_string(),
        lines: vec![TooltipLine::Text("x".to_string())],
    };

    let (_, size) = measure_tooltip(&content, 48);
    assert_eq!(size.width, 19 + 2 + 4);
}

#[test]
fn test_measure_wraps_text_at_word_boundaries() {
    let content = TooltipContent {
        title: String::new(),
        lines: vec![TooltipLine::Text("alpha beta gamma delta".to_string())],
    };

    let (lines, size) = measure_tooltip(&content, 15);

    assert_eq!(
        lines,
        vec![
            TooltipLine::Text("alpha beta".to_string()),
            TooltipLine::Text("gamma delta".to_string()),
        ]
    );
    assert_eq!(size, Size::new(11 + 4, 4));
}

#[test]
fn test_measure_hard_wraps_code_and_keeps_spaces() {
    let content = TooltipContent {
        title: String::new(),
        lines: vec![TooltipLine::Code("a  b  c  d".to_string())],
    };

    let (lines, _) = measure_tooltip(&content, 8);

    assert_eq!(
        lines,
        vec![
            TooltipLine::Code("a  b".to_string()),
            TooltipLine::Code("  c ".to_string()),
            TooltipLine::Code(" d".to_string()),
        ]
    );
}

#[test]
fn test_measure_splits_overlong_words() {
    let content = TooltipContent {
        title: String::new(),
        lines: vec![TooltipLine::Text("abcdefgh xy".to_string())],
    };

    let (lines, _) = measure_tooltip(&content, 10);

    assert_eq!(
        lines,
        vec![
            TooltipLine::Text("abcdef".to_string()),
            TooltipLine::Text("gh xy".to_string()),
        ]
    );
}

#[test]
fn test_measure_keeps_every_char_of_overlong_wide_word() {
    let description = format!("a{}", "日本語".repeat(10));
    let content = TooltipContent {
        title: String::new(),
        lines: vec![TooltipLine::Text(description.clone())],
    };

    let (lines, _) = measure_tooltip(&content, 48);

    let texts: Vec<String> = lines
        .iter()
        .map(|line| match line {
            TooltipLine::Text(s) => s.clone(),
            other => panic!("unexpected line {:?}", other),
        })
        .collect();
    assert_eq!(texts.len(), 2);
    assert!(texts.iter().all(|t| t.width() <= 44));
    assert_eq!(texts.concat(), description);
}

#[test]
fn test_measure_mixed_width_overlong_word_keeps_order() {
    let content = TooltipContent {
        title: String::new(),
        lines: vec![TooltipLine::Text("日本語abcdefgh tail".to_string())],
    };

    let (lines, _) = measure_tooltip(&content, 9);

    assert_eq!(
        lines,
        vec![
            TooltipLine::Text("日本".to_string()),
            TooltipLine::Text("語abc".to_string()),
            TooltipLine::Text("defgh".to_string()),
            TooltipLine::Text("tail".to_string()),
        ]
    );
}

#[test]
fn test_measure_counts_double_width_chars() {
    let content = TooltipContent {
        title: String::new(),
        lines: vec![TooltipLine::Code("日本語".to_string())],
    };

    let (_, size) = measure_tooltip(&content, 48);
    assert_eq!(size.width, 6 + 4);
}
