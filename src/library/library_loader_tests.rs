use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn test_library_path_returns_config_path() {
    let path = library_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/snipdeck"));
    assert!(path.to_string_lossy().ends_with("snippets.toml"));
}

#[test]
fn test_parse_library_toml_empty_string() {
    let library = parse_library_toml("").unwrap();
    assert!(library.groups().is_empty());
}

#[test]
fn test_parse_library_toml_groups() {
    let content = r#"
[[groups]]
name = "Git"

[[groups.snippets]]
name = "Status"
body = "git status -sb"
description = "Short branch status"

[[groups.snippets]]
name = "Last commit"
body = "git log -1"

[[groups]]
name = "Docker"
collapsed = true

[[groups.snippets]]
name = "Running"
body = "docker ps"
"#;

    let library = parse_library_toml(content).unwrap();
    let groups = library.groups();
    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].name, "Git");
    assert!(!groups[0].collapsed);
    assert_eq!(groups[0].snippets.len(), 2);
    assert_eq!(groups[0].snippets[0].body, "git status -sb");
    assert_eq!(
        groups[0].snippets[0].description,
        Some("Short branch status".to_string())
    );
    assert_eq!(groups[0].snippets[1].description, None);

    assert_eq!(groups[1].name, "Docker");
    assert!(groups[1].collapsed);
}

#[test]
fn test_parse_library_toml_flat_snippets_get_default_group() {
    let content = r#"
[[snippets]]
name = "Select all keys"
query = "keys"
"#;

    let library = parse_library_toml(content).unwrap();
    assert_eq!(library.groups().len(), 1);
    assert_eq!(library.groups()[0].name, "Snippets");
    assert_eq!(library.groups()[0].snippets[0].body, "keys");
}

#[test]
fn test_parse_library_toml_blank_description_is_dropped() {
    let content = r#"
[[snippets]]
name = "x"
body = "y"
description = "   "
"#;

    let library = parse_library_toml(content).unwrap();
    assert_eq!(library.groups()[0].snippets[0].description, None);
}

#[test]
fn test_parse_library_toml_invalid_syntax() {
    let result = parse_library_toml("[[groups]\nname = ");
    assert!(matches!(result, Err(SnipdeckError::InvalidLibrary(_))));
}

#[test]
fn test_parse_library_toml_missing_body() {
    let content = r#"
[[snippets]]
name = "no body"
"#;
    assert!(parse_library_toml(content).is_err());
}

#[test]
fn test_parse_library_json() {
    let content = r#"{
        "groups": [
            {"name": "Shell", "snippets": [{"name": "List", "body": "ls -la"}]}
        ]
    }"#;

    let library = parse_library_json(content).unwrap();
    assert_eq!(library.groups()[0].name, "Shell");
    assert_eq!(library.groups()[0].snippets[0].body, "ls -la");
}

#[test]
fn test_parse_library_json_invalid() {
    assert!(matches!(
        parse_library_json("{not json"),
        Err(SnipdeckError::InvalidLibrary(_))
    ));
}

#[test]
fn test_load_library_from_path_picks_format_by_extension() {
    let temp_dir = TempDir::new().unwrap();

    let toml_path = temp_dir.path().join("lib.toml");
    fs::write(&toml_path, "[[snippets]]\nname = \"a\"\nbody = \"b\"\n").unwrap();
    assert_eq!(load_library_from_path(&toml_path).unwrap().snippet_count(), 1);

    let json_path = temp_dir.path().join("lib.JSON");
    fs::write(&json_path, r#"{"snippets": [{"name": "a", "body": "b"}]}"#).unwrap();
    assert_eq!(load_library_from_path(&json_path).unwrap().snippet_count(), 1);
}

#[test]
fn test_load_library_explicit_missing_path_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");

    let result = load_library(Some(&missing));
    assert!(matches!(result, Err(SnipdeckError::LibraryNotFound(_))));
}

#[test]
fn test_load_library_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snippets.toml");
    fs::write(&path, "[[groups]]\nname = \"Empty\"\n").unwrap();

    let library = load_library(Some(&path)).unwrap();
    assert_eq!(library.groups().len(), 1);
    assert!(library.groups()[0].snippets.is_empty());
}
