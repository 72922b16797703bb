use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::library_model::{GroupId, Library};
use crate::error::SnipdeckError;

const CONFIG_DIR: &str = "snipdeck";
const LIBRARY_FILE: &str = "snippets.toml";
const UNGROUPED_NAME: &str = "Snippets";

#[derive(Deserialize)]
struct LibraryFile {
    #[serde(default)]
    groups: Vec<GroupEntry>,
    /// Flat `[[snippets]]` tables without a group
    #[serde(default)]
    snippets: Vec<SnippetEntry>,
}

#[derive(Deserialize)]
struct GroupEntry {
    name: String,
    #[serde(default)]
    collapsed: bool,
    #[serde(default)]
    snippets: Vec<SnippetEntry>,
}

#[derive(Deserialize)]
struct SnippetEntry {
    name: String,
    #[serde(alias = "query")]
    body: String,
    #[serde(default)]
    description: Option<String>,
}

pub fn library_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(LIBRARY_FILE))
}

/// Load the library from `path`, or from the default location when `None`.
///
/// A missing default file is an empty library; a missing explicit path is an error.
pub fn load_library(path: Option<&Path>) -> Result<Library, SnipdeckError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(SnipdeckError::LibraryNotFound(path.display().to_string()));
            }
            load_library_from_path(path)
        }
        None => match library_path() {
            Some(default_path) if default_path.exists() => load_library_from_path(&default_path),
            _ => Ok(Library::new()),
        },
    }
}

pub fn load_library_from_path(path: &Path) -> Result<Library, SnipdeckError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_library_json(&contents)
    } else {
        parse_library_toml(&contents)
    }
}

pub fn parse_library_toml(content: &str) -> Result<Library, SnipdeckError> {
    let file = toml::from_str::<LibraryFile>(content)
        .map_err(|e| SnipdeckError::InvalidLibrary(e.message().to_string()))?;
    Ok(build_library(file))
}

pub fn parse_library_json(content: &str) -> Result<Library, SnipdeckError> {
    let file = serde_json::from_str::<LibraryFile>(content)
        .map_err(|e| SnipdeckError::InvalidLibrary(e.to_string()))?;
    Ok(build_library(file))
}

fn build_library(file: LibraryFile) -> Library {
    let mut library = Library::new();

    if !file.snippets.is_empty() {
        let group = library.add_group(UNGROUPED_NAME, false);
        add_entries(&mut library, group, file.snippets);
    }

    for entry in file.groups {
        let group = library.add_group(entry.name, entry.collapsed);
        add_entries(&mut library, group, entry.snippets);
    }

    log::debug!(
        "Loaded {} groups with {} snippets",
        library.groups().len(),
        library.snippet_count()
    );

    library
}

fn add_entries(library: &mut Library, group: GroupId, entries: Vec<SnippetEntry>) {
    for entry in entries {
        let description = entry.description.filter(|d| !d.trim().is_empty());
        library.add_snippet(group, entry.name, entry.body, description);
    }
}

#[cfg(test)]
#[path = "library_loader_tests.rs"]
mod library_loader_tests;
