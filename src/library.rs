mod library_loader;
mod library_model;

pub use library_loader::{
    library_path, load_library, load_library_from_path, parse_library_json, parse_library_toml,
};
pub use library_model::{Group, GroupId, Library, RowRef, Snippet, SnippetId};
