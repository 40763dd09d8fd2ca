pub mod error;
pub mod format;
pub mod reader;

use std::path::Path;

pub use error::IoError;
pub use reader::{read_file, read_flat_map, read_tree};

/// Structured-data formats accepted for rule stores and placeholder files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Maps a file extension to a format, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Resolves the format of a store from its extension; anything unrecognised
/// is read as JSON.
pub fn resolve_store_format(path: &Path) -> Format {
    path.extension()
        .and_then(|ext| Format::from_extension(&ext.to_string_lossy()))
        .unwrap_or(Format::Json)
}
