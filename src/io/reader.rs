use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::io::format::{json, toml, yaml};
use crate::io::{Format, IoError, resolve_store_format};

/// Reads a whole file into memory. The handle is closed before returning.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|source| {
        let path = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            IoError::NotFound { path }
        } else {
            IoError::Io { path, source }
        }
    })
}

pub fn decode_tree(contents: &str, format: Format) -> Result<Value, IoError> {
    match format {
        Format::Json => json::read_json(contents),
        Format::Yaml => yaml::read_yaml(contents),
        Format::Toml => toml::read_toml(contents),
    }
}

/// Decodes a document that must be a single object whose values are all strings.
pub fn decode_flat_map(
    contents: &str,
    format: Format,
) -> Result<BTreeMap<String, String>, IoError> {
    match decode_tree(contents, format)? {
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(text) => Ok((key, text)),
                other => Err(IoError::NotFlatStringMap {
                    found: format!("{} at key `{key}`", json_type_name(&other)),
                }),
            })
            .collect(),
        other => Err(IoError::NotFlatStringMap {
            found: json_type_name(&other).to_string(),
        }),
    }
}

/// Reads a structured document of any shape.
pub fn read_tree(path: &Path) -> Result<Value, IoError> {
    let contents = read_file(path)?;
    decode_tree(&contents, resolve_store_format(path))
}

pub fn read_flat_map(path: &Path) -> Result<BTreeMap<String, String>, IoError> {
    let contents = read_file(path)?;
    decode_flat_map(&contents, resolve_store_format(path))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
