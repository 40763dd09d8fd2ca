use serde_json::Value;

use crate::io::IoError;

pub fn read_toml(contents: &str) -> Result<Value, IoError> {
    let table: ::toml::Table = ::toml::from_str(contents)?;
    Ok(serde_json::to_value(table)?)
}
