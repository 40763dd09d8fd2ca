use serde_json::Value;

use crate::io::IoError;

pub fn read_json(contents: &str) -> Result<Value, IoError> {
    Ok(serde_json::from_str(contents)?)
}
