use serde_json::Value;

use crate::io::IoError;

pub fn read_yaml(contents: &str) -> Result<Value, IoError> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_str(contents)?;
    Ok(serde_json::to_value(yaml_value)?)
}
