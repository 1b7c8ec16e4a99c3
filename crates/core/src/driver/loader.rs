//! Reading and parsing of YAML agent definition files.

use super::error::{DriverError, DriverResult};
use ac_protocol::AgentSpec;
use serde::de::Error as _;
use serde_yaml::Value;
use std::path::Path;

/// Parses one agent definition from YAML text.
///
/// The document must be a YAML mapping; an empty or null document is rejected.
/// Unknown keys are ignored and missing keys resolve to defaults when rendered.
pub fn parse_agent_spec(content: &str) -> Result<AgentSpec, serde_yaml::Error> {
    match serde_yaml::from_str::<Value>(content)? {
        value @ Value::Mapping(_) => serde_yaml::from_value(value),
        other => Err(serde_yaml::Error::custom(format!(
            "expected a mapping of agent fields, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Reads and parses the agent definition at `path`.
///
/// # Errors
///
/// Returns `DriverError::FileRead` if the file cannot be read and
/// `DriverError::YamlParse` if it is not a YAML mapping.
pub fn load_agent_spec(path: &Path) -> DriverResult<AgentSpec> {
    let content = std::fs::read_to_string(path).map_err(|source| DriverError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_agent_spec(&content).map_err(|source| DriverError::YamlParse {
        path: path.to_path_buf(),
        source,
    })
}
