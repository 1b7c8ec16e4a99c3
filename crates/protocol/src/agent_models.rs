//! Agent definition models for YAML agent files.
//!
//! This module defines the structure of the plain YAML agent definitions that
//! are converted into Markdown documents with front matter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used when an agent definition does not declare one.
pub const DEFAULT_AGENT_NAME: &str = "unnamed-agent";

/// Represents one agent definition parsed from a YAML file.
///
/// Every field is optional: a missing field resolves to a default at render
/// time rather than failing the parse. Unknown keys are ignored.
///
/// # Example
///
/// ```yaml
/// name: go-developer
/// description: Builds Go services
/// tools:
///   - Read
///   - Grep
/// color: blue
/// use_cases:
///   - Writing HTTP handlers
/// version: 1.0
/// tags: [go, backend]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AgentSpec {
    /// Unique identifier for this agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable description of the agent's purpose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tools the agent may use, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,

    /// UI color hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Example situations in which the agent should be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<String>>,

    /// Version of the agent definition (e.g., `1.0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<MetadataValue>,

    /// Person or team maintaining the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Creation date, kept as written (e.g., `2024-01-15`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<MetadataValue>,

    /// Free-form labels for grouping agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Whether the agent should be invoked proactively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proactive: Option<MetadataValue>,
}

impl AgentSpec {
    /// Returns the declared name, or [`DEFAULT_AGENT_NAME`] when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_AGENT_NAME)
    }

    /// Returns the declared description, or an empty string when absent.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Returns true if any of the metadata fields is present.
    pub fn has_metadata(&self) -> bool {
        self.version.is_some()
            || self.author.is_some()
            || self.created.is_some()
            || self.tags.is_some()
            || self.proactive.is_some()
    }
}

/// A scalar metadata value as written in YAML.
///
/// `version: 1.0`, `version: "1.0"` and `proactive: true` are all accepted;
/// the value is rendered back in its YAML spelling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Number(serde_yaml::Number),
    Text(String),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Bool(value) => write!(f, "{value}"),
            MetadataValue::Number(value) => write!(f, "{value}"),
            MetadataValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_defaults() {
        let spec = AgentSpec::default();
        assert_eq!(spec.display_name(), "unnamed-agent");
        assert_eq!(spec.display_description(), "");
    }

    #[test]
    fn test_has_metadata() {
        let mut spec = AgentSpec::default();
        assert!(!spec.has_metadata());

        spec.tags = Some(vec![]);
        assert!(spec.has_metadata(), "An empty tag list still counts");
    }

    #[test]
    fn test_metadata_value_display() {
        assert_eq!(MetadataValue::from(true).to_string(), "true");
        assert_eq!(MetadataValue::from("2024-01-15").to_string(), "2024-01-15");
        assert_eq!(
            MetadataValue::Number(serde_yaml::Number::from(2_u64)).to_string(),
            "2"
        );
    }
}
