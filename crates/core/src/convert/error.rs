//! Error types for agent conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while rendering an agent definition.
///
/// Missing agent fields are never errors; they resolve to defaults.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A required template file was not found in embedded assets.
    #[error("Template file not found: {0}")]
    TemplateNotFound(String),
}
