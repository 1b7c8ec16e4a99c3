//! Error types for the file and directory driver.
//!
//! This module defines all errors that can occur while locating, reading,
//! converting and writing agent definition files.

use crate::convert::ConvertError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving conversions.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input is neither a `.yaml`/`.yml` file nor a directory.
    #[error("{0} is not a valid YAML file or directory")]
    InvalidPath(PathBuf),

    /// A directory contained no agent definition files.
    #[error("No YAML files found in {0}")]
    NoInputFiles(PathBuf),

    /// Failed to read an agent definition file from disk.
    #[error("Failed to read agent file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse an agent definition as a YAML mapping.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Failed to write the converted document.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Rendering failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Type alias for Result with DriverError.
pub type DriverResult<T> = Result<T, DriverError>;
