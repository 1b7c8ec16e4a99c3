//! # ac-protocol
//!
//! Data models shared by the agent-convert crates.
//!
//! This crate defines the structures parsed from YAML agent definition files
//! (`*.yaml` / `*.yml`) before they are rendered into Markdown.
//!
//! ## Modules
//!
//! - [`agent_models`]: Agent definition and metadata scalar types
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and serde_yaml
//! - Independent compilation: No dependencies on other agent-convert crates

pub mod agent_models;

// Re-export all public types for convenience
pub use agent_models::*;
