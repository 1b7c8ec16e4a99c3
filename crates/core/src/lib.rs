//! # ac-core
//!
//! Conversion of YAML agent definitions into Markdown agent documents.
//!
//! This crate provides:
//! - Rendering of an [`AgentSpec`](ac_protocol::AgentSpec) into a Markdown
//!   document with front matter and templated instructions
//! - Loading of agent files and conversion of single files or whole directories
//!
//! ## Modules
//!
//! - [`convert`]: Pure rendering of agent definitions
//! - [`driver`]: File loading, directory traversal and output writing

pub mod convert;
pub mod driver;
