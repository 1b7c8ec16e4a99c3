//! Conversion of YAML agent definitions into Markdown documents.
//!
//! A converted document has a front matter header followed by the purpose,
//! instruction and (optional) metadata sections:
//!
//! ```text
//! ---
//! name: go-developer
//! description: Builds services
//! tools: Read, Grep
//! ---
//!
//! # Purpose
//! ...
//! ## Instructions
//! ...
//! ## Metadata
//! ...
//! ```
//!
//! # Example
//!
//! ```
//! use ac_core::convert::convert;
//! use ac_protocol::AgentSpec;
//!
//! let spec = AgentSpec {
//!     name: Some("go-developer".to_string()),
//!     ..AgentSpec::default()
//! };
//! let document = convert(&spec).expect("templates are embedded");
//! assert!(document.as_str().starts_with("---\nname: go-developer\n"));
//! ```

pub mod error;
pub mod instructions;
pub mod renderer;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{ConvertError, ConvertResult};
pub use instructions::InstructionKind;
pub use renderer::{convert, RenderedDocument};
