//! Embedded instruction templates.
//!
//! This module uses `rust-embed` to embed the files from the project root
//! `templates/` directory into the binary at compile time, so conversions do
//! not depend on files next to the executable.

use rust_embed::RustEmbed;

/// Embedded template files from the `templates/` directory.
///
/// The path is calculated relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = project root `templates/`
///
/// With the `debug-embed` feature, debug builds embed the files as well, so
/// tests see exactly what release builds ship.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Arguments
/// * `path` - Relative path from templates root (e.g., "instructions/task.md")
///
/// # Returns
/// The file content as a String, or None if the file doesn't exist.
///
/// # Example
/// ```
/// use ac_core::convert::templates::get_template;
///
/// let task = get_template("instructions/task.md").expect("task.md should exist");
/// assert!(task.starts_with("1. **Understand the Task**"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}
