//! Single-file and directory conversion.

use super::error::{DriverError, DriverResult};
use super::loader::load_agent_spec;
use crate::convert::convert;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File extensions recognized as agent definitions.
pub const INPUT_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Extension of converted documents.
pub const OUTPUT_EXTENSION: &str = "md";

/// Options for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// A single agent file or a directory to search recursively.
    pub input: PathBuf,

    /// Render every document but write nothing.
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            dry_run: false,
        }
    }
}

/// What a conversion input path refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    File(PathBuf),
    Directory(PathBuf),
}

/// Result of converting one file during a directory run.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    /// The written (or, in a dry run, would-be) output path.
    pub result: DriverResult<PathBuf>,
}

/// Success and failure counts of a directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub errors: usize,
}

/// Returns true if `path` has one of the [`INPUT_EXTENSIONS`].
pub fn is_agent_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| INPUT_EXTENSIONS.contains(&ext))
}

/// Sibling path of `input` with the [`OUTPUT_EXTENSION`].
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Decides whether `path` is a single agent file or a directory.
///
/// # Errors
///
/// Returns `DriverError::InvalidPath` if `path` does not exist, or is a file
/// without a recognized extension.
pub fn classify_input(path: &Path) -> DriverResult<InputKind> {
    if path.is_file() && is_agent_file(path) {
        Ok(InputKind::File(path.to_path_buf()))
    } else if path.is_dir() {
        Ok(InputKind::Directory(path.to_path_buf()))
    } else {
        Err(DriverError::InvalidPath(path.to_path_buf()))
    }
}

/// Converts the agent definition at `input` and writes it next to the input.
///
/// Returns the output path. With `dry_run` set nothing is written.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> DriverResult<PathBuf> {
    let spec = load_agent_spec(input)?;
    let document = convert(&spec)?;
    let output = output_path_for(input);

    if options.dry_run {
        debug!(input = %input.display(), output = %output.display(), "dry run, skipping write");
        return Ok(output);
    }

    let instructions = document.instructions();
    fs::write(&output, document.into_string()).map_err(|source| DriverError::FileWrite {
        path: output.clone(),
        source,
    })?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        ?instructions,
        "converted agent"
    );

    Ok(output)
}

/// Recursively collects all agent definition files under `dir`, in a stable order.
///
/// Entries that cannot be read (for example a subdirectory without read
/// permission) are logged and skipped; the rest of the tree is still walked.
pub fn discover_inputs(dir: &Path) -> Vec<PathBuf> {
    let mut inputs = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() && is_agent_file(entry.path()) {
            inputs.push(entry.into_path());
        }
    }

    inputs
}

/// Converts every agent definition under `dir`.
///
/// Each file is converted independently: a failure is reported through
/// `on_file` and counted, and the run moves on to the next file.
///
/// # Errors
///
/// Returns `DriverError::NoInputFiles` if no readable agent definitions are
/// found under the directory.
pub fn convert_directory<F>(
    dir: &Path,
    options: &ConvertOptions,
    mut on_file: F,
) -> DriverResult<BatchSummary>
where
    F: FnMut(&FileOutcome),
{
    let inputs = discover_inputs(dir);
    if inputs.is_empty() {
        return Err(DriverError::NoInputFiles(dir.to_path_buf()));
    }

    debug!(dir = %dir.display(), count = inputs.len(), "converting agent directory");

    let mut summary = BatchSummary::default();
    for input in inputs {
        let result = convert_file(&input, options);
        match &result {
            Ok(_) => summary.converted += 1,
            Err(e) => {
                warn!(input = %input.display(), error = %e, "conversion failed");
                summary.errors += 1;
            }
        }
        on_file(&FileOutcome { input, result });
    }

    Ok(summary)
}
