//! File and directory driver around the converter.
//!
//! A run takes either a single `.yaml`/`.yml` agent file or a directory. For a
//! directory, every agent file below it is converted independently and the
//! outcome of each is reported through a callback.
//!
//! # Example
//!
//! ```no_run
//! use ac_core::driver::{classify_input, convert_directory, ConvertOptions, InputKind};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ConvertOptions {
//!     input: PathBuf::from("agents"),
//!     dry_run: false,
//! };
//!
//! if let InputKind::Directory(dir) = classify_input(&options.input)? {
//!     let summary = convert_directory(&dir, &options, |outcome| {
//!         println!("{}: {}", outcome.input.display(), outcome.result.is_ok());
//!     })?;
//!     println!("{} converted, {} errors", summary.converted, summary.errors);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod runner;

// Re-export commonly used types for convenience
pub use error::{DriverError, DriverResult};
pub use loader::{load_agent_spec, parse_agent_spec};
pub use runner::{
    classify_input, convert_directory, convert_file, discover_inputs, output_path_for,
    BatchSummary, ConvertOptions, FileOutcome, InputKind,
};
