//! Main entry point for the `convert-agents` binary.
//!
//! Converts a YAML agent definition, or every definition below a directory,
//! into Markdown agent documents written next to their sources.

use ac_core::driver::{
    classify_input, convert_directory, convert_file, ConvertOptions, DriverError, FileOutcome,
    InputKind,
};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: convert-agents <yaml-file-or-directory>";

const NEXT_STEPS: &str = "Next steps:
1. Review the generated .md files
2. Copy them to ~/.claude/agents/
3. Remove the old .yaml files";

#[derive(Parser)]
#[command(name = "convert-agents", version)]
#[command(about = "Convert YAML agent definitions to Markdown with front matter", long_about = None)]
struct Cli {
    /// A .yaml/.yml agent file, or a directory to search recursively
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Render the documents without writing them
    #[arg(long)]
    dry_run: bool,

    /// Log each conversion step to stderr (overridden by RUST_LOG)
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(input) = cli.path else {
        println!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    };

    let options = ConvertOptions {
        input,
        dry_run: cli.dry_run,
    };

    Ok(run(&options))
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: &ConvertOptions) -> ExitCode {
    match classify_input(&options.input) {
        Ok(InputKind::File(path)) => run_single(&path, options),
        Ok(InputKind::Directory(dir)) => run_directory(&dir, options),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}

fn run_single(path: &Path, options: &ConvertOptions) -> ExitCode {
    match convert_file(path, options) {
        Ok(output) => {
            print_success(&path.display().to_string(), &output.display().to_string(), options);
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_failure(&path.display().to_string(), &e);
            ExitCode::FAILURE
        }
    }
}

/// Exits successfully once any file was attempted, even if every one failed.
fn run_directory(dir: &Path, options: &ConvertOptions) -> ExitCode {
    let report = |outcome: &FileOutcome| {
        let input = file_label(&outcome.input);
        match &outcome.result {
            Ok(output) => print_success(&input, &file_label(output), options),
            Err(e) => print_failure(&input, e),
        }
    };

    let summary = match convert_directory(dir, options, report) {
        Ok(summary) => summary,
        Err(e @ DriverError::NoInputFiles(_)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            return ExitCode::FAILURE;
        }
    };

    debug!(?summary, "directory run finished");

    println!();
    println!(
        "Summary: {} files converted, {} errors",
        summary.converted, summary.errors
    );

    if summary.converted > 0 {
        println!();
        println!("{NEXT_STEPS}");
    }

    ExitCode::SUCCESS
}

fn print_success(input: &str, output: &str, options: &ConvertOptions) {
    let note = if options.dry_run { " (dry run)" } else { "" };
    println!("{} Converted {input} → {output}{note}", "✓".green());
}

fn print_failure(input: &str, error: &DriverError) {
    println!("{} Error converting {input}: {error}", "✗".red());
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
