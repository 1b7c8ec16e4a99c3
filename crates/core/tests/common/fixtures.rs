//! Test fixtures for creating agent definition directories.

use std::path::Path;
use tempfile::TempDir;

/// A Go developer agent with tools and metadata.
pub const GO_DEVELOPER_YAML: &str = r#"name: go-developer
description: Builds Go services
tools:
  - Read
  - Write
  - Bash
color: cyan
version: 1.2
tags:
  - go
  - backend
"#;

/// A security agent with use cases and no metadata.
pub const SECURITY_REVIEWER_YAML: &str = r#"name: security-reviewer
description: Reviews changes for vulnerabilities
tools: [Read, Grep]
use_cases:
  - Pre-merge review
  - Dependency audit
"#;

/// Not parseable as YAML.
pub const MALFORMED_YAML: &str = "name: broken\n  description: [unclosed";

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_agent(root: &Path, relative: &str, content: &str) -> std::io::Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Create a temporary agents directory with two valid definitions (one nested,
/// one `.yml`) and one malformed definition.
///
/// Returns a TempDir that must be kept alive for the test duration.
pub fn create_agents_dir() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();

    write_agent(root, "go-developer.yaml", GO_DEVELOPER_YAML)?;
    write_agent(root, "review/security-reviewer.yml", SECURITY_REVIEWER_YAML)?;
    write_agent(root, "broken.yaml", MALFORMED_YAML)?;
    write_agent(root, "README.md", "# Agents\n")?;

    Ok(temp_dir)
}
