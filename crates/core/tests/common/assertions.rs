//! Custom assertion helpers for converted documents.

use std::path::Path;

/// Read a converted document, panicking with the path if it is missing.
pub fn read_document(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected converted document at {}: {e}", path.display()))
}

/// Assert that a document's front matter is exactly `expected`.
pub fn assert_header(document: &str, expected: &[&str]) {
    let header: Vec<&str> = document
        .lines()
        .skip(1)
        .take_while(|line| *line != "---")
        .collect();
    assert_eq!(header, expected, "Unexpected front matter in:\n{document}");
}
