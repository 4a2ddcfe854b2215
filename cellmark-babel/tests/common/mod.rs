//! Shared helpers for integration tests.

use cellmark_babel::{Cell, CellKind};
use std::path::PathBuf;

/// Read a document from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// One `kind:language` entry per cell, for compact structural assertions.
pub fn shape(cells: &[Cell]) -> Vec<String> {
    cells
        .iter()
        .map(|cell| match cell.kind {
            CellKind::Code => format!("code:{}", cell.language),
            CellKind::Markdown => "markdown".to_string(),
        })
        .collect()
}
