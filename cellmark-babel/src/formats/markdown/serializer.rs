//! Markdown serialization (cells → Markdown)
//!
//! Writes cells back using the layout cached on them by the parser. Cells that were inserted
//! after parsing have no cached layout, and get one blank line of separation from their
//! neighbours.

use crate::cell::{CellKind, NotebookCell};
use crate::languages;
use tracing::debug;

/// Separator used next to a cell whose surrounding whitespace is unknown.
const DEFAULT_SEPARATOR: &str = "\n\n";

/// Serialize cells to a Markdown document.
pub fn write_cells_to_markdown<C: NotebookCell>(cells: &[C]) -> String {
    let mut result = String::new();

    for (idx, cell) in cells.iter().enumerate() {
        if idx == 0 {
            if let Some(leading) = cell.metadata().and_then(|m| m.leading_whitespace.as_deref()) {
                result.push_str(leading);
            }
        }

        match cell.kind() {
            CellKind::Code => write_code_block(&mut result, cell),
            CellKind::Markdown => result.push_str(cell.text()),
        }

        result.push_str(&between_cells_whitespace(cell, cells.get(idx + 1)));
    }

    debug!(
        cells = cells.len(),
        bytes = result.len(),
        "serialized cells to markdown"
    );
    result
}

fn write_code_block<C: NotebookCell>(out: &mut String, cell: &C) {
    let indentation = cell
        .metadata()
        .and_then(|m| m.indentation.as_deref())
        .unwrap_or("");

    out.push_str(indentation);
    out.push_str("```");
    out.push_str(languages::tag_for_language(cell.language()));
    out.push('\n');

    // every body line gets a terminator, so no `\r` may be left at its end
    for (i, line) in cell.text().split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if i > 0 {
            out.push('\n');
        }
        out.push_str(indentation);
        out.push_str(line);
    }

    out.push('\n');
    out.push_str(indentation);
    out.push_str("```");
}

/// Whitespace written after `this`, before `next` if there is one.
fn between_cells_whitespace<C: NotebookCell>(this: &C, next: Option<&C>) -> String {
    let trailing = this
        .metadata()
        .and_then(|m| m.trailing_whitespace.as_deref());

    let Some(next) = next else {
        return trailing.unwrap_or("\n").to_string();
    };
    let leading = next
        .metadata()
        .and_then(|m| m.leading_whitespace.as_deref());

    match (trailing, leading) {
        (Some(trailing), Some(leading)) => format!("{trailing}{leading}"),
        _ => {
            // at least one side is a new cell
            let combined = format!("{}{}", trailing.unwrap_or(""), leading.unwrap_or(""));
            if combined.is_empty() || combined == "\n" {
                DEFAULT_SEPARATOR.to_string()
            } else {
                combined
            }
        }
    }
}
