//! CLI-specific transforms
//!
//! This module defines the views available through `cellmark inspect`. Each one renders how a
//! Markdown document is split into cells.
//!
//! - `cells-summary`: one line per cell with kind, language, size, indentation and whitespace runs
//! - `raw-json`: parser output as JSON, layout fields included
//! - `cells-json`: the host-side notebook (cells with metadata) as JSON
//!
//! ## Extra Parameters
//!
//! - `show-whitespace`: when "false", `cells-summary` omits the leading/trailing run sizes
//!
//! Example: `cellmark inspect notes.md cells-summary --extra-show-whitespace false`

use cellmark_babel::{parse_markdown, CellKind, Notebook, RawCell};
use std::collections::HashMap;

/// All available inspect transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["cells-summary", "raw-json", "cells-json"];

/// Run a transform over Markdown source text.
pub fn execute_transform(
    source: &str,
    transform: &str,
    params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform {
        "cells-summary" => {
            let show_whitespace = params
                .get("show-whitespace")
                .map(|v| v != "false")
                .unwrap_or(true);
            Ok(cells_summary(&parse_markdown(source), show_whitespace))
        }
        "raw-json" => to_json(&parse_markdown(source)),
        "cells-json" => to_json(&Notebook::from_markdown(source)),
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|json| format!("{json}\n"))
        .map_err(|e| format!("JSON encoding failed: {e}"))
}

fn cells_summary(cells: &[RawCell], show_whitespace: bool) -> String {
    let mut out = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        let label = match cell.kind {
            CellKind::Code => format!("code:{}", cell.language),
            CellKind::Markdown => "markdown".to_string(),
        };
        out.push_str(&format!(
            "#{idx} {label} lines={}",
            cell.content.split('\n').count()
        ));
        if let Some(indentation) = &cell.indentation {
            out.push_str(&format!(" indent={indentation:?}"));
        }
        if show_whitespace {
            out.push_str(&format!(
                " leading={} trailing={}",
                cell.leading_whitespace.len(),
                cell.trailing_whitespace.len()
            ));
        }
        out.push('\n');
    }
    out
}
