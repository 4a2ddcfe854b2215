//! JSON format implementation
//!
//! Plain JSON dump of the host-side cell records, including the cached layout metadata. This is
//! the shape a notebook host keeps between open and save, so converting Markdown → JSON, editing
//! the cells, then JSON → Markdown behaves like an editor session.
//!
//! ```json
//! {
//!   "cells": [
//!     {
//!       "kind": "code",
//!       "language": "python",
//!       "source": "print(1)",
//!       "metadata": { "leadingWhitespace": "", "trailingWhitespace": "\n" }
//!     }
//!   ]
//! }
//! ```
//!
//! Cells without a `metadata` object are treated as newly inserted.

use crate::error::FormatError;
use crate::format::Format;
use crate::notebook::Notebook;
use std::collections::HashMap;

/// JSON output knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Format implementation for JSON cell records
#[derive(Debug, Clone, Default)]
pub struct JsonFormat {
    options: JsonOptions,
}

impl JsonFormat {
    pub fn new(options: JsonOptions) -> Self {
        JsonFormat { options }
    }

    fn render(&self, notebook: &Notebook, pretty: bool) -> Result<String, FormatError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(notebook)
        } else {
            serde_json::to_string(notebook)
        };
        rendered
            .map(|mut text| {
                text.push('\n');
                text
            })
            .map_err(|e| FormatError::SerializationError(format!("JSON encoding failed: {e}")))
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Notebook cell records as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Notebook, FormatError> {
        serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("Invalid notebook JSON: {e}")))
    }

    fn serialize(&self, notebook: &Notebook) -> Result<String, FormatError> {
        self.render(notebook, self.options.pretty)
    }

    fn serialize_with_options(
        &self,
        notebook: &Notebook,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut pretty = self.options.pretty;
        for (key, value) in options {
            match key.as_str() {
                "pretty" => pretty = parse_bool_option(key, value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'json' does not support parameter '{other}'"
                    )))
                }
            }
        }
        self.render(notebook, pretty)
    }
}

fn parse_bool_option(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::SerializationError(format!(
            "Invalid boolean value '{other}' for parameter '{key}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, CellKind};

    #[test]
    fn test_markdown_layout_survives_json() {
        let source = "Intro\n\n\n```py\nx = 1\n```\n";
        let notebook = Notebook::from_markdown(source);

        let json = JsonFormat::default().serialize(&notebook).unwrap();
        let back = JsonFormat::default().parse(&json).unwrap();

        assert_eq!(back, notebook);
        assert_eq!(back.to_markdown(), "Intro\n\n\n```py3\nx = 1\n```\n");
    }

    #[test]
    fn test_compact_output() {
        let notebook = Notebook::new(vec![Cell::markdown("hi")]);
        let mut options = HashMap::new();
        options.insert("pretty".to_string(), "false".to_string());

        let json = JsonFormat::default()
            .serialize_with_options(&notebook, &options)
            .unwrap();
        assert_eq!(
            json,
            "{\"cells\":[{\"kind\":\"markdown\",\"language\":\"markdown\",\"source\":\"hi\"}]}\n"
        );
    }

    #[test]
    fn test_cells_without_metadata_parse_as_new() {
        let notebook = JsonFormat::default()
            .parse(r#"{"cells":[{"kind":"code","language":"zig","source":"x"}]}"#)
            .unwrap();
        assert_eq!(notebook.cells[0].kind, CellKind::Code);
        assert!(notebook.cells[0].metadata.is_none());
        assert_eq!(notebook.to_markdown(), "```zig\nx\n```\n");
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let result = JsonFormat::default().parse("{not json");
        assert!(matches!(result, Err(FormatError::ParseError(_))));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let mut options = HashMap::new();
        options.insert("indent".to_string(), "4".to_string());
        let result = JsonFormat::default().serialize_with_options(&Notebook::default(), &options);
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }

    #[test]
    fn test_invalid_bool_option() {
        let mut options = HashMap::new();
        options.insert("pretty".to_string(), "maybe".to_string());
        let result = JsonFormat::default().serialize_with_options(&Notebook::default(), &options);
        assert!(matches!(result, Err(FormatError::SerializationError(_))));
    }
}
