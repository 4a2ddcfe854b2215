//! Markdown format implementation
//!
//! This module implements lossless conversion between Markdown documents and notebook cells.
//!
//! # Block Model
//!
//! Only two block kinds are recognized:
//!
//! | Block            | Recognized by                                 | Cell kind  |
//! |------------------|-----------------------------------------------|------------|
//! | Fenced code      | ```` ``` ```` + tag, optional 4-space/tab indent | Code       |
//! | Paragraph run    | any other non-blank lines                     | Markdown   |
//!
//! Headings, lists, tables and quotes are all plain paragraph text here. Nothing is rendered or
//! normalized, which is what makes the round trip byte exact.
//!
//! # Lossy Conversions
//!
//! - Fence tags are canonicalized on write (`py` → `py3`, see [`crate::languages`])
//! - `\r\n` line endings become `\n`
//! - Anything after the tag on an opening fence line is dropped
//! - An unterminated fence gains a closing fence
//!
//! # Placeholder Cells
//!
//! A blank document has no cells. When [`MarkdownOptions::placeholder_language`] is set, parsing
//! such a document yields one empty code cell in that language instead, so editors always have
//! something to type into.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::notebook::Notebook;
use tracing::debug;

pub use parser::parse_markdown;
pub use serializer::write_cells_to_markdown;

/// Split text into lines, accepting both `\n` and `\r\n`.
///
/// A `\r` is only part of the terminator when a `\n` follows it; a lone `\r` at the end of the
/// text stays on the last line.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let terminated = text.matches('\n').count();
    text.split('\n').enumerate().map(move |(idx, line)| {
        if idx < terminated {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        }
    })
}

/// Markdown parsing knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Language of the empty code cell used for blank documents
    pub placeholder_language: Option<String>,
}

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn new(options: MarkdownOptions) -> Self {
        MarkdownFormat { options }
    }

    pub fn with_placeholder_language(language: impl Into<String>) -> Self {
        Self::new(MarkdownOptions {
            placeholder_language: Some(language.into()),
        })
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with fenced code cells"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Notebook, FormatError> {
        let notebook = match &self.options.placeholder_language {
            Some(language) => crate::transforms::open_document(source, language),
            None => Notebook::from_markdown(source),
        };
        debug!(cells = notebook.len(), "markdown format parsed notebook");
        Ok(notebook)
    }

    fn serialize(&self, notebook: &Notebook) -> Result<String, FormatError> {
        Ok(notebook.to_markdown())
    }
}
