//! Cell records exchanged with the notebook host
//!
//!     The parser produces [`RawCell`]s: a block of the document together with the exact
//!     blank-line runs that surrounded it. Hosts wrap those into editable [`Cell`]s, keeping the
//!     whitespace and indentation in an opaque [`CellMetadata`] slot that is handed back verbatim
//!     on save. Cells the user inserts carry no metadata, and the serializer picks defaults for
//!     them.

use serde::{Deserialize, Serialize};

/// Language identifier carried by every markdown cell.
pub const MARKDOWN_LANGUAGE: &str = "markdown";

/// The two block kinds a document is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// A paragraph run of prose
    Markdown,
    /// A fenced code block
    Code,
}

/// A block as recognized by the parser, with the layout needed to write it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCell {
    pub kind: CellKind,
    /// Block body. Fences and the fence indentation are already stripped for code.
    pub content: String,
    /// Canonical language identifier, `markdown` for prose.
    pub language: String,
    /// Prefix found before the fence markers of an indented code block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indentation: Option<String>,
    /// Newlines before the block. Only the first cell of a document has a non-empty run.
    pub leading_whitespace: String,
    /// Newlines after the block, up to the next block or the end of the document.
    pub trailing_whitespace: String,
}

/// Layout cached per cell across a parse/edit/serialize cycle.
///
/// Every field is optional: a missing value means "unknown", which is not the same as an
/// empty run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading_whitespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_whitespace: Option<String>,
}

/// What the serializer needs to know about a host cell.
pub trait NotebookCell {
    fn kind(&self) -> CellKind;

    /// Current text of the cell, possibly edited since it was parsed.
    fn text(&self) -> &str;

    fn language(&self) -> &str;

    /// Cached layout, `None` for cells created after the document was opened.
    fn metadata(&self) -> Option<&CellMetadata>;
}

/// An editable cell as held by a notebook host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub language: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CellMetadata>,
}

impl Cell {
    /// A fresh cell with no cached layout.
    pub fn new(kind: CellKind, language: impl Into<String>, source: impl Into<String>) -> Self {
        Cell {
            kind,
            language: language.into(),
            source: source.into(),
            metadata: None,
        }
    }

    pub fn code(language: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(CellKind::Code, language, source)
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        Self::new(CellKind::Markdown, MARKDOWN_LANGUAGE, source)
    }

    pub fn with_metadata(mut self, metadata: CellMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl From<RawCell> for Cell {
    fn from(raw: RawCell) -> Self {
        Cell {
            kind: raw.kind,
            language: raw.language,
            source: raw.content,
            metadata: Some(CellMetadata {
                indentation: raw.indentation,
                leading_whitespace: Some(raw.leading_whitespace),
                trailing_whitespace: Some(raw.trailing_whitespace),
            }),
        }
    }
}

impl NotebookCell for Cell {
    fn kind(&self) -> CellKind {
        self.kind
    }

    fn text(&self) -> &str {
        &self.source
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn metadata(&self) -> Option<&CellMetadata> {
        self.metadata.as_ref()
    }
}
