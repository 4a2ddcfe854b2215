//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing notebooks.

use crate::error::FormatError;
use crate::notebook::Notebook;
use std::collections::HashMap;

/// Trait for notebook formats
///
/// Implementors provide conversion between a string representation and a [`Notebook`].
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Notebook, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Notebook)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Notebook → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Notebook
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Notebook, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Notebook into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _notebook: &Notebook) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a Notebook, optionally using extra parameters.
    ///
    /// The default implementation delegates to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        notebook: &Notebook,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(notebook)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
