//! Document-level operations built on the Markdown parser and serializer

use crate::notebook::Notebook;
use tracing::debug;

/// Open a Markdown document for editing.
///
/// A blank document has no cells, so it is replaced by a single empty code cell in
/// `default_language`.
pub fn open_document(source: &str, default_language: &str) -> Notebook {
    if source.trim().is_empty() {
        debug!(language = default_language, "blank document, using placeholder cell");
        return Notebook::from_markdown(&format!("```{default_language}\n```"));
    }
    Notebook::from_markdown(source)
}

/// Parse and re-serialize a Markdown document.
///
/// Layout is preserved; fence tags come out in their canonical form.
pub fn format_markdown_source(source: &str) -> String {
    Notebook::from_markdown(source).to_markdown()
}

/// A line where the re-serialized document differs from its source.
///
/// Lines keep their terminator (`\n`, `\r\n` or none at end of text), so a change that only
/// touches line endings still shows up in `expected` and `actual`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDifference {
    /// 1-based line number
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// Outcome of [`check_round_trip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    pub output: String,
    pub first_difference: Option<LineDifference>,
}

impl RoundTrip {
    pub fn is_identical(&self) -> bool {
        self.first_difference.is_none()
    }
}

/// Check whether a document survives parse → serialize unchanged.
pub fn check_round_trip(source: &str) -> RoundTrip {
    let output = format_markdown_source(source);
    let first_difference = first_line_difference(source, &output);
    RoundTrip {
        output,
        first_difference,
    }
}

fn first_line_difference(expected: &str, actual: &str) -> Option<LineDifference> {
    let mut expected_lines = expected.split_inclusive('\n');
    let mut actual_lines = actual.split_inclusive('\n');
    let mut line = 1;
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return None,
            (e, a) if e != a => {
                return Some(LineDifference {
                    line,
                    expected: e.map(str::to_string),
                    actual: a.map(str::to_string),
                })
            }
            _ => line += 1,
        }
    }
}
