//! Markdown parsing (Markdown → cells)
//!
//! The scanner walks the document line by line and recognizes exactly two block kinds: fenced
//! code blocks and paragraph runs. Everything that is not a fence start belongs to a paragraph,
//! so any input produces cells and nothing here can fail.
//!
//! Blank lines between blocks are recorded on the cells as runs of `\n`. Interior runs get one
//! extra newline for the line break that ends the previous block; the run before the first block
//! and the run after the last one are stored as counted.

use super::split_lines;
use crate::cell::{CellKind, RawCell, MARKDOWN_LANGUAGE};
use crate::languages;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Opening fence: optional four-space or tab indentation, backticks, then the tag.
static CODE_BLOCK_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(    |\t)?```(\S*)").expect("fence start pattern is valid"));

/// Closing fence. Laxer than the opening one: any indentation, tag ignored.
static CODE_BLOCK_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*```").expect("fence end pattern is valid"));

struct CodeBlockStart<'a> {
    indentation: Option<&'a str>,
    tag: &'a str,
}

fn parse_code_block_start(line: &str) -> Option<CodeBlockStart<'_>> {
    let captures = CODE_BLOCK_START.captures(line)?;
    Some(CodeBlockStart {
        indentation: captures.get(1).map(|m| m.as_str()),
        tag: captures.get(2).map_or("", |m| m.as_str()),
    })
}

fn is_code_block_start(line: &str) -> bool {
    CODE_BLOCK_START.is_match(line)
}

fn is_code_block_end(line: &str) -> bool {
    CODE_BLOCK_END.is_match(line)
}

/// Cursor over the document lines. Every step leaves `position` on the first line it did not
/// consume.
struct LineScanner<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineScanner<'a> {
    fn new(source: &'a str) -> Self {
        LineScanner {
            lines: split_lines(source).collect(),
            position: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.position >= self.lines.len()
    }

    fn current(&self) -> &'a str {
        self.lines[self.position]
    }

    /// Consume blank lines and encode them as newlines.
    fn whitespace_run(&mut self, is_first: bool) -> String {
        let start = self.position;
        let (end, is_last) = match self.lines[start..].iter().position(|line| !line.is_empty()) {
            Some(offset) => (start + offset, false),
            None => (self.lines.len(), true),
        };
        self.position = end;

        let separator = if is_first || is_last { 0 } else { 1 };
        "\n".repeat(end - start + separator)
    }

    fn code_block(&mut self, start: CodeBlockStart<'a>, leading_whitespace: String) -> RawCell {
        let language = languages::language_for_tag(start.tag).to_string();
        trace!(line = self.position, tag = start.tag, %language, "code fence opened");

        self.position += 1;
        let body_start = self.position;
        let mut body_end = self.lines.len();
        while !self.is_done() {
            if is_code_block_end(self.current()) {
                body_end = self.position;
                self.position += 1;
                break;
            }
            self.position += 1;
        }
        if body_end == self.lines.len() {
            trace!(line = body_start, "code fence runs to end of document");
        }

        let content = self.lines[body_start..body_end]
            .iter()
            .map(|&line| match start.indentation {
                Some(prefix) => line.strip_prefix(prefix).unwrap_or(line),
                None => line,
            })
            .collect::<Vec<_>>()
            .join("\n");

        let trailing_whitespace = self.whitespace_run(false);
        RawCell {
            kind: CellKind::Code,
            content,
            language,
            indentation: start.indentation.map(str::to_string),
            leading_whitespace,
            trailing_whitespace,
        }
    }

    fn paragraph(&mut self, leading_whitespace: String) -> RawCell {
        let start = self.position;
        while !self.is_done() {
            let line = self.current();
            if line.is_empty() || is_code_block_start(line) {
                break;
            }
            self.position += 1;
        }

        let content = self.lines[start..self.position].join("\n");
        let trailing_whitespace = self.whitespace_run(false);
        RawCell {
            kind: CellKind::Markdown,
            content,
            language: MARKDOWN_LANGUAGE.to_string(),
            indentation: None,
            leading_whitespace,
            trailing_whitespace,
        }
    }
}

/// Parse a Markdown document into cells.
///
/// A document made only of blank lines yields no cells; substituting a placeholder is up to the
/// caller (see [`crate::transforms::open_document`]).
pub fn parse_markdown(source: &str) -> Vec<RawCell> {
    let mut scanner = LineScanner::new(source);
    let mut cells = Vec::new();

    while !scanner.is_done() {
        let leading_whitespace = if scanner.position == 0 {
            scanner.whitespace_run(true)
        } else {
            String::new()
        };
        if scanner.is_done() {
            break;
        }

        let cell = match parse_code_block_start(scanner.current()) {
            Some(start) => scanner.code_block(start, leading_whitespace),
            None => scanner.paragraph(leading_whitespace),
        };
        cells.push(cell);
    }

    debug!(
        lines = scanner.lines.len(),
        cells = cells.len(),
        "parsed markdown document"
    );
    cells
}
