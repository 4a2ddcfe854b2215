//! In-memory notebook document

use crate::cell::{Cell, RawCell};
use crate::formats::markdown::{parse_markdown, write_cells_to_markdown};
use serde::{Deserialize, Serialize};

/// An ordered list of cells, the unit every format parses into and serializes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Notebook { cells }
    }

    /// Wrap parser output, stashing each cell's layout into its metadata.
    pub fn from_raw_cells(raw: Vec<RawCell>) -> Self {
        Self::new(raw.into_iter().map(Cell::from).collect())
    }

    pub fn from_markdown(source: &str) -> Self {
        Self::from_raw_cells(parse_markdown(source))
    }

    /// Notebook holding a single code snippet, as opened from an editor selection.
    pub fn from_snippet(code: &str, language: &str) -> Self {
        Self::from_markdown(&format!("```{language}\n{code}\n```"))
    }

    pub fn to_markdown(&self) -> String {
        write_cells_to_markdown(&self.cells)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Insert a cell. Panics if `index > len`, like [`Vec::insert`].
    pub fn insert(&mut self, index: usize, cell: Cell) {
        self.cells.insert(index, cell);
    }

    pub fn remove(&mut self, index: usize) -> Option<Cell> {
        (index < self.cells.len()).then(|| self.cells.remove(index))
    }
}

impl<'a> IntoIterator for &'a Notebook {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
