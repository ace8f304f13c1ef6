//! Notebook document model
//!
//! Only `cells[].source` is read; every other notebook field is ignored.

use serde::Deserialize;

/// A Jupyter notebook: an ordered list of cells
#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

/// A single notebook cell
#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub source: CellSource,
}

/// Cell source as stored on disk.
///
/// nbformat allows either a list of lines (each usually keeping its trailing
/// newline) or one multi-line string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Lines(Vec<String>),
    Text(String),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Lines(Vec::new())
    }
}

impl CellSource {
    /// Iterate the source lines in order
    pub fn lines(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            CellSource::Lines(lines) => Box::new(lines.iter().map(String::as_str)),
            CellSource::Text(text) => Box::new(text.lines()),
        }
    }
}

impl Notebook {
    /// Parse a notebook from its JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// All source lines of all cells, in cell order then line order
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.iter().flat_map(|cell| cell.source.lines())
    }
}
