//! Sheet memory: the label → cell map formulas resolve references against

use crate::cell::{Cell, CellLabel};
use crate::error::{Error, Result};
use ahash::AHashMap;

/// Cells that were never written read back as this blank cell, so lookup is
/// total for any well-formed label.
static EMPTY_CELL: Cell = Cell::new();

/// Sparse storage for a sheet's cells, keyed by normalized A1-style label
#[derive(Debug, Default)]
pub struct SheetMemory {
    cells: AHashMap<String, Cell>,
}

impl SheetMemory {
    /// Create an empty sheet memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cell by label
    ///
    /// Lookup is total: a label that was never written resolves to a blank
    /// cell (no formula, value 0, no error). Label syntax is the caller's
    /// concern; the evaluator only passes labels that already satisfy
    /// [`CellLabel::is_valid`].
    pub fn get_cell_by_label(&self, label: &str) -> &Cell {
        if let Some(cell) = self.cells.get(label) {
            return cell;
        }
        // Labels are stored normalized; retry through the parser so
        // lowercase references find their cell
        match CellLabel::parse(label) {
            Ok(parsed) => self
                .cells
                .get(&parsed.to_a1_string())
                .unwrap_or(&EMPTY_CELL),
            Err(_) => &EMPTY_CELL,
        }
    }

    /// Get a mutable reference to a cell, creating it if absent
    ///
    /// The label is validated and normalized here; a malformed label is an
    /// error at this boundary, never inside the evaluator.
    pub fn cell_mut(&mut self, label: &str) -> Result<&mut Cell> {
        let normalized = CellLabel::parse(label)
            .map_err(|_| Error::InvalidLabel(label.to_string()))?
            .to_a1_string();
        Ok(self.cells.entry(normalized).or_default())
    }

    /// Number of cells that have been written
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cells have been written
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
