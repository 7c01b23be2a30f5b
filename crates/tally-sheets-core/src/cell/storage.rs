//! Cell storage

use crate::cell::CellError;

/// A single cell: its stored formula tokens, cached value, and error state
///
/// The evaluator only reads cells; the surrounding recalculation layer owns
/// mutation and keeps `value`/`error` consistent with `formula`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    formula: Vec<String>,
    value: f64,
    error: Option<CellError>,
}

impl Cell {
    /// Create an empty cell (no formula, value 0, no error)
    pub const fn new() -> Self {
        Self {
            formula: Vec::new(),
            value: 0.0,
            error: None,
        }
    }

    /// The stored formula tokens (empty for a blank cell)
    pub fn formula(&self) -> &[String] {
        &self.formula
    }

    /// The last computed value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The last evaluation error, if any
    pub fn error(&self) -> Option<CellError> {
        self.error
    }

    /// Check if the cell holds no formula
    pub fn is_empty(&self) -> bool {
        self.formula.is_empty()
    }

    /// Replace the stored formula tokens
    pub fn set_formula<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formula = tokens.into_iter().map(Into::into).collect();
    }

    /// Store a computed value
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Store an evaluation error, or clear it with `None`
    pub fn set_error(&mut self, error: Option<CellError>) {
        self.error = error;
    }
}
