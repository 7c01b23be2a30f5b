//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellLabel`] - A cell's location (e.g., "A1")
//! - [`Cell`] - A cell's stored formula, cached value, and error state
//! - [`CellError`] - Evaluation error kinds

mod label;
mod storage;
mod value;

pub use label::CellLabel;
pub use storage::Cell;
pub use value::CellError;
