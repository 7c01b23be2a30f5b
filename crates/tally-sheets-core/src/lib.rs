//! # tally-sheets-core
//!
//! Core data structures for the tally-sheets formula engine.
//!
//! This crate provides the types the evaluator reads through:
//! - [`CellLabel`] - A cell's location in A1-style notation (e.g., "B7")
//! - [`Cell`] - A cell's stored formula, cached value, and error state
//! - [`SheetMemory`] - The label → cell map the evaluator resolves references against
//! - [`CellError`] - The closed taxonomy of evaluation errors
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets_core::SheetMemory;
//!
//! let mut memory = SheetMemory::new();
//! let cell = memory.cell_mut("A1").unwrap();
//! cell.set_formula(["2", "+", "3"]);
//! cell.set_value(5.0);
//!
//! assert_eq!(memory.get_cell_by_label("A1").value(), 5.0);
//! ```

pub mod cell;
pub mod error;
pub mod memory;

// Re-exports for convenience
pub use cell::{Cell, CellError, CellLabel};
pub use error::{Error, Result};
pub use memory::SheetMemory;

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
