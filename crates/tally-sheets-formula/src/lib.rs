//! # tally-sheets-formula
//!
//! Recursive-descent formula evaluator for tally-sheets.
//!
//! The evaluator consumes a pre-tokenized formula (tokenization happens
//! upstream) and resolves cell references through a
//! [`SheetMemory`](tally_sheets_core::SheetMemory). It reports a numeric
//! result together with an optional [`CellError`](tally_sheets_core::CellError):
//! on error the result is the last successfully computed value, so callers can
//! display a best-effort number next to the error.
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets_core::SheetMemory;
//! use tally_sheets_formula::FormulaEvaluator;
//!
//! let memory = SheetMemory::new();
//! let mut evaluator = FormulaEvaluator::new(&memory);
//!
//! let formula: Vec<String> = ["(", "2", "+", "3", ")", "*", "2"]
//!     .map(String::from)
//!     .to_vec();
//! evaluator.evaluate(&formula);
//!
//! assert_eq!(evaluator.result(), 10.0);
//! assert_eq!(evaluator.error(), None);
//! ```

pub mod evaluator;
pub mod token;

pub use evaluator::FormulaEvaluator;
pub use token::{classify, BinaryOp, TokenKind};
