//! Evaluation error kinds

use std::fmt;

/// The closed set of errors a formula evaluation can produce
///
/// These are value-level signals, not control-flow errors: a cell stores at
/// most one of them next to its cached value, and the evaluator propagates
/// them between cells verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// #EMPTY! - The formula has no tokens
    EmptyFormula,
    /// #PARTIAL! - The formula ended where a value was expected
    Partial,
    /// #DIV/0! - Division by zero
    Div0,
    /// #REF! - A referenced cell holds no formula
    InvalidCell,
    /// #INVALID! - A token is not a number, parenthesis, or cell reference,
    /// or tokens remain after a complete parse
    InvalidFormula,
    /// #PAREN! - An opened parenthesis is never closed
    MissingParentheses,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::EmptyFormula => "#EMPTY!",
            CellError::Partial => "#PARTIAL!",
            CellError::Div0 => "#DIV/0!",
            CellError::InvalidCell => "#REF!",
            CellError::InvalidFormula => "#INVALID!",
            CellError::MissingParentheses => "#PAREN!",
        }
    }

    /// Parse an error display string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "#EMPTY!" => Some(CellError::EmptyFormula),
            "#PARTIAL!" => Some(CellError::Partial),
            "#DIV/0!" => Some(CellError::Div0),
            "#REF!" => Some(CellError::InvalidCell),
            "#INVALID!" => Some(CellError::InvalidFormula),
            "#PAREN!" => Some(CellError::MissingParentheses),
            _ => None,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
