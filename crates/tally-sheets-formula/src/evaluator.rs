//! Formula evaluator
//!
//! A recursive descent evaluator over pre-tokenized formulas:
//!
//! ```text
//! Expression := Term ( ('+' | '-') Term )*
//! Term       := Factor ( ('*' | '/') Factor )*
//! Factor     := Number | CellReference | '(' Expression ')'
//! ```
//!
//! Errors are value-level: the first error recorded anywhere in the descent
//! sticks, and every production entered afterwards returns the last recorded
//! value without consuming further tokens. Control still unwinds normally so
//! the top-level leftover-token check sees the queue as the parse left it.

use crate::token::{classify, BinaryOp, TokenKind};
use std::collections::VecDeque;
use tally_sheets_core::{CellError, SheetMemory};

/// Evaluates one tokenized formula at a time against a sheet memory
///
/// The evaluator is reusable: every [`evaluate`](FormulaEvaluator::evaluate)
/// call resets its working state. It never mutates the memory it reads.
#[derive(Debug)]
pub struct FormulaEvaluator<'a> {
    memory: &'a SheetMemory,
    tokens: VecDeque<String>,
    error: Option<CellError>,
    last_result: f64,
    result: f64,
}

impl<'a> FormulaEvaluator<'a> {
    /// Create an evaluator reading cell values from `memory`
    pub fn new(memory: &'a SheetMemory) -> Self {
        Self {
            memory,
            tokens: VecDeque::new(),
            error: None,
            last_result: 0.0,
            result: 0.0,
        }
    }

    /// Evaluate a tokenized formula
    ///
    /// The token slice must already be stripped of any leading `=` marker.
    /// Afterwards [`result`](Self::result) holds the computed value and
    /// [`error`](Self::error) the error, if any. On error the result is the
    /// last successfully computed intermediate value (`f64::INFINITY` for a
    /// division by zero), so callers can show a best-effort number alongside
    /// the error.
    pub fn evaluate(&mut self, formula: &[String]) {
        self.tokens = formula.iter().cloned().collect();
        self.error = None;
        self.last_result = 0.0;
        self.result = 0.0;

        if self.tokens.is_empty() {
            self.error = Some(CellError::EmptyFormula);
            return;
        }

        self.result = self.expression();

        // Trailing tokens after a complete parse are an error, but never
        // clobber one recorded deeper in the descent
        if !self.tokens.is_empty() && self.error.is_none() {
            self.error = Some(CellError::InvalidFormula);
        }

        if self.error.is_some() {
            self.result = self.last_result;
        }
    }

    /// The computed value of the last [`evaluate`](Self::evaluate) call
    pub fn result(&self) -> f64 {
        self.result
    }

    /// The error of the last [`evaluate`](Self::evaluate) call, if any
    pub fn error(&self) -> Option<CellError> {
        self.error
    }

    // === Grammar productions ===

    /// Expression := Term ( ('+' | '-') Term )*
    fn expression(&mut self) -> f64 {
        if self.error.is_some() {
            return self.last_result;
        }

        let mut result = self.term();

        while let Some(op) = self.peek_additive() {
            self.tokens.pop_front();
            let term = self.term();
            match op {
                BinaryOp::Add => result += term,
                BinaryOp::Sub => result -= term,
                _ => unreachable!("peek_additive only yields + or -"),
            }
        }

        self.last_result = result;
        result
    }

    /// Term := Factor ( ('*' | '/') Factor )*
    fn term(&mut self) -> f64 {
        if self.error.is_some() {
            return self.last_result;
        }

        let mut result = self.factor();

        while let Some(op) = self.peek_multiplicative() {
            self.tokens.pop_front();
            let factor = self.factor();
            match op {
                BinaryOp::Mul => result *= factor,
                BinaryOp::Div => {
                    if self.error.is_some() {
                        // The divisor production already failed; its error
                        // wins over the would-be division
                    } else if factor == 0.0 {
                        self.error = Some(CellError::Div0);
                        self.last_result = f64::INFINITY;
                        return self.last_result;
                    } else {
                        result /= factor;
                    }
                }
                _ => unreachable!("peek_multiplicative only yields * or /"),
            }
        }

        self.last_result = result;
        result
    }

    /// Factor := Number | CellReference | '(' Expression ')'
    fn factor(&mut self) -> f64 {
        if self.error.is_some() {
            return self.last_result;
        }

        let Some(token) = self.tokens.pop_front() else {
            // A value was expected but the formula ended
            self.error = Some(CellError::Partial);
            return 0.0;
        };

        match classify(&token) {
            TokenKind::Number(n) => {
                self.last_result = n;
                n
            }
            TokenKind::LeftParen => {
                let result = self.expression();
                let closed = matches!(self.tokens.pop_front().as_deref(), Some(")"));
                if !closed && self.error.is_none() {
                    self.error = Some(CellError::MissingParentheses);
                    self.last_result = result;
                }
                result
            }
            TokenKind::CellRef => {
                let (value, error) = self.cell_value(&token);
                if let Some(error) = error {
                    self.error = Some(error);
                    self.last_result = value;
                }
                value
            }
            TokenKind::RightParen | TokenKind::Op(_) | TokenKind::Invalid => {
                self.error = Some(CellError::InvalidFormula);
                0.0
            }
        }
    }

    // === Cell-value resolution ===

    /// Resolve a referenced cell to its cached value
    ///
    /// A stored error other than the cell's own empty-formula marker
    /// propagates verbatim with value 0. A cell holding no formula is a
    /// reference error. The referenced cell is never re-evaluated here; the
    /// recalculation layer keeps its cached value current.
    fn cell_value(&self, label: &str) -> (f64, Option<CellError>) {
        let cell = self.memory.get_cell_by_label(label);

        if let Some(error) = cell.error() {
            if error != CellError::EmptyFormula {
                return (0.0, Some(error));
            }
        }

        if cell.formula().is_empty() {
            return (0.0, Some(CellError::InvalidCell));
        }

        (cell.value(), None)
    }

    // === Peeking ===

    fn peek_additive(&self) -> Option<BinaryOp> {
        match self.tokens.front().map(|t| classify(t)) {
            Some(TokenKind::Op(op @ (BinaryOp::Add | BinaryOp::Sub))) => Some(op),
            _ => None,
        }
    }

    fn peek_multiplicative(&self) -> Option<BinaryOp> {
        match self.tokens.front().map(|t| classify(t)) {
            Some(TokenKind::Op(op @ (BinaryOp::Mul | BinaryOp::Div))) => Some(op),
            _ => None,
        }
    }
}
