//! Token classification
//!
//! Formula tokens arrive as bare strings from the upstream tokenizer and
//! carry no type information. Classification happens once per token, at the
//! moment the evaluator consumes or peeks at it.

use tally_sheets_core::CellLabel;

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// What a token turned out to be
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A finite numeric literal
    Number(f64),
    /// One of `+ - * /`
    Op(BinaryOp),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A well-formed cell label (e.g., "B7")
    CellRef,
    /// Anything else
    Invalid,
}

/// Classify a single token
///
/// Checks run in a fixed order: numeric literal, parenthesis, operator, cell
/// reference. A token that both parses as a number and looks like a label is
/// a number.
pub fn classify(token: &str) -> TokenKind {
    if let Some(n) = parse_number(token) {
        return TokenKind::Number(n);
    }

    match token {
        "(" => return TokenKind::LeftParen,
        ")" => return TokenKind::RightParen,
        "+" => return TokenKind::Op(BinaryOp::Add),
        "-" => return TokenKind::Op(BinaryOp::Sub),
        "*" => return TokenKind::Op(BinaryOp::Mul),
        "/" => return TokenKind::Op(BinaryOp::Div),
        _ => {}
    }

    if CellLabel::is_valid(token) {
        return TokenKind::CellRef;
    }

    TokenKind::Invalid
}

/// Parse a token as a finite numeric literal
///
/// Standard float parsing, except the `inf`/`NaN` spellings `str::parse`
/// accepts are rejected: only finite values count as numbers.
fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(classify("0"), TokenKind::Number(0.0));
        assert_eq!(classify("42"), TokenKind::Number(42.0));
        assert_eq!(classify("3.25"), TokenKind::Number(3.25));
        assert_eq!(classify("-7"), TokenKind::Number(-7.0));
        assert_eq!(classify("+7"), TokenKind::Number(7.0));
        assert_eq!(classify("1e3"), TokenKind::Number(1000.0));
    }

    #[test]
    fn test_non_finite_spellings_are_not_numbers() {
        assert_eq!(classify("inf"), TokenKind::Invalid);
        assert_eq!(classify("-inf"), TokenKind::Invalid);
        assert_eq!(classify("NaN"), TokenKind::Invalid);
    }

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(classify("+"), TokenKind::Op(BinaryOp::Add));
        assert_eq!(classify("-"), TokenKind::Op(BinaryOp::Sub));
        assert_eq!(classify("*"), TokenKind::Op(BinaryOp::Mul));
        assert_eq!(classify("/"), TokenKind::Op(BinaryOp::Div));
        assert_eq!(classify("("), TokenKind::LeftParen);
        assert_eq!(classify(")"), TokenKind::RightParen);
    }

    #[test]
    fn test_cell_references() {
        assert_eq!(classify("A1"), TokenKind::CellRef);
        assert_eq!(classify("ZZ99"), TokenKind::CellRef);
        assert_eq!(classify("a1"), TokenKind::CellRef);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(classify("$"), TokenKind::Invalid);
        assert_eq!(classify("A"), TokenKind::Invalid);
        assert_eq!(classify("1A"), TokenKind::Invalid);
        assert_eq!(classify(""), TokenKind::Invalid);
        assert_eq!(classify("SUM"), TokenKind::Invalid);
    }
}
