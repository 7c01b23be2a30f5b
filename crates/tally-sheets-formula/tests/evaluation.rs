//! Tests for formula evaluation, including cell references and error
//! propagation between cells

use pretty_assertions::assert_eq;
use tally_sheets_core::{CellError, SheetMemory};
use tally_sheets_formula::FormulaEvaluator;

fn toks(src: &str) -> Vec<String> {
    src.split_whitespace().map(String::from).collect()
}

fn eval(memory: &SheetMemory, src: &str) -> (f64, Option<CellError>) {
    let mut evaluator = FormulaEvaluator::new(memory);
    evaluator.evaluate(&toks(src));
    (evaluator.result(), evaluator.error())
}

#[test]
fn test_arithmetic() {
    let memory = SheetMemory::new();

    assert_eq!(eval(&memory, "1 + 2"), (3.0, None));
    assert_eq!(eval(&memory, "7 - 4"), (3.0, None));
    assert_eq!(eval(&memory, "6 * 7"), (42.0, None));
    assert_eq!(eval(&memory, "9 / 2"), (4.5, None));

    // * and / bind tighter than + and -
    assert_eq!(eval(&memory, "1 + 2 * 3"), (7.0, None));
    assert_eq!(eval(&memory, "10 - 6 / 2"), (7.0, None));

    // Left-associative folding
    assert_eq!(eval(&memory, "10 - 2 - 3"), (5.0, None));
    assert_eq!(eval(&memory, "24 / 4 / 3"), (2.0, None));
}

#[test]
fn test_parentheses_override_precedence() {
    let memory = SheetMemory::new();

    assert_eq!(eval(&memory, "( 1 + 2 ) * 3"), (9.0, None));
    assert_eq!(eval(&memory, "2 * ( 10 - 4 )"), (12.0, None));
}

#[test]
fn test_nested_parentheses() {
    let memory = SheetMemory::new();

    assert_eq!(eval(&memory, "( ( 2 + 3 ) * 2 )"), (10.0, None));
    assert_eq!(eval(&memory, "( ( ( ( 1 ) ) ) + ( ( 2 ) ) )"), (3.0, None));
}

#[test]
fn test_empty_formula() {
    let memory = SheetMemory::new();
    let mut evaluator = FormulaEvaluator::new(&memory);

    evaluator.evaluate(&[]);

    assert_eq!(evaluator.result(), 0.0);
    assert_eq!(evaluator.error(), Some(CellError::EmptyFormula));
}

#[test]
fn test_divide_by_zero() {
    let memory = SheetMemory::new();

    let (result, error) = eval(&memory, "6 / 0");
    assert_eq!(result, f64::INFINITY);
    assert_eq!(error, Some(CellError::Div0));

    // Inside a larger expression the sentinel still surfaces
    let (result, error) = eval(&memory, "2 + 6 / 0");
    assert_eq!(result, f64::INFINITY);
    assert_eq!(error, Some(CellError::Div0));
}

#[test]
fn test_unbalanced_parentheses() {
    let memory = SheetMemory::new();

    let (result, error) = eval(&memory, "( 1 + 2");
    assert_eq!(error, Some(CellError::MissingParentheses));
    // Best-effort value: the inner expression evaluated fine
    assert_eq!(result, 3.0);
}

#[test]
fn test_partial_formula() {
    let memory = SheetMemory::new();

    let (result, error) = eval(&memory, "1 +");
    assert_eq!(error, Some(CellError::Partial));
    assert_eq!(result, 1.0);
}

#[test]
fn test_trailing_token() {
    let memory = SheetMemory::new();

    let (result, error) = eval(&memory, "1 $");
    assert_eq!(error, Some(CellError::InvalidFormula));
    assert_eq!(result, 1.0);
}

#[test]
fn test_invalid_leading_token() {
    let memory = SheetMemory::new();

    let (_, error) = eval(&memory, "$ + 1");
    assert_eq!(error, Some(CellError::InvalidFormula));
}

#[test]
fn test_cell_reference_lookup() {
    let mut memory = SheetMemory::new();
    let cell = memory.cell_mut("A1").unwrap();
    cell.set_formula(["5"]);
    cell.set_value(5.0);

    assert_eq!(eval(&memory, "A1"), (5.0, None));
    assert_eq!(eval(&memory, "A1 * 2 + 1"), (11.0, None));
}

#[test]
fn test_reference_to_empty_cell() {
    let memory = SheetMemory::new();

    // B2 was never written: an empty cell referenced by a formula is a
    // reference error, unlike an empty top-level formula
    let (result, error) = eval(&memory, "B2");
    assert_eq!(result, 0.0);
    assert_eq!(error, Some(CellError::InvalidCell));
}

#[test]
fn test_error_propagates_from_referenced_cell() {
    let mut memory = SheetMemory::new();
    let cell = memory.cell_mut("C3").unwrap();
    cell.set_formula(["1", "/", "0"]);
    cell.set_error(Some(CellError::Div0));

    let (result, error) = eval(&memory, "C3 + 1");
    assert_eq!(error, Some(CellError::Div0));
    assert_eq!(result, 0.0);
}

#[test]
fn test_empty_formula_marker_on_cell_does_not_propagate() {
    let mut memory = SheetMemory::new();
    let cell = memory.cell_mut("D4").unwrap();
    cell.set_formula(["8"]);
    cell.set_value(8.0);
    // A leftover empty-formula marker is the cell's own business, not a
    // reason to poison formulas that reference it
    cell.set_error(Some(CellError::EmptyFormula));

    assert_eq!(eval(&memory, "D4"), (8.0, None));
}

#[test]
fn test_first_error_wins() {
    let memory = SheetMemory::new();

    // The division error happens inside an unclosed parenthesis; the later
    // structural check must not overwrite it
    let (result, error) = eval(&memory, "( 6 / 0");
    assert_eq!(error, Some(CellError::Div0));
    assert_eq!(result, f64::INFINITY);

    // Likewise trailing tokens after an error keep the original error
    let (result, error) = eval(&memory, "6 / 0 + 1");
    assert_eq!(error, Some(CellError::Div0));
    assert_eq!(result, f64::INFINITY);
}

#[test]
fn test_evaluation_is_idempotent() {
    let mut memory = SheetMemory::new();
    let cell = memory.cell_mut("A1").unwrap();
    cell.set_formula(["3"]);
    cell.set_value(3.0);

    let formula = toks("A1 * ( 2 + 1 )");

    let mut evaluator = FormulaEvaluator::new(&memory);
    evaluator.evaluate(&formula);
    let first = (evaluator.result(), evaluator.error());

    evaluator.evaluate(&formula);
    let second = (evaluator.result(), evaluator.error());

    assert_eq!(first, second);
    assert_eq!(first, (9.0, None));
}

#[test]
fn test_numeric_literal_forms() {
    let memory = SheetMemory::new();

    assert_eq!(eval(&memory, "1e3"), (1000.0, None));
    assert_eq!(eval(&memory, "-4 + 1"), (-3.0, None));
    assert_eq!(eval(&memory, "0.5 * 8"), (4.0, None));
}
