//! Cell label parsing and formatting

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell label (e.g., "A1", "B7")
///
/// Labels use column letters (A-XFD) followed by a 1-based row number.
/// This is the reference grammar formulas use: one or more ASCII letters,
/// then one or more digits, within sheet bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellLabel {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellLabel {
    /// Create a new cell label from row/column indices
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell label from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use tally_sheets_core::CellLabel;
    ///
    /// let label = CellLabel::parse("A1").unwrap();
    /// assert_eq!(label.row, 0);
    /// assert_eq!(label.col, 0);
    ///
    /// let label = CellLabel::parse("B7").unwrap();
    /// assert_eq!(label.row, 6);
    /// assert_eq!(label.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidLabel("empty label".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        // Column letters
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == 0 {
            return Err(Error::InvalidLabel(format!("no column letters in '{}'", s)));
        }

        let col = Self::letters_to_column(&s[..pos])?;

        // Row number
        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidLabel(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidLabel(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in labels, 0-based internally
        if row == 0 {
            return Err(Error::InvalidLabel(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        let row = row - 1;

        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self { row, col })
    }

    /// Check whether a string is a well-formed, in-bounds cell label
    ///
    /// This is the reference predicate the formula evaluator uses to decide
    /// whether a token names a cell.
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut result = String::new();
        let mut n = col as u32 + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidLabel("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidLabel(format!("invalid column letter '{}'", c)));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);

            // Guard here so long letter runs cannot overflow the accumulator
            if col > MAX_COLS as u32 {
                return Err(Error::ColumnOutOfBounds(MAX_COLS, MAX_COLS - 1));
            }
        }

        let col = col - 1; // Convert to 0-based

        if col >= MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(col as u16, MAX_COLS - 1));
        }

        Ok(col as u16)
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        format!(
            "{}{}",
            Self::column_to_letters(self.col),
            self.row + 1
        )
    }
}

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
