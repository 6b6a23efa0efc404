//! Errors surfaced before any search step.
//!
//! Both kinds abort the whole solve; a valid matrix cannot fail to
//! search. "No solution exists" is an empty solution list, never an
//! error.

/// Input that is not a well-formed 9×9 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// The grid must consist of exactly nine rows.
    #[error("expected 9 rows, found {0}")]
    WrongRowCount(usize),
    /// Every row must hold exactly nine cells.
    #[error("row {row} has {len} cells instead of 9")]
    WrongRowLength {
        /// Row index, 0-8 top to bottom.
        row: u8,
        /// Number of characters found in the row.
        len: usize,
    },
    /// Accepted cell values are the digits `1`-`9` and `.` for blank.
    #[error("cell ({row}, {col}) holds invalid character {ch:?}")]
    InvalidCharacter {
        /// Row index, 0-8 top to bottom.
        row: u8,
        /// Column index, 0-8 left to right.
        col: u8,
        /// The offending character.
        ch: char,
    },
}

/// A given digit that repeats within one house of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    /// The digit occurs twice in the same row.
    #[error("digit {digit} appears twice in row {row}")]
    Row {
        /// Row index, 0-8.
        row: u8,
        /// The duplicated digit, 1-9.
        digit: u8,
    },
    /// The digit occurs twice in the same column.
    #[error("digit {digit} appears twice in column {col}")]
    Column {
        /// Column index, 0-8.
        col: u8,
        /// The duplicated digit, 1-9.
        digit: u8,
    },
    /// The digit occurs twice in the same 3×3 block.
    #[error("digit {digit} appears twice in block {block}")]
    Block {
        /// Block index, 0-8, row-major.
        block: u8,
        /// The duplicated digit, 1-9.
        digit: u8,
    },
}

/// Any failure of a combined parse-and-solve call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The grid was malformed.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    /// The givens contradict each other.
    #[error(transparent)]
    ConstraintViolation(#[from] ConstraintViolation),
}
