//! 9×9 sudoku completion as an exact cover problem.
//!
//! Givens shrink the matrix up front: every constraint a given
//! already satisfies is never built as a column, and every candidate
//! clashing with a given never becomes a row. That pruning is what
//! keeps the search tractable.
//!
//! Labels use 0-based digits throughout: `r03` is "row 0 holds the
//! digit of value 4".

use std::fmt;

use crate::errors::{ConstraintViolation, Error, InvalidInput};
use crate::matrix::Matrix;
use crate::node::NodeId;
use crate::solver::{solve_matrix, Solution};
use log::debug;

/// A parsed 9×9 grid; zero cells are blanks to fill in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [u8; 81],
}

impl Grid {
    /// Parses nine rows of nine characters, digits `1`-`9` or `.`
    /// for a blank.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Grid, InvalidInput> {
        if lines.len() != 9 {
            return Err(InvalidInput::WrongRowCount(lines.len()));
        }
        let mut cells = [0u8; 81];
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != 9 {
                return Err(InvalidInput::WrongRowLength {
                    row: row as u8,
                    len: line.chars().count(),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    '1'..='9' => cells[row * 9 + col] = ch as u8 - b'0',
                    _ => {
                        return Err(InvalidInput::InvalidCharacter {
                            row: row as u8,
                            col: col as u8,
                            ch,
                        })
                    }
                }
            }
        }
        Ok(Grid { cells })
    }

    /// Parses a grid from one string holding the nine rows separated
    /// by newlines.
    pub fn from_str(s: &str) -> Result<Grid, InvalidInput> {
        Grid::from_lines(&s.lines().collect::<Vec<_>>())
    }

    /// The digit at (`row`, `col`), or `None` for a blank.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        match self.cells[row * 9 + col] {
            0 => None,
            digit => Some(digit),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..9 {
                match self.cells[row * 9 + col] {
                    0 => f.write_str(".")?,
                    digit => write!(f, "{}", digit)?,
                }
            }
        }
        Ok(())
    }
}

fn block(row: usize, col: usize) -> usize {
    row / 3 * 3 + col / 3
}

/// Solves the grid, returning every completion in discovery order,
/// or the full step trace when `record_steps` is set.
///
/// Contradictory givens are rejected before any search; a grid with
/// no blanks yields a single empty solution. An empty list means the
/// grid is valid but has no completion.
pub fn solve(grid: &Grid, record_steps: bool) -> Result<Vec<Solution>, ConstraintViolation> {
    let mut matrix = build_matrix(grid)?;
    Ok(solve_matrix(&mut matrix, record_steps))
}

/// Parses and solves in one call.
pub fn solve_lines<S: AsRef<str>>(
    lines: &[S],
    record_steps: bool,
) -> Result<Vec<Solution>, Error> {
    let grid = Grid::from_lines(lines)?;
    Ok(solve(&grid, record_steps)?)
}

/// Writes a solution's placements back onto the grid, producing the
/// completed board. Signatures not produced by the sudoku builder
/// are ignored.
pub fn apply(grid: &Grid, solution: &Solution) -> Grid {
    let mut cells = grid.cells;
    for signature in solution.rows() {
        let mut position = None;
        let mut value = None;
        for token in signature.split_whitespace() {
            match token.as_bytes() {
                &[b'p', row, col] => {
                    position = Some(((row - b'0') as usize, (col - b'0') as usize));
                }
                &[b'r', _, digit] => value = Some(digit - b'0' + 1),
                _ => {}
            }
        }
        if let (Some((row, col)), Some(value)) = (position, value) {
            cells[row * 9 + col] = value;
        }
    }
    Grid { cells }
}

/// Builds the constraint matrix, validating the givens row-major on
/// the way. Satisfied constraints get no column at all.
fn build_matrix(grid: &Grid) -> Result<Matrix, ConstraintViolation> {
    let mut row_has = [[false; 9]; 9];
    let mut col_has = [[false; 9]; 9];
    let mut block_has = [[false; 9]; 9];
    let mut given = [[false; 9]; 9];

    for row in 0..9 {
        for col in 0..9 {
            if let Some(digit) = grid.get(row, col) {
                let d = (digit - 1) as usize;
                let b = block(row, col);
                if row_has[row][d] {
                    return Err(ConstraintViolation::Row {
                        row: row as u8,
                        digit,
                    });
                }
                if col_has[col][d] {
                    return Err(ConstraintViolation::Column {
                        col: col as u8,
                        digit,
                    });
                }
                if block_has[b][d] {
                    return Err(ConstraintViolation::Block {
                        block: b as u8,
                        digit,
                    });
                }
                row_has[row][d] = true;
                col_has[col][d] = true;
                block_has[b][d] = true;
                given[row][col] = true;
            }
        }
    }

    let mut matrix = Matrix::new();
    let mut position_columns: [[Option<NodeId>; 9]; 9] = [[None; 9]; 9];
    let mut row_columns: [[Option<NodeId>; 9]; 9] = [[None; 9]; 9];
    let mut col_columns: [[Option<NodeId>; 9]; 9] = [[None; 9]; 9];
    let mut block_columns: [[Option<NodeId>; 9]; 9] = [[None; 9]; 9];

    for row in 0..9 {
        for col in 0..9 {
            if !given[row][col] {
                position_columns[row][col] =
                    Some(matrix.add_column(format!("p{}{}", row, col)));
            }
        }
    }
    for house in 0..9 {
        for d in 0..9 {
            if !row_has[house][d] {
                row_columns[house][d] = Some(matrix.add_column(format!("r{}{}", house, d)));
            }
            if !col_has[house][d] {
                col_columns[house][d] = Some(matrix.add_column(format!("c{}{}", house, d)));
            }
            if !block_has[house][d] {
                block_columns[house][d] = Some(matrix.add_column(format!("g{}{}", house, d)));
            }
        }
    }

    let mut candidate_rows = 0;
    for row in 0..9 {
        for col in 0..9 {
            let position = match position_columns[row][col] {
                Some(column) => column,
                None => continue,
            };
            let b = block(row, col);
            for d in 0..9 {
                if row_has[row][d] || col_has[col][d] || block_has[b][d] {
                    continue;
                }
                // a digit excluded by no house always has all three
                // house columns
                if let (Some(r), Some(c), Some(g)) =
                    (row_columns[row][d], col_columns[col][d], block_columns[b][d])
                {
                    matrix.add_row(&[position, r, c, g]);
                    candidate_rows += 1;
                }
            }
        }
    }

    debug!(
        "built sudoku matrix: {} live columns, {} candidate rows",
        matrix.live_column_count(),
        candidate_rows
    );
    Ok(matrix)
}
