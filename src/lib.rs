#![warn(missing_docs)]
//! Exact cover puzzle solving with dancing links.
//!
//! ## Overview
//!
//! The crate solves N-Queens placement and 9×9 sudoku completion by
//! building a sparse constraint matrix per puzzle and running
//! Knuth's Algorithm X over it, links dancing. Solutions come back
//! as lists of row-signature strings a consumer maps onto board
//! coordinates; passing `record_steps = true` returns the whole
//! search trace instead, one entry per visited search node, ready to
//! drive a playback slider.
//!
//! ## Example
//!
//! ```
//! use dlx_puzzles::{queens, sudoku};
//!
//! // Six non-attacking queens on a 6x6 board.
//! let solutions = queens::solve(6, false);
//! assert_eq!(solutions.len(), 4);
//!
//! // Complete a sudoku grid; givens are digits, blanks are dots.
//! let grid = sudoku::Grid::from_lines(&[
//!     "..3.2.6..",
//!     "9..3.5..1",
//!     "..18.64..",
//!     "..81.29..",
//!     "7.......8",
//!     "..67.82..",
//!     "..26.95..",
//!     "8..2.3..9",
//!     "..5.1.3..",
//! ])?;
//! let solutions = sudoku::solve(&grid, false)?;
//! assert_eq!(solutions.len(), 1);
//! println!("{}", sudoku::apply(&grid, &solutions[0]));
//! # Ok::<(), dlx_puzzles::Error>(())
//! ```
//!
//! The engine itself is problem-agnostic: a new puzzle kind only
//! needs to build a [`Matrix`] and hand it to [`solve_matrix`].

mod node;

pub mod errors;
pub mod matrix;
pub mod naive;
pub mod queens;
pub mod solver;
pub mod sudoku;

pub use crate::errors::{ConstraintViolation, Error, InvalidInput};
pub use crate::matrix::Matrix;
pub use crate::node::NodeId;
pub use crate::solver::{solve_matrix, Solution};
pub use crate::sudoku::Grid;
