//! N-Queens as an exact cover problem.
//!
//! A queen on (rank `i`, file `j`) covers rank `i`, file `j`, the
//! ascending diagonal `i + j` and the descending diagonal
//! `n - 1 - j + i`. Every rank and file must hold exactly one queen,
//! so their columns live in the header ring; a diagonal only caps at
//! one queen, so diagonal columns are built detached and never need
//! covering.

use crate::matrix::Matrix;
use crate::node::{NodeId, ROOT};
use crate::solver::{solve_matrix, Solution};
use log::debug;

/// Solves the `n`×`n` queens board.
///
/// Returns every solution as a list of `"R<rank>"`/`"F<file>"`/
/// `"A<asc>"`/`"B<desc>"` row signatures, or the full step trace when
/// `record_steps` is set. `n = 0` yields a single empty solution.
pub fn solve(n: usize, record_steps: bool) -> Vec<Solution> {
    let mut matrix = build_matrix(n);
    matrix.prune_empty_columns();
    solve_matrix(&mut matrix, record_steps)
}

/// Builds the constraint matrix for an `n`×`n` board.
fn build_matrix(n: usize) -> Matrix {
    let mut matrix = Matrix::new();

    // Rank and file columns enter the header ring pairwise, ordered
    // from the middle of the board outward; t is a permutation of
    // 0..n. Board-center constraints are the most contended, so the
    // min-size scan's tie-break reaches them first.
    let mut rank_columns = vec![ROOT; n];
    let mut file_columns = vec![ROOT; n];
    for i in 0..n {
        let t = if i % 2 == 1 { (n - 1 - i) / 2 } else { (n + i) / 2 };
        rank_columns[t] = matrix.add_column(format!("R{}", t));
        file_columns[t] = matrix.add_column(format!("F{}", t));
    }

    let diagonal_count = (2 * n).saturating_sub(1);
    let ascending: Vec<NodeId> = (0..diagonal_count)
        .map(|a| matrix.add_detached_column(format!("A{}", a)))
        .collect();
    let descending: Vec<NodeId> = (0..diagonal_count)
        .map(|b| matrix.add_detached_column(format!("B{}", b)))
        .collect();

    for i in 0..n {
        for j in 0..n {
            matrix.add_row(&[
                rank_columns[i],
                file_columns[j],
                ascending[i + j],
                descending[n - 1 - j + i],
            ]);
        }
    }

    debug!(
        "built {}-queens matrix: {} live columns, {} rows",
        n,
        matrix.live_column_count(),
        n * n
    );
    matrix
}
