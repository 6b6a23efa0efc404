//! The generic search over a built matrix.
//!
//! Knows nothing about what the column labels mean; both puzzle
//! modules drive it with their own matrices. The partial-row stack
//! and the result accumulator are threaded through the recursion
//! explicitly, so a solve owns all of its state.

use crate::matrix::Matrix;
use log::trace;

/// One accepted set of placements: the signatures of the rows chosen
/// on the way to a fully covered matrix, in choice order.
///
/// In a step trace the same type carries partial placements too.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    rows: Vec<String>,
}

impl Solution {
    pub(crate) fn new(rows: Vec<String>) -> Solution {
        Solution { rows }
    }

    /// The chosen row signatures, in the order the search chose them.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Consumes the solution, yielding its row signatures.
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

/// Explores `matrix` in place and returns every complete solution in
/// discovery order.
///
/// With `record_steps` set, the returned list is the full step trace
/// instead: one entry per visited search node, partial placements
/// included, with every complete solution still among them. An
/// already-covered matrix yields a single empty solution without any
/// search.
pub fn solve_matrix(matrix: &mut Matrix, record_steps: bool) -> Vec<Solution> {
    let mut solutions = Vec::new();
    if matrix.is_covered() {
        solutions.push(Solution::new(Vec::new()));
        return solutions;
    }
    let mut stack = Vec::new();
    search(matrix, &mut stack, &mut solutions, record_steps);
    solutions
}

fn search(
    matrix: &mut Matrix,
    stack: &mut Vec<String>,
    solutions: &mut Vec<Solution>,
    record_steps: bool,
) {
    let covered = matrix.is_covered();
    if record_steps || covered {
        solutions.push(Solution::new(stack.clone()));
        if covered {
            trace!("solution found at depth {}", stack.len());
            return;
        }
    }

    let chosen = match matrix.smallest_column() {
        Some(column) => column,
        None => return,
    };

    matrix.cover(chosen);
    let mut row = matrix.down_of(chosen);
    while row != chosen {
        stack.push(matrix.row_signature(row));
        let mut cell = matrix.right_of(row);
        while cell != row {
            let column = matrix.column_of(cell);
            matrix.cover(column);
            cell = matrix.right_of(cell);
        }

        search(matrix, stack, solutions, record_steps);

        // uncover in exact reverse order and direction
        let mut cell = matrix.left_of(row);
        while cell != row {
            let column = matrix.column_of(cell);
            matrix.uncover(column);
            cell = matrix.left_of(cell);
        }
        stack.pop();
        row = matrix.down_of(row);
    }
    matrix.uncover(chosen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    fn sorted_label_sets(solution: &Solution) -> Vec<Vec<String>> {
        let mut sets: Vec<Vec<String>> = solution
            .rows()
            .iter()
            .map(|signature| {
                let mut labels: Vec<String> =
                    signature.split_whitespace().map(str::to_owned).collect();
                labels.sort();
                labels
            })
            .collect();
        sets.sort();
        sets
    }

    #[test]
    fn knuth_paper_example_has_its_unique_solution() {
        // the 6x7 matrix from the dancing links paper
        let mut matrix = Matrix::new();
        let columns: Vec<_> = (0..7)
            .map(|i| matrix.add_column(format!("C{}", i)))
            .collect();
        for row in &[
            vec![2usize, 4, 5],
            vec![0, 3, 6],
            vec![1, 2, 5],
            vec![0, 3],
            vec![1, 6],
            vec![3, 4, 6],
        ] {
            let cells: Vec<_> = row.iter().map(|&i| columns[i]).collect();
            matrix.add_row(&cells);
        }

        let solutions = solve_matrix(&mut matrix, false);
        assert_eq!(solutions.len(), 1);
        assert_eq!(
            sorted_label_sets(&solutions[0]),
            vec![
                vec!["C0".to_owned(), "C3".to_owned()],
                vec!["C1".to_owned(), "C6".to_owned()],
                vec!["C2".to_owned(), "C4".to_owned(), "C5".to_owned()],
            ]
        );
    }

    #[test]
    fn unsatisfiable_matrix_returns_no_solutions() {
        let mut matrix = Matrix::new();
        let a = matrix.add_column("a");
        // b has no rows at all, so no exact cover exists
        matrix.add_column("b");
        matrix.add_row(&[a]);
        let solutions = solve_matrix(&mut matrix, false);
        assert!(solutions.is_empty());
    }

    #[test]
    fn covered_matrix_short_circuits_to_one_empty_solution() {
        for &record_steps in &[false, true] {
            let mut matrix = Matrix::new();
            let solutions = solve_matrix(&mut matrix, record_steps);
            assert_eq!(solutions.len(), 1);
            assert!(solutions[0].rows().is_empty());
        }
    }

    #[test]
    fn trace_contains_the_plain_solutions_in_order() {
        let mut matrix = Matrix::new();
        let columns: Vec<_> = (0..3)
            .map(|i| matrix.add_column(format!("C{}", i)))
            .collect();
        matrix.add_row(&[columns[0], columns[2]]);
        matrix.add_row(&[columns[1]]);
        matrix.add_row(&[columns[0]]);
        matrix.add_row(&[columns[2]]);

        let solutions = solve_matrix(&mut matrix.clone(), false);
        let trace = solve_matrix(&mut matrix, true);
        assert_eq!(solutions.len(), 2);
        assert!(trace.len() > solutions.len());

        let complete: Vec<&Solution> = trace
            .iter()
            .filter(|entry| solutions.contains(*entry))
            .collect();
        assert_eq!(complete, solutions.iter().collect::<Vec<_>>());
    }
}
