//! The sparse constraint matrix the search engine dances over.
//!
//! Columns are constraints, rows are placements. A column linked into
//! the horizontal header ring must be covered by exactly one chosen
//! row; a detached column merely forbids choosing two of its rows.
//! Builders create all columns first, then add one row per candidate
//! placement, and keep the returned [`NodeId`] handles instead of
//! ever looking a column up by name again.

use crate::node::{Arena, NodeId, ROOT};

/// A sparse 0/1 exact cover matrix in circular doubly-linked form.
///
/// Built once per solve, then explored in place by
/// [`crate::solver::solve_matrix`]. Nothing is shared between
/// instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    arena: Arena,
    labels: Vec<String>,
}

impl Matrix {
    /// Creates an empty matrix holding only the header-ring root.
    pub fn new() -> Matrix {
        let mut arena = Arena::new();
        let root = arena.alloc();
        debug_assert_eq!(root, ROOT);
        Matrix {
            arena,
            labels: Vec::new(),
        }
    }

    /// Adds a required column and links it at the tail of the header
    /// ring. All columns must be added before the first row.
    pub fn add_column<S: Into<String>>(&mut self, label: S) -> NodeId {
        let column = self.alloc_column(label);
        self.arena.insert_left(ROOT, column);
        column
    }

    /// Adds a column that stays detached from the header ring: its
    /// rows still conflict with each other, but the column itself
    /// never needs to be covered.
    pub fn add_detached_column<S: Into<String>>(&mut self, label: S) -> NodeId {
        self.alloc_column(label)
    }

    fn alloc_column<S: Into<String>>(&mut self, label: S) -> NodeId {
        debug_assert_eq!(
            self.arena.len(),
            self.labels.len() + 1,
            "all columns must be added before the first row"
        );
        let column = self.arena.alloc();
        self.labels.push(label.into());
        column
    }

    /// Adds one row with a cell in each of the given columns. The
    /// cells form a horizontal ring in argument order and each lands
    /// at the tail of its column's vertical ring.
    pub fn add_row(&mut self, columns: &[NodeId]) {
        let mut first = None;
        for &column in columns {
            let cell = self.arena.alloc();
            self.arena[cell].column = column;
            self.arena.insert_above(column, cell);
            self.arena[column].size += 1;
            match first {
                None => first = Some(cell),
                Some(first) => self.arena.insert_left(first, cell),
            }
        }
    }

    /// The label a column was created with.
    pub fn label(&self, column: NodeId) -> &str {
        &self.labels[column.0 - 1]
    }

    /// Live cell count of a column's vertical ring.
    pub fn size(&self, column: NodeId) -> usize {
        self.arena[column].size
    }

    /// True once every required column has been covered.
    pub fn is_covered(&self) -> bool {
        self.arena[ROOT].right == ROOT
    }

    /// Number of columns currently linked into the header ring.
    pub fn live_column_count(&self) -> usize {
        let mut count = 0;
        let mut column = self.arena[ROOT].right;
        while column != ROOT {
            count += 1;
            column = self.arena[column].right;
        }
        count
    }

    /// Unlinks every zero-size column from the header ring. Applied
    /// once after construction, uniformly to whatever the ring holds.
    pub fn prune_empty_columns(&mut self) {
        let mut column = self.arena[ROOT].right;
        while column != ROOT {
            let next = self.arena[column].right;
            if self.arena[column].size == 0 {
                self.arena.unlink_from_row(column);
            }
            column = next;
        }
    }

    /// The live column with the fewest cells, ties broken by ring
    /// order from the root. `None` once the ring is empty.
    pub(crate) fn smallest_column(&self) -> Option<NodeId> {
        let mut smallest = None;
        let mut smallest_size = usize::MAX;
        let mut column = self.arena[ROOT].right;
        while column != ROOT {
            if self.arena[column].size < smallest_size {
                smallest = Some(column);
                smallest_size = self.arena[column].size;
            }
            column = self.arena[column].right;
        }
        smallest
    }

    /// Covers `column`: unlinks it from the header ring, then walks
    /// its rows top to bottom, splicing every other cell of each row
    /// out of that cell's own column and decrementing the count
    /// there.
    pub fn cover(&mut self, column: NodeId) {
        self.arena.unlink_from_row(column);
        let mut row = self.arena[column].down;
        while row != column {
            let mut cell = self.arena[row].right;
            while cell != row {
                self.arena.unlink_from_column(cell);
                let owner = self.arena[cell].column;
                self.arena[owner].size -= 1;
                cell = self.arena[cell].right;
            }
            row = self.arena[row].down;
        }
    }

    /// Exact inverse of [`Matrix::cover`]: walks bottom to top and
    /// right to left, relinking cells in the reverse of the order
    /// cover removed them, then relinks the column header. The
    /// traversal direction is load-bearing, not a style choice.
    pub fn uncover(&mut self, column: NodeId) {
        let mut row = self.arena[column].up;
        while row != column {
            let mut cell = self.arena[row].left;
            while cell != row {
                self.arena.relink_into_column(cell);
                let owner = self.arena[cell].column;
                self.arena[owner].size += 1;
                cell = self.arena[cell].left;
            }
            row = self.arena[row].up;
        }
        self.arena.relink_into_row(column);
    }

    /// The row's column labels, space-joined, starting at `cell`'s
    /// own column and following the row ring rightward.
    pub(crate) fn row_signature(&self, cell: NodeId) -> String {
        let mut signature = self.label(self.arena[cell].column).to_owned();
        let mut peer = self.arena[cell].right;
        while peer != cell {
            signature.push(' ');
            signature.push_str(self.label(self.arena[peer].column));
            peer = self.arena[peer].right;
        }
        signature
    }

    pub(crate) fn right_of(&self, node: NodeId) -> NodeId {
        self.arena[node].right
    }

    pub(crate) fn left_of(&self, node: NodeId) -> NodeId {
        self.arena[node].left
    }

    pub(crate) fn down_of(&self, node: NodeId) -> NodeId {
        self.arena[node].down
    }

    pub(crate) fn column_of(&self, node: NodeId) -> NodeId {
        self.arena[node].column
    }
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_column_matrix() -> (Matrix, Vec<NodeId>) {
        let mut matrix = Matrix::new();
        let columns: Vec<NodeId> = ["x", "y", "z"]
            .iter()
            .map(|label| matrix.add_column(*label))
            .collect();
        matrix.add_row(&[columns[0], columns[2]]);
        matrix.add_row(&[columns[1]]);
        matrix.add_row(&[columns[0], columns[1], columns[2]]);
        (matrix, columns)
    }

    #[test]
    fn sizes_track_added_rows() {
        let (matrix, columns) = three_column_matrix();
        assert_eq!(matrix.size(columns[0]), 2);
        assert_eq!(matrix.size(columns[1]), 2);
        assert_eq!(matrix.size(columns[2]), 2);
        assert_eq!(matrix.live_column_count(), 3);
    }

    #[test]
    fn cover_then_uncover_restores_pointer_identity() {
        let (mut matrix, columns) = three_column_matrix();
        let before = matrix.clone();
        for &column in &columns {
            matrix.cover(column);
            matrix.uncover(column);
            assert_eq!(matrix, before, "column {}", matrix.label(column));
        }
    }

    #[test]
    fn nested_cover_uncover_in_reverse_order_restores_identity() {
        let (mut matrix, columns) = three_column_matrix();
        let before = matrix.clone();
        matrix.cover(columns[0]);
        matrix.cover(columns[1]);
        matrix.uncover(columns[1]);
        matrix.uncover(columns[0]);
        assert_eq!(matrix, before);
    }

    #[test]
    fn cover_removes_conflicting_rows_from_sibling_columns() {
        let (mut matrix, columns) = three_column_matrix();
        matrix.cover(columns[0]);
        // rows 0 and 2 hang under x, so y loses its cell of row 2
        // and z loses both of its cells
        assert_eq!(matrix.size(columns[1]), 1);
        assert_eq!(matrix.size(columns[2]), 0);
        assert_eq!(matrix.live_column_count(), 2);
    }

    #[test]
    fn prune_unlinks_only_empty_columns() {
        let mut matrix = Matrix::new();
        let used = matrix.add_column("used");
        let empty = matrix.add_column("empty");
        matrix.add_row(&[used]);
        matrix.prune_empty_columns();
        assert_eq!(matrix.live_column_count(), 1);
        assert_eq!(matrix.size(used), 1);
        assert_eq!(matrix.size(empty), 0);
    }

    #[test]
    fn detached_columns_never_join_the_header_ring() {
        let mut matrix = Matrix::new();
        let linked = matrix.add_column("linked");
        let detached = matrix.add_detached_column("detached");
        matrix.add_row(&[linked, detached]);
        assert_eq!(matrix.live_column_count(), 1);
        assert_eq!(matrix.size(detached), 1);
    }
}
