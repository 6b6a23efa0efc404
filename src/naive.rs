//! Plain backtracking n-queens solver.
//!
//! Completely independent of the matrix machinery: it filters a list
//! of surviving candidate squares instead of covering columns. Kept
//! as a cross-check for the dancing links engine; the two must agree
//! on the solution set, though not on step counts or ordering.

use crate::solver::Solution;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Candidate {
    rank: usize,
    file: usize,
    asc: usize,
    desc: usize,
}

impl Candidate {
    fn attacks(self, other: Candidate) -> bool {
        self.rank == other.rank
            || self.file == other.file
            || self.asc == other.asc
            || self.desc == other.desc
    }

    fn signature(self) -> String {
        format!("R{} F{} A{} B{}", self.rank, self.file, self.asc, self.desc)
    }
}

/// Solves the `n`×`n` queens board by candidate filtering.
///
/// Returns the complete solutions, or — when `record_steps` is set —
/// the visited partial placements, completes included.
pub fn solve(n: usize, record_steps: bool) -> Vec<Solution> {
    let candidates: Vec<Candidate> = (0..n)
        .flat_map(|rank| {
            (0..n).map(move |file| Candidate {
                rank,
                file,
                asc: rank + file,
                desc: n - 1 - file + rank,
            })
        })
        .collect();

    let mut results = Vec::new();
    let mut placed = Vec::new();
    place(n, &candidates, &mut placed, &mut results, record_steps);
    results
}

fn place(
    n: usize,
    available: &[Candidate],
    placed: &mut Vec<Candidate>,
    results: &mut Vec<Solution>,
    record_steps: bool,
) {
    if record_steps {
        results.push(snapshot(placed));
    }
    if available.is_empty() {
        if placed.len() == n && !record_steps {
            results.push(snapshot(placed));
        }
        return;
    }

    // try each of the first n still-available squares in turn; any
    // solution must use one of them, since the list is rank-major
    let mut rest = available;
    for _ in 0..n.min(available.len()) {
        let next = rest[0];
        let remaining: Vec<Candidate> = rest
            .iter()
            .copied()
            .filter(|&survivor| !next.attacks(survivor))
            .collect();
        placed.push(next);
        place(n, &remaining, placed, results, record_steps);
        placed.pop();
        rest = &rest[1..];
    }
}

fn snapshot(placed: &[Candidate]) -> Solution {
    Solution::new(placed.iter().map(|candidate| candidate.signature()).collect())
}
