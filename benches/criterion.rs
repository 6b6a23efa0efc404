#[macro_use]
extern crate criterion;
use criterion::Criterion;
use dlx_puzzles::{queens, sudoku};

const PUZZLE: [&str; 9] = [
    "..3.2.6..",
    "9..3.5..1",
    "..18.64..",
    "..81.29..",
    "7.......8",
    "..67.82..",
    "..26.95..",
    "8..2.3..9",
    "..5.1.3..",
];

fn eight_queens_all_solutions(c: &mut Criterion) {
    c.bench_function("eight_queens_all_solutions", |b| {
        b.iter(|| queens::solve(8, false))
    });
}

fn eight_queens_step_trace(c: &mut Criterion) {
    c.bench_function("eight_queens_step_trace", |b| {
        b.iter(|| queens::solve(8, true))
    });
}

fn sudoku_solve(c: &mut Criterion) {
    let grid = sudoku::Grid::from_lines(&PUZZLE).unwrap();
    c.bench_function("sudoku_solve", |b| b.iter(|| sudoku::solve(&grid, false)));
}

fn six_queens_naive_reference(c: &mut Criterion) {
    use dlx_puzzles::naive;
    c.bench_function("six_queens_naive_reference", |b| {
        b.iter(|| naive::solve(6, false))
    });
}

criterion_group!(
    benches,
    eight_queens_all_solutions,
    eight_queens_step_trace,
    sudoku_solve,
    six_queens_naive_reference
);
criterion_main!(benches);
