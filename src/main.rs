use dlx_puzzles::{queens, sudoku};

fn main() -> Result<(), dlx_puzzles::Error> {
    env_logger::init();

    let solutions = queens::solve(8, false);
    println!("8-queens: {} solutions", solutions.len());
    if let Some(first) = solutions.first() {
        println!("first placement: {}", first.rows().join(", "));
    }

    let grid = sudoku::Grid::from_lines(&[
        "..3.2.6..",
        "9..3.5..1",
        "..18.64..",
        "..81.29..",
        "7.......8",
        "..67.82..",
        "..26.95..",
        "8..2.3..9",
        "..5.1.3..",
    ])?;
    let solutions = sudoku::solve(&grid, false)?;
    println!("\nsudoku: {} solution(s)", solutions.len());
    match solutions.first() {
        Some(solution) => println!("{}", sudoku::apply(&grid, solution)),
        None => println!("no completion exists"),
    }
    Ok(())
}
