use super::types::{BOARD_SIZE, Cell, Position, WinningLine};

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

const fn row(r: usize) -> [Position; BOARD_SIZE] {
    [Position::new(r, 0), Position::new(r, 1), Position::new(r, 2)]
}

const fn column(c: usize) -> [Position; BOARD_SIZE] {
    [Position::new(0, c), Position::new(1, c), Position::new(2, c)]
}

/// All eight lines in detection order: row 0, column 0, row 1, column 1,
/// row 2, column 2, then the main and anti diagonals.
pub const LINES: [[Position; BOARD_SIZE]; 8] = [
    row(0),
    column(0),
    row(1),
    column(1),
    row(2),
    column(2),
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

pub fn check_win_with_line(grid: &Grid) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let mark = grid[line[0].row][line[0].col].mark()?;
        let complete = line[1..]
            .iter()
            .all(|pos| grid[pos.row][pos.col] == Cell::from(mark));
        complete.then(|| WinningLine::new(mark, *line))
    })
}
