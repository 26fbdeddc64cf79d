use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, Cell, Mark, Outcome, Position, WinningLine};
use super::win_detector::{Grid, check_win_with_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    OutOfBounds(Position),
    CellOccupied(Position),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfBounds(pos) => write!(f, "Position {} is out of bounds", pos),
            PlaceError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
        }
    }
}

impl std::error::Error for PlaceError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: Grid,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn place(&mut self, mark: Mark, pos: Position) -> Result<(), PlaceError> {
        match self.cell(pos) {
            None => Err(PlaceError::OutOfBounds(pos)),
            Some(Cell::Empty) => {
                self.cells[pos.row][pos.col] = Cell::from(mark);
                Ok(())
            }
            Some(_) => Err(PlaceError::CellOccupied(pos)),
        }
    }

    /// Speculative placement used by the search; the cell must be open.
    pub(crate) fn fill(&mut self, mark: Mark, pos: Position) {
        debug_assert!(self.is_open(pos));
        self.cells[pos.row][pos.col] = Cell::from(mark);
    }

    /// Reverts a speculative placement. Only the search calls this, and only
    /// on cells it has just filled.
    pub(crate) fn clear(&mut self, pos: Position) {
        debug_assert!(!self.cells[pos.row][pos.col].is_empty());
        self.cells[pos.row][pos.col] = Cell::Empty;
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    pub fn evaluate(&self) -> Outcome {
        if let Some(line) = self.winning_line() {
            return Outcome::won_by(line.mark);
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::NoWinnerYet
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn available_moves(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_open(pos)).collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == Cell::from(mark))
            .count()
    }

    pub fn render(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses three rows of `X`, `O` and `-` (or `.`), separated by `/` or
/// newlines. Whitespace inside a row is ignored.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()));
        }

        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(format!(
                    "Row {} must have {} cells, got {}",
                    r + 1,
                    BOARD_SIZE,
                    symbols.len()
                ));
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                board.cells[r][c] = match symbol.to_ascii_uppercase() {
                    'X' => Cell::X,
                    'O' => Cell::O,
                    '-' | '.' => Cell::Empty,
                    other => return Err(format!("Unknown cell symbol '{}'", other)),
                };
            }
        }
        Ok(board)
    }
}
