use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// A board coordinate. `row` and `col` are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Keypad numbering used at the prompt: 1..=9, row-major from the top left.
    pub fn from_cell_number(number: usize) -> Option<Self> {
        if !(1..=CELL_COUNT).contains(&number) {
            return None;
        }
        let index = number - 1;
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn cell_number(&self) -> usize {
        self.row * BOARD_SIZE + self.col + 1
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoWinnerYet,
    XWon,
    OWon,
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::NoWinnerYet | Outcome::Draw => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != Outcome::NoWinnerYet
    }

    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::XWon,
            Mark::O => Outcome::OWon,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoWinnerYet => write!(f, "no winner yet"),
            Outcome::XWon => write!(f, "X won"),
            Outcome::OWon => write!(f, "O won"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Position; BOARD_SIZE],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Position; BOARD_SIZE]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[BOARD_SIZE - 1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Random,
    PlayerOne,
    PlayerTwo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_map_row_major() {
        assert_eq!(Position::from_cell_number(1), Some(Position::new(0, 0)));
        assert_eq!(Position::from_cell_number(3), Some(Position::new(0, 2)));
        assert_eq!(Position::from_cell_number(5), Some(Position::new(1, 1)));
        assert_eq!(Position::from_cell_number(7), Some(Position::new(2, 0)));
        assert_eq!(Position::from_cell_number(9), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_cell_number_out_of_range() {
        assert_eq!(Position::from_cell_number(0), None);
        assert_eq!(Position::from_cell_number(10), None);
    }

    #[test]
    fn test_cell_number_inverse() {
        for pos in Position::all() {
            assert_eq!(Position::from_cell_number(pos.cell_number()), Some(pos));
        }
    }

    #[test]
    fn test_all_positions_row_major() {
        let positions: Vec<Position> = Position::all().collect();
        assert_eq!(positions.len(), CELL_COUNT);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(0, 1));
        assert_eq!(positions[3], Position::new(1, 0));
        assert_eq!(positions[8], Position::new(2, 2));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::XWon.winner(), Some(Mark::X));
        assert_eq!(Outcome::OWon.winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::NoWinnerYet.is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }
}
