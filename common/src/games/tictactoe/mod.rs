mod board;
mod game_state;
mod search;
mod types;
mod win_detector;

pub use board::{Board, PlaceError};
pub use game_state::{Player, PlayerKind, TicTacToeGameState};
pub use search::{
    DRAW_SCORE, LOSS_SCORE, Roles, ScoredMove, SearchError, SearchReport, WIN_SCORE, analyze,
    best_move, minimax, minimax_with_roles, score_moves,
};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Cell, FirstPlayerMode, Mark, Outcome, Position, WinningLine,
};
pub use win_detector::LINES;
