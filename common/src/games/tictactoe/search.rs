use std::fmt;

use super::board::Board;
use super::types::{Mark, Outcome, Position};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -WIN_SCORE;
pub const DRAW_SCORE: i32 = 0;

/// Which mark plays the maximizing layers and which the minimizing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    pub maximizer: Mark,
    pub minimizer: Mark,
}

impl Roles {
    pub fn for_mover(mover: Mark) -> Self {
        Self {
            maximizer: mover,
            minimizer: mover.opponent(),
        }
    }

    pub fn mark_for(&self, maximizing: bool) -> Mark {
        if maximizing {
            self.maximizer
        } else {
            self.minimizer
        }
    }

    pub fn terminal_score(&self, outcome: Outcome) -> i32 {
        match outcome.winner() {
            Some(mark) if mark == self.maximizer => WIN_SCORE,
            Some(_) => LOSS_SCORE,
            None => DRAW_SCORE,
        }
    }
}

/// The bot plays O and maximizes; X is always the minimizer.
impl Default for Roles {
    fn default() -> Self {
        Self::for_mover(Mark::O)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    TerminalBoard(Outcome),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::TerminalBoard(outcome) => {
                write!(f, "Cannot search a finished board ({})", outcome)
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub mover: Mark,
    pub best: ScoredMove,
    /// Root moves in row-major order.
    pub moves: Vec<ScoredMove>,
    pub nodes: u64,
    pub max_depth: usize,
}

pub fn best_move(board: &Board, mover: Mark) -> Result<Position, SearchError> {
    analyze(board, mover).map(|report| report.best.position)
}

pub fn score_moves(board: &Board, mover: Mark) -> Result<Vec<ScoredMove>, SearchError> {
    analyze(board, mover).map(|report| report.moves)
}

/// Scores every open cell for `mover` and picks the first one with the
/// highest score. The caller's board is never touched.
pub fn analyze(board: &Board, mover: Mark) -> Result<SearchReport, SearchError> {
    let outcome = board.evaluate();
    if outcome.is_terminal() {
        return Err(SearchError::TerminalBoard(outcome));
    }

    let mut board = *board;
    let mut search = Search::new(Roles::for_mover(mover));
    let mut moves = Vec::new();
    let mut best: Option<ScoredMove> = None;

    for position in board.available_moves() {
        let score = with_mark(&mut board, mover, position, |board| {
            search.minimax(board, 0, false)
        });
        let scored = ScoredMove { position, score };
        moves.push(scored);

        if best.is_none_or(|current| score > current.score) {
            best = Some(scored);
        }
    }

    // A non-terminal board always has at least one open cell.
    let best = best.ok_or(SearchError::TerminalBoard(outcome))?;

    Ok(SearchReport {
        mover,
        best,
        moves,
        nodes: search.nodes,
        max_depth: search.max_depth,
    })
}

/// Plain minimax with the default roles (O maximizes, X minimizes).
///
/// `depth` is carried through the recursion but does not change the score.
/// The board is returned exactly as it was passed in.
pub fn minimax(board: &mut Board, depth: usize, maximizing: bool) -> i32 {
    minimax_with_roles(board, Roles::default(), depth, maximizing)
}

pub fn minimax_with_roles(board: &mut Board, roles: Roles, depth: usize, maximizing: bool) -> i32 {
    Search::new(roles).minimax(board, depth, maximizing)
}

struct Search {
    roles: Roles,
    nodes: u64,
    max_depth: usize,
}

impl Search {
    fn new(roles: Roles) -> Self {
        Self {
            roles,
            nodes: 0,
            max_depth: 0,
        }
    }

    fn minimax(&mut self, board: &mut Board, depth: usize, maximizing: bool) -> i32 {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);

        // A full board evaluates to Draw unless it holds a line, so this also
        // covers the "board full" terminal case.
        let outcome = board.evaluate();
        if outcome.is_terminal() {
            return self.roles.terminal_score(outcome);
        }

        let mark = self.roles.mark_for(maximizing);
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for position in board.available_moves() {
            let score = with_mark(board, mark, position, |board| {
                self.minimax(board, depth + 1, !maximizing)
            });

            if maximizing {
                if score > best_score {
                    best_score = score;
                }
            } else if score < best_score {
                best_score = score;
            }
        }

        best_score
    }
}

/// Places `mark` on an open cell, runs `f` and clears the cell again.
fn with_mark<T>(
    board: &mut Board,
    mark: Mark,
    position: Position,
    f: impl FnOnce(&mut Board) -> T,
) -> T {
    board.fill(mark, position);
    let result = f(board);
    board.clear(position);
    result
}
