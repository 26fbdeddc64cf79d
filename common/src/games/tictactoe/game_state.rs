use crate::games::SessionRng;
use super::board::Board;
use super::search::{ScoredMove, analyze};
use super::types::{FirstPlayerMode, Mark, Outcome, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub mark: Mark,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            kind: PlayerKind::Human,
        }
    }

    pub fn bot(mark: Mark) -> Self {
        Self {
            name: "Bot".to_string(),
            mark,
            kind: PlayerKind::Bot,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }
}

/// One game between player one (X) and player two (O). Either may move first.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub player_x: Player,
    pub player_o: Player,
    pub current_mark: Mark,
    pub status: Outcome,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(
        player_x: Player,
        player_o: Player,
        first_player_mode: FirstPlayerMode,
        rng: &mut SessionRng,
    ) -> Result<Self, String> {
        if player_x.mark != Mark::X || player_o.mark != Mark::O {
            return Err("Player one must play X and player two must play O".to_string());
        }

        let current_mark = match first_player_mode {
            FirstPlayerMode::PlayerOne => Mark::X,
            FirstPlayerMode::PlayerTwo => Mark::O,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        };

        Ok(Self {
            board: Board::new(),
            player_x,
            player_o,
            current_mark,
            status: Outcome::NoWinnerYet,
            last_move: None,
        })
    }

    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current_mark)
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.status.winner().map(|mark| self.player(mark))
    }

    pub fn place_mark(&mut self, mark: Mark, pos: Position) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        self.board.place(mark, pos).map_err(|e| e.to_string())?;
        self.last_move = Some(pos);
        self.status = self.board.evaluate();

        if !self.is_over() {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(())
    }

    /// Lets the engine choose and play the current mover's cell.
    pub fn play_engine_move(&mut self) -> Result<ScoredMove, String> {
        let report = analyze(&self.board, self.current_mark).map_err(|e| e.to_string())?;
        self.place_mark(self.current_mark, report.best.position)?;
        Ok(report.best)
    }

    pub fn hints(&self) -> Result<Vec<ScoredMove>, String> {
        analyze(&self.board, self.current_mark)
            .map(|report| report.moves)
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_state(first: FirstPlayerMode) -> TicTacToeGameState {
        let mut rng = SessionRng::new(42);
        TicTacToeGameState::new(
            Player::human("Alice", Mark::X),
            Player::bot(Mark::O),
            first,
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_pinned_first_player() {
        assert_eq!(create_state(FirstPlayerMode::PlayerOne).current_mark, Mark::X);
        assert_eq!(create_state(FirstPlayerMode::PlayerTwo).current_mark, Mark::O);
    }

    #[test]
    fn test_random_first_player_follows_seed() {
        let a = create_state(FirstPlayerMode::Random).current_mark;
        let b = create_state(FirstPlayerMode::Random).current_mark;
        assert_eq!(a, b);

        let mut rng = SessionRng::new(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let state = TicTacToeGameState::new(
                Player::human("A", Mark::X),
                Player::human("B", Mark::O),
                FirstPlayerMode::Random,
                &mut rng,
            )
            .unwrap();
            seen.insert(state.current_mark);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_players_must_match_marks() {
        let mut rng = SessionRng::new(0);
        let result = TicTacToeGameState::new(
            Player::human("A", Mark::O),
            Player::bot(Mark::O),
            FirstPlayerMode::PlayerOne,
            &mut rng,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = create_state(FirstPlayerMode::PlayerOne);
        state.place_mark(Mark::X, Position::new(1, 1)).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.current_player().name, "Bot");
        assert_eq!(state.last_move, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_place_mark_rejects_wrong_turn() {
        let mut state = create_state(FirstPlayerMode::PlayerOne);
        assert_eq!(
            state.place_mark(Mark::O, Position::new(0, 0)),
            Err("Not your turn".to_string())
        );
    }

    #[test]
    fn test_place_mark_rejects_occupied_cell() {
        let mut state = create_state(FirstPlayerMode::PlayerOne);
        state.place_mark(Mark::X, Position::new(0, 0)).unwrap();
        state.place_mark(Mark::O, Position::new(1, 1)).unwrap();
        assert!(state.place_mark(Mark::X, Position::new(1, 1)).is_err());
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = create_state(FirstPlayerMode::PlayerOne);
        let moves = [
            (Mark::X, Position::new(0, 0)),
            (Mark::O, Position::new(1, 0)),
            (Mark::X, Position::new(0, 1)),
            (Mark::O, Position::new(1, 1)),
            (Mark::X, Position::new(0, 2)),
        ];
        for (mark, pos) in moves {
            state.place_mark(mark, pos).unwrap();
        }
        assert_eq!(state.status, Outcome::XWon);
        assert_eq!(state.winner().unwrap().name, "Alice");
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(
            state.place_mark(Mark::X, Position::new(2, 2)),
            Err("Game is already over".to_string())
        );
    }

    #[test]
    fn test_engine_move_takes_win() {
        let mut state = create_state(FirstPlayerMode::PlayerOne);
        let moves = [
            (Mark::X, Position::new(1, 0)),
            (Mark::O, Position::new(0, 0)),
            (Mark::X, Position::new(1, 1)),
            (Mark::O, Position::new(0, 1)),
            (Mark::X, Position::new(2, 2)),
        ];
        for (mark, pos) in moves {
            state.place_mark(mark, pos).unwrap();
        }
        let played = state.play_engine_move().unwrap();
        assert_eq!(played.position, Position::new(0, 2));
        assert_eq!(state.status, Outcome::OWon);
        assert_eq!(state.winner().unwrap().name, "Bot");
    }

    #[test]
    fn test_engine_games_end_in_draw() {
        let mut state = create_state(FirstPlayerMode::PlayerOne);
        while !state.is_over() {
            state.play_engine_move().unwrap();
        }
        assert_eq!(state.status, Outcome::Draw);
        assert!(state.winner().is_none());
        assert!(state.play_engine_move().is_err());
    }

    #[test]
    fn test_hints_cover_open_cells() {
        let mut state = create_state(FirstPlayerMode::PlayerOne);
        state.place_mark(Mark::X, Position::new(0, 0)).unwrap();
        state.place_mark(Mark::O, Position::new(1, 1)).unwrap();
        let hints = state.hints().unwrap();
        assert_eq!(hints.len(), 7);
        assert!(hints.iter().all(|h| state.board.is_open(h.position)));
    }
}
