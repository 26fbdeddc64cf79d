use std::io::{BufRead, Write};

use clap::ValueEnum;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    DRAW_SCORE, FirstPlayerMode, Mark, Outcome, Player, ScoredMove, TicTacToeGameState,
};
use tictactoe_common::log;

use crate::prompt::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    Single,
    TwoPlayer,
}

pub struct GameOptions {
    pub first_player: FirstPlayerMode,
    pub show_hints: bool,
}

/// Asks for the human names. In single player mode player two is the bot.
pub fn setup_players<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mode: GameMode,
    name: Option<String>,
    default_name: Option<&str>,
) -> Result<(Player, Player), String> {
    let (player_one, player_two) = match mode {
        GameMode::Single => {
            let name = match name {
                Some(name) => name,
                None => prompter.ask_name("What is your name?", default_name)?,
            };
            (Player::human(name, Mark::X), Player::bot(Mark::O))
        }
        GameMode::TwoPlayer => {
            let first = prompter.ask_name("What is the name of the first player?", None)?;
            let second = prompter.ask_name("What is the name of the second player?", None)?;
            (Player::human(first, Mark::X), Player::human(second, Mark::O))
        }
    };

    prompter.say(&format!("\nPlayer 1: {}\t  Symbol: {}", player_one.name, player_one.mark))?;
    prompter.say(&format!("Player 2: {}\t  Symbol: {}\n", player_two.name, player_two.mark))?;
    Ok((player_one, player_two))
}

pub fn run_game<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    player_one: Player,
    player_two: Player,
    options: &GameOptions,
    rng: &mut SessionRng,
) -> Result<Outcome, String> {
    let mut state = TicTacToeGameState::new(player_one, player_two, options.first_player, rng)?;

    prompter.say(&format!("{} goes first!", state.current_player().name))?;
    log!(
        "Game started, seed {}, {} moves first",
        rng.seed(),
        state.current_player().name
    );

    while !state.is_over() {
        let player = state.current_player().clone();
        prompter.say(&format!("\n{} it is your turn.", player.name))?;
        prompter.show_board(&state.board)?;

        if player.is_bot() {
            let played = state.play_engine_move()?;
            log!(
                "{} ({}) played cell {} with score {}",
                player.name,
                player.mark,
                played.position.cell_number(),
                played.score
            );
        } else {
            if options.show_hints {
                let hints = state.hints()?;
                prompter.say(&format_hints(&hints))?;
            }
            let pos = prompter.ask_cell(&state.board)?;
            state.place_mark(player.mark, pos)?;
            log!("{} ({}) played cell {}", player.name, player.mark, pos.cell_number());
        }
    }

    match state.winner() {
        Some(winner) => {
            let name = winner.name.clone();
            prompter.show_board(&state.board)?;
            prompter.say(&format!("{} has won the game!", name))?;
            log!("{} won", name);
        }
        None => {
            prompter.say("")?;
            prompter.show_board(&state.board)?;
            prompter.say("The game has ended as a draw.")?;
            log!("Game ended in a draw");
        }
    }

    Ok(state.status)
}

fn outlook(score: i32) -> &'static str {
    match score.cmp(&DRAW_SCORE) {
        std::cmp::Ordering::Greater => "win",
        std::cmp::Ordering::Equal => "draw",
        std::cmp::Ordering::Less => "loss",
    }
}

pub fn format_hints(hints: &[ScoredMove]) -> String {
    let cells: Vec<String> = hints
        .iter()
        .map(|hint| format!("{}={}", hint.position.cell_number(), outlook(hint.score)))
        .collect();
    format!("Hints (cell=outcome with best play): {}", cells.join(" "))
}
