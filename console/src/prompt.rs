use std::io::{BufRead, Write};

use tictactoe_common::games::tictactoe::{Board, Position};

use crate::config::validate_name;
use crate::runner::GameMode;

pub const CELL_RETRY_MESSAGE: &str = "Please try again, you must enter a number from 1-9";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
    }

    pub fn show_board(&mut self, board: &Board) -> Result<(), String> {
        for row in board.render() {
            self.say(&row)?;
        }
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String, String> {
        write!(self.output, "{}", prompt).map_err(|e| format!("Failed to write output: {}", e))?;
        self.output
            .flush()
            .map_err(|e| format!("Failed to flush output: {}", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            return Err("Input closed".to_string());
        }
        Ok(line.trim().to_string())
    }

    /// `None` means the player chose to quit.
    pub fn ask_menu(&mut self) -> Result<Option<GameMode>, String> {
        self.say("\nWelcome to Tic Tac Toe! Please select what you would like to play.")?;
        let answer = self.ask(
            "1. Single player against AI.\n2. 2 player with another person.\n3. Quit.\n",
        )?;
        Ok(match answer.as_str() {
            "1" => Some(GameMode::Single),
            "2" => Some(GameMode::TwoPlayer),
            _ => None,
        })
    }

    pub fn ask_name(&mut self, question: &str, default: Option<&str>) -> Result<String, String> {
        let prompt = match default {
            Some(name) => format!("{} [{}] ", question, name),
            None => format!("{} ", question),
        };

        loop {
            let answer = self.ask(&prompt)?;
            if answer.is_empty()
                && let Some(name) = default
            {
                return Ok(name.to_string());
            }
            match validate_name(&answer) {
                Ok(()) => return Ok(answer),
                Err(e) => self.say(&e)?,
            }
        }
    }

    /// Keeps asking until the answer names an open cell on `board`.
    pub fn ask_cell(&mut self, board: &Board) -> Result<Position, String> {
        loop {
            let answer = self.ask("Choose where you would like to make your play (1 - 9): ")?;
            let Some(pos) = answer
                .parse::<usize>()
                .ok()
                .and_then(Position::from_cell_number)
            else {
                self.say(CELL_RETRY_MESSAGE)?;
                continue;
            };

            if board.is_open(pos) {
                return Ok(pos);
            }
            self.say("That spot is already taken.")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use tictactoe_common::games::tictactoe::Mark;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(prompter("1\n").ask_menu(), Ok(Some(GameMode::Single)));
        assert_eq!(prompter("2\n").ask_menu(), Ok(Some(GameMode::TwoPlayer)));
        assert_eq!(prompter("3\n").ask_menu(), Ok(None));
        assert_eq!(prompter("banana\n").ask_menu(), Ok(None));
    }

    #[test]
    fn test_cell_prompt_retries_until_valid() {
        let mut p = prompter("abc\n0\n10\n5\n");
        assert_eq!(p.ask_cell(&Board::new()), Ok(Position::new(1, 1)));
        let text = output(p);
        assert_eq!(text.matches(CELL_RETRY_MESSAGE).count(), 3);
    }

    #[test]
    fn test_cell_prompt_skips_taken_cells() {
        let mut board = Board::new();
        board.place(Mark::X, Position::new(0, 0)).unwrap();
        let mut p = prompter("1\n2\n");
        assert_eq!(p.ask_cell(&board), Ok(Position::new(0, 1)));
        assert!(output(p).contains("already taken"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut p = prompter("");
        assert_eq!(p.ask_cell(&Board::new()), Err("Input closed".to_string()));
    }

    #[test]
    fn test_name_prompt_trims_and_rejects_blank() {
        let mut p = prompter("   \n  Josh  \n");
        assert_eq!(p.ask_name("What is your name?", None), Ok("Josh".to_string()));
        assert!(output(p).contains("cannot be blank"));
    }

    #[test]
    fn test_name_prompt_uses_default_on_blank() {
        let mut p = prompter("\n");
        assert_eq!(
            p.ask_name("What is your name?", Some("Ann")),
            Ok("Ann".to_string())
        );
        assert!(output(p).contains("What is your name? [Ann] "));
    }

    #[test]
    fn test_show_board() {
        let mut p = prompter("");
        p.show_board(&"X-O/---/--X".parse().unwrap()).unwrap();
        assert_eq!(output(p), "X - O\n- - -\n- - X\n");
    }
}
