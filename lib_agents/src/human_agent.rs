use crate::token_reader::{InputError, TokenReader};
use lib_boardgame::{AgentAction, GameAgent, PlayerColor};
use lib_printer::warn;
use lib_reversi::{describe_field, Glyphs, ReversiAction, ReversiBoard};
use std::io::{BufRead, Write};

/// The row value that ends the game early.
const QUIT_SENTINEL: i64 = -1;

/// A player at the console. Prompts go to `output`, answers come from `input`.
pub struct HumanAgent<R, W> {
    input: TokenReader<R>,
    output: W,
    glyphs: Glyphs,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W, glyphs: Glyphs) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            glyphs,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Reads one whole number, asking again until the input is one.
    fn read_number(&mut self) -> Result<i64, InputError> {
        loop {
            match self.input.next_value::<i64>()? {
                Ok(n) => return Ok(n),
                Err(word) => writeln!(self.output, "'{}' is not a number, please try again:", word)?,
            }
        }
    }

    fn read_positive(&mut self, what: &str) -> Result<usize, InputError> {
        let mut n = self.read_number()?;

        while n <= 0 {
            writeln!(self.output, "Please enter a positive number for no of {}: ", what)?;
            n = self.read_number()?;
        }

        Ok(n as usize)
    }

    /// Asks for the board size until it describes a board that can be built.
    pub fn read_board(&mut self) -> Result<ReversiBoard, InputError> {
        loop {
            writeln!(self.output, "Please enter the size (x,y) of the game:")?;

            let rows = self.read_positive("rows")?;
            let columns = self.read_positive("columns")?;

            match ReversiBoard::new(rows, columns) {
                Ok(board) => return Ok(board),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn prompt_move(&mut self, board: &ReversiBoard, turn: PlayerColor) -> Result<AgentAction<ReversiAction>, InputError> {
        loop {
            writeln!(
                self.output,
                "User can place token from position x-> 0 to {} ,y-> 0 to {}",
                board.rows() - 1,
                board.columns() - 1
            )?;
            writeln!(
                self.output,
                "Tokens for Player 1: '{}' and Player 2: '{}'",
                self.glyphs.player_one, self.glyphs.player_two
            )?;
            writeln!(
                self.output,
                "Player:{} Please enter a position (x,y) and a stone character ({} to end):",
                turn.number(),
                QUIT_SENTINEL
            )?;

            let row = self.read_number()?;
            if row == QUIT_SENTINEL {
                return Ok(AgentAction::Quit);
            }

            let col = self.read_number()?;
            let token = self.input.next_word()?;

            writeln!(self.output, "Token: {} with position: {},{}", token, row, col)?;
            writeln!(self.output, "{}", describe_field(board, row, col))?;

            let mut chars = token.chars();
            let action = match (chars.next(), chars.next()) {
                (Some(c), None) => ReversiAction::from_token(row, col, c, &self.glyphs),
                _ => None,
            };

            match action {
                Some(action) => return Ok(AgentAction::Play(action)),
                None => {
                    self.input.discard_line();
                    writeln!(
                        self.output,
                        "Unknown token '{}', use '{}' or '{}'",
                        token, self.glyphs.player_one, self.glyphs.player_two
                    )?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> GameAgent<ReversiBoard> for HumanAgent<R, W> {
    fn pick_move(&mut self, state: &ReversiBoard, turn: PlayerColor) -> AgentAction<ReversiAction> {
        match self.prompt_move(state, turn) {
            Ok(action) => action,
            Err(e) => {
                warn!("{}; ending the game", e);
                AgentAction::Quit
            }
        }
    }
}
