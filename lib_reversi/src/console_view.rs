//! Text rendering of a board, for console play.

use crate::ReversiPiece;
use lib_boardgame::BoardView;
use serde::Deserialize;
use std::fmt;

/// The characters used to draw and to type pieces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub player_one: char,
    pub player_two: char,
    pub empty: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            player_one: 'x',
            player_two: 'o',
            empty: '.',
        }
    }
}

impl Glyphs {
    pub fn glyph(&self, cell: Option<ReversiPiece>) -> char {
        match cell {
            Some(ReversiPiece::Black) => self.player_one,
            Some(ReversiPiece::White) => self.player_two,
            None => self.empty,
        }
    }

    /// The piece a typed token stands for. Matching ignores ASCII case.
    pub fn piece_for(&self, token: char) -> Option<ReversiPiece> {
        if token.eq_ignore_ascii_case(&self.player_one) {
            Some(ReversiPiece::Black)
        } else if token.eq_ignore_ascii_case(&self.player_two) {
            Some(ReversiPiece::White)
        } else {
            None
        }
    }
}

/// Draws a board it borrows, so it can never outlive or change it.
pub struct ConsoleView<'a, B> {
    board: &'a B,
    glyphs: Glyphs,
}

impl<'a, B> ConsoleView<'a, B>
where
    B: BoardView<Piece = ReversiPiece>,
{
    pub fn new(board: &'a B, glyphs: Glyphs) -> Self {
        Self { board, glyphs }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<'a, B> fmt::Display for ConsoleView<'a, B>
where
    B: BoardView<Piece = ReversiPiece>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Allocated board of dimension x = {}, y = {}",
            self.board.rows(),
            self.board.columns()
        )?;
        write!(f, "Current Board State:")?;

        for row in 0..self.board.rows() {
            writeln!(f)?;
            for col in 0..self.board.columns() {
                write!(f, "{} ", self.glyphs.glyph(self.board.piece_at(row, col)))?;
            }
        }

        Ok(())
    }
}

/// Describes one cell in words, or says the coordinates are invalid.
pub fn describe_field<B>(board: &B, row: i64, col: i64) -> String
where
    B: BoardView<Piece = ReversiPiece>,
{
    let in_bounds = row >= 0 && col >= 0 && board.contains(row as usize, col as usize);
    if !in_bounds {
        return format!("x: {} y: {} is Invalid", row, col);
    }

    match board.piece_at(row as usize, col as usize) {
        None => format!("x:{} & y:{} is empty", row, col),
        Some(ReversiPiece::Black) => format!("x:{} & y:{} is occupied by Player 1", row, col),
        Some(ReversiPiece::White) => format!("x:{} & y:{} is occupied by Player 2", row, col),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardPosition, ReversiBoard};

    #[test]
    fn renders_opening_board() {
        let board = ReversiBoard::new(4, 4).unwrap();

        let expected = "Allocated board of dimension x = 4, y = 4\n\
                        Current Board State:\n\
                        . . . . \n\
                        . x o . \n\
                        . o x . \n\
                        . . . . ";

        assert_eq!(expected, ConsoleView::new(&board, Glyphs::default()).render());
    }

    #[test]
    fn renders_with_custom_glyphs() {
        let mut board = ReversiBoard::new(2, 4).unwrap();
        let glyphs = Glyphs {
            player_one: 'B',
            player_two: 'W',
            empty: '-',
        };

        assert!(board.try_place(BoardPosition::new(0, 3), ReversiPiece::Black));

        let rendered = ConsoleView::new(&board, glyphs).to_string();
        let rows: Vec<_> = rendered.lines().skip(2).collect();

        assert_eq!(vec!["- B B B ", "- W B - "], rows);
    }

    #[test]
    fn describes_fields() {
        let board = ReversiBoard::new(8, 8).unwrap();

        assert_eq!("x:0 & y:0 is empty", describe_field(&board, 0, 0));
        assert_eq!("x:3 & y:3 is occupied by Player 1", describe_field(&board, 3, 3));
        assert_eq!("x:3 & y:4 is occupied by Player 2", describe_field(&board, 3, 4));
        assert_eq!("x: 8 y: 0 is Invalid", describe_field(&board, 8, 0));
        assert_eq!("x: 2 y: -1 is Invalid", describe_field(&board, 2, -1));
    }

    #[test]
    fn tokens_map_to_pieces() {
        let glyphs = Glyphs::default();

        assert_eq!(Some(ReversiPiece::Black), glyphs.piece_for('X'));
        assert_eq!(Some(ReversiPiece::White), glyphs.piece_for('o'));
        assert_eq!(None, glyphs.piece_for('.'));
        assert_eq!('.', glyphs.glyph(None));
    }
}
