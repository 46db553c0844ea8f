pub mod console_view;
pub mod error;
pub mod reversi_action;
pub mod reversi_board;
mod util;

pub use console_view::{describe_field, ConsoleView, Glyphs};
pub use error::{BoardError, DimensionsError, Rejection};
pub use reversi_action::ReversiAction;
pub use reversi_board::{FlipSet, ReversiBoard, MAX_CELLS};

use lib_boardgame::PlayerColor;

/// When traversing pieces on the board, each direction is a step in rows and a step in columns.
/// A positive step moves towards higher indices, a negative one towards lower indices,
/// and zero stays in the same row or column.
/// Example: `Direction { row_dir: -1, col_dir: 1 }` walks up and to the right.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Direction {
    pub row_dir: isize,
    pub col_dir: isize,
}

const fn dir(row_dir: isize, col_dir: isize) -> Direction {
    Direction { row_dir, col_dir }
}

/// The eight compass directions a placement scans along.
pub(crate) const DIRECTIONS: [Direction; 8] = [
    dir(-1, 0),  // N
    dir(1, 0),   // S
    dir(0, 1),   // E
    dir(0, -1),  // W
    dir(-1, 1),  // NE
    dir(-1, -1), // NW
    dir(1, 1),   // SE
    dir(1, -1),  // SW
];

/// A token on the board. Black belongs to the first player, White to the second.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReversiPiece {
    Black,
    White,
}

impl ReversiPiece {
    pub fn opponent(self) -> Self {
        match self {
            ReversiPiece::Black => ReversiPiece::White,
            ReversiPiece::White => ReversiPiece::Black,
        }
    }
}

impl From<PlayerColor> for ReversiPiece {
    fn from(color: PlayerColor) -> ReversiPiece {
        match color {
            PlayerColor::Black => ReversiPiece::Black,
            PlayerColor::White => ReversiPiece::White,
        }
    }
}

impl From<ReversiPiece> for PlayerColor {
    fn from(piece: ReversiPiece) -> PlayerColor {
        match piece {
            ReversiPiece::Black => PlayerColor::Black,
            ReversiPiece::White => PlayerColor::White,
        }
    }
}

/// A cell on the board, addressed by zero-based row and column.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct BoardPosition {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl BoardPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl From<(usize, usize)> for BoardPosition {
    fn from((row, col): (usize, usize)) -> Self {
        BoardPosition::new(row, col)
    }
}
