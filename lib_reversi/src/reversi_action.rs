use crate::console_view::Glyphs;
use crate::ReversiPiece;
use lib_boardgame::{GameMove, PlayerColor};
use std::fmt;

/// A placement as a player entered it. The coordinates are signed and unchecked;
/// the board validates them when the action is applied.
#[derive(Copy, Clone, PartialEq)]
pub struct ReversiAction {
    pub row: i64,
    pub col: i64,
    pub piece: ReversiPiece,
}

impl ReversiAction {
    pub fn new(row: i64, col: i64, piece: ReversiPiece) -> Self {
        Self { row, col, piece }
    }

    /// Builds an action from a typed token character, if the token names a player.
    pub fn from_token(row: i64, col: i64, token: char, glyphs: &Glyphs) -> Option<Self> {
        glyphs.piece_for(token).map(|piece| Self::new(row, col, piece))
    }
}

impl GameMove for ReversiAction {
    fn player(self) -> PlayerColor {
        self.piece.into()
    }
}

impl fmt::Debug for ReversiAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} at ({}, {})", self.piece, self.row, self.col)
    }
}

impl fmt::Display for ReversiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_maps_glyphs_to_pieces() {
        let glyphs = Glyphs::default();

        assert_eq!(
            Some(ReversiAction::new(3, 4, ReversiPiece::Black)),
            ReversiAction::from_token(3, 4, 'x', &glyphs)
        );
        assert_eq!(
            Some(ReversiAction::new(0, -2, ReversiPiece::White)),
            ReversiAction::from_token(0, -2, 'o', &glyphs)
        );
        assert_eq!(None, ReversiAction::from_token(0, 0, 'z', &glyphs));
        assert_eq!(None, ReversiAction::from_token(0, 0, '.', &glyphs));
    }

    #[test]
    fn action_reports_its_player() {
        assert_eq!(PlayerColor::White, ReversiAction::new(1, 1, ReversiPiece::White).player());
        assert_eq!("Black at (2, 5)", ReversiAction::new(2, 5, ReversiPiece::Black).to_string());
    }
}
