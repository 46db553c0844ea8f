use crate::*;

/// A one-row strip of cells. Any empty cell may be claimed by either player,
/// and the game ends when the strip is full.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestGameState {
    cells: Vec<Option<PlayerColor>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TestMove {
    pub cell: usize,
    pub player: PlayerColor,
}

impl TestMove {
    pub fn new(cell: usize, player: PlayerColor) -> Self {
        Self { cell, player }
    }
}

impl GameMove for TestMove {
    fn player(self) -> PlayerColor {
        self.player
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("cell {} cannot be claimed", .0.cell)]
pub struct TestMoveError(pub TestMove);

impl TestGameState {
    pub fn with_cells(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }
}

impl BoardView for TestGameState {
    type Piece = PlayerColor;

    fn rows(&self) -> usize {
        1
    }

    fn columns(&self) -> usize {
        self.cells.len()
    }

    fn piece_at(&self, row: usize, col: usize) -> Option<PlayerColor> {
        if row != 0 {
            return None;
        }

        self.cells.get(col).copied().flatten()
    }
}

impl GameState for TestGameState {
    type Move = TestMove;
    type Error = TestMoveError;

    fn apply_move(&mut self, action: TestMove) -> Result<(), TestMoveError> {
        match self.cells.get_mut(action.cell) {
            Some(cell) if cell.is_none() => {
                *cell = Some(action.player);
                Ok(())
            }
            _ => Err(TestMoveError(action)),
        }
    }

    fn player_score(&self, player: PlayerColor) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    fn is_game_over(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn has_legal_move(&self, _player: PlayerColor) -> bool {
        !self.is_game_over()
    }
}
