use std::fmt;

pub mod game_runner;
pub mod test_impls;

pub use game_runner::{GameOutcome, GeneralGameRunner, RunnerOptions};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    /// The first player ("Player 1").
    Black,
    /// The second player ("Player 2").
    White,
}

impl PlayerColor {
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::Black => PlayerColor::White,
            PlayerColor::White => PlayerColor::Black,
        }
    }

    /// The 1-based number players see in prompts.
    pub fn number(self) -> u8 {
        match self {
            PlayerColor::Black => 1,
            PlayerColor::White => 2,
        }
    }
}

impl Default for PlayerColor {
    fn default() -> Self {
        PlayerColor::Black
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Draw,
    WhiteWins,
    BlackWins,
}

impl GameResult {
    /// Decides the result from the two players' scores: the strictly larger score wins.
    pub fn from_scores(black_score: usize, white_score: usize) -> Self {
        if black_score > white_score {
            GameResult::BlackWins
        } else if white_score > black_score {
            GameResult::WhiteWins
        } else {
            GameResult::Draw
        }
    }

    pub fn winner(self) -> Option<PlayerColor> {
        match self {
            GameResult::BlackWins => Some(PlayerColor::Black),
            GameResult::WhiteWins => Some(PlayerColor::White),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "Player {} is the Winner", player.number()),
            None => write!(f, "It's a Draw"),
        }
    }
}

/// Describes a move a player can make in a game.
/// I.e., in Reversi, a move could be an 'x' token at position (3,7).
pub trait GameMove: Copy + fmt::Debug + PartialEq {
    /// The player this move is played for.
    fn player(self) -> PlayerColor;
}

/// Read-only access to a rectangular grid of pieces.
///
/// This is everything a renderer gets to see; it exposes no mutation.
pub trait BoardView {
    type Piece: Copy + PartialEq;

    fn rows(&self) -> usize;

    fn columns(&self) -> usize;

    /// The piece at `(row, col)`, or None if that cell is empty.
    /// Positions outside the grid also give None; check [`BoardView::contains`] first
    /// when the two cases must be told apart.
    fn piece_at(&self, row: usize, col: usize) -> Option<Self::Piece>;

    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.columns()
    }
}

/// Describes a complete state of some game: the board position and
/// whatever else the rules need. Turn order is not part of it; every move
/// says which player it is for.
pub trait GameState: BoardView {
    type Move: GameMove;
    type Error: std::error::Error;

    /// Apply the given move (or 'action') to this state.
    /// On error the state must be left exactly as it was.
    fn apply_move(&mut self, action: Self::Move) -> Result<(), Self::Error>;

    /// Returns the score of the given player in this state.
    fn player_score(&self, player: PlayerColor) -> usize;

    /// True if the game has reached its terminal state.
    fn is_game_over(&self) -> bool;

    /// True if `player` has at least one move that `apply_move` would accept.
    fn has_legal_move(&self, player: PlayerColor) -> bool;

    /// The result if the game were scored right now.
    fn game_result(&self) -> GameResult {
        GameResult::from_scores(
            self.player_score(PlayerColor::Black),
            self.player_score(PlayerColor::White),
        )
    }
}

/// What an agent hands back when asked for a move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AgentAction<M> {
    Play(M),
    /// The agent wants to end the game early.
    Quit,
}

/// A trait representing the functionality of a GameAgent.
/// Specifically, given a GameState and whose turn it is, a GameAgent must be able to decide a GameMove.
pub trait GameAgent<TState: GameState> {
    fn pick_move(&mut self, state: &TState, turn: PlayerColor) -> AgentAction<TState::Move>;
}
