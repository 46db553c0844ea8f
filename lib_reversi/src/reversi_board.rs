use crate::error::{BoardError, DimensionsError, Rejection};
use crate::util::BoardDirectionIter;
use crate::{BoardPosition, Direction, ReversiAction, ReversiPiece, DIRECTIONS};
use lib_boardgame::{BoardView, GameResult, GameState, PlayerColor};
use lib_printer::info;
use std::convert::TryFrom;

/// The positions flipped by one accepted placement.
pub type FlipSet = Vec<BoardPosition>;

/// The most cells a board may have.
pub const MAX_CELLS: usize = 1 << 20;

/// A Reversi board of any even size.
///
/// The board knows the rules of placement but not whose turn it is: every
/// placement names the piece being played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReversiBoard {
    rows: usize,
    columns: usize,

    /// Row-major cells; None is an empty cell.
    cells: Vec<Option<ReversiPiece>>,

    /// The count of white pieces on the board.
    white_pieces_count: usize,

    /// The count of black pieces on the board.
    black_pieces_count: usize,
}

impl ReversiBoard {
    /// Builds a `rows x columns` board with the four starting pieces in the middle:
    /// Black on the main diagonal of the central 2x2 block, White on the other.
    pub fn new(rows: usize, columns: usize) -> Result<Self, DimensionsError> {
        let valid = |n: usize| n >= 2 && n % 2 == 0;
        let cell_count = match rows.checked_mul(columns) {
            Some(n) if n <= MAX_CELLS && valid(rows) && valid(columns) => n,
            _ => return Err(DimensionsError { rows, columns }),
        };

        let mut board = ReversiBoard {
            rows,
            columns,
            cells: vec![None; cell_count],
            white_pieces_count: 0,
            black_pieces_count: 0,
        };

        let (mid_row, mid_col) = (rows / 2, columns / 2);

        board.set_piece(BoardPosition::new(mid_row - 1, mid_col - 1), Some(ReversiPiece::Black));
        board.set_piece(BoardPosition::new(mid_row, mid_col), Some(ReversiPiece::Black));
        board.set_piece(BoardPosition::new(mid_row, mid_col - 1), Some(ReversiPiece::White));
        board.set_piece(BoardPosition::new(mid_row - 1, mid_col), Some(ReversiPiece::White));

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, position: BoardPosition) -> bool {
        position.row < self.rows && position.col < self.columns
    }

    /// Checks signed coordinates, as typed by a player, against the board's extent.
    pub fn position(&self, row: i64, col: i64) -> Result<BoardPosition, BoardError> {
        let out_of_bounds = || BoardError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            columns: self.columns,
        };

        let row_index = usize::try_from(row).map_err(|_| out_of_bounds())?;
        let col_index = usize::try_from(col).map_err(|_| out_of_bounds())?;
        let position = BoardPosition::new(row_index, col_index);

        if self.contains(position) {
            Ok(position)
        } else {
            Err(out_of_bounds())
        }
    }

    fn check_bounds(&self, position: BoardPosition) -> Result<(), BoardError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row: position.row as i64,
                col: position.col as i64,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    fn index(&self, position: BoardPosition) -> usize {
        position.row * self.columns + position.col
    }

    /// The piece at a position, or None if the cell is empty.
    pub fn get_piece(&self, position: BoardPosition) -> Result<Option<ReversiPiece>, BoardError> {
        self.check_bounds(position)?;

        Ok(self.cells[self.index(position)])
    }

    /// Set the piece at the coordinates to the given piece. The position must be in bounds.
    fn set_piece(&mut self, position: BoardPosition, piece: Option<ReversiPiece>) {
        let index = self.index(position);
        let existing = self.cells[index];

        match existing {
            Some(ReversiPiece::White) => self.white_pieces_count -= 1,
            Some(ReversiPiece::Black) => self.black_pieces_count -= 1,
            None => {}
        };

        match piece {
            Some(ReversiPiece::White) => self.white_pieces_count += 1,
            Some(ReversiPiece::Black) => self.black_pieces_count += 1,
            None => {}
        };

        self.cells[index] = piece;
    }

    /// A count of how many pieces of one color are on the board.
    pub fn piece_count(&self, piece: ReversiPiece) -> usize {
        match piece {
            ReversiPiece::White => self.white_pieces_count,
            ReversiPiece::Black => self.black_pieces_count,
        }
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.white_pieces_count - self.black_pieces_count
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (BoardPosition, Option<ReversiPiece>)> + '_ {
        let columns = self.columns;

        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &piece)| (BoardPosition::new(i / columns, i % columns), piece))
    }

    fn traverse_from(&self, origin: BoardPosition, direction: Direction) -> BoardDirectionIter {
        BoardDirectionIter::new(origin, direction, self.rows, self.columns)
    }

    /// Given a position on the board, find its sibling piece in a given direction.
    ///
    /// A sibling piece is a piece of the same color that, combined with a piece
    /// at the origin, traps one or more enemies in a straight line.
    ///
    /// Examples:
    ///    In the below case, the pieces at 'a' and 'b'
    ///    are siblings, since together they surround the 3 enemy pieces.
    ///        X O O O X
    ///        a       b
    ///
    ///    In the below case, 'a' and 'b' are NOT siblings: the gap at 'x'
    ///    stops the run before it reaches 'b'.
    ///        X O _ O X
    ///        a   x   b
    ///
    /// A run that reaches the edge of the board has no sibling either.
    fn find_sibling_piece_pos(
        &self,
        origin: BoardPosition,
        origin_color: ReversiPiece,
        direction: Direction,
    ) -> Option<BoardPosition> {
        for (index, position) in self.traverse_from(origin, direction).enumerate() {
            match self.cells[self.index(position)] {
                None => return None,
                Some(piece) if piece == origin_color => {
                    // Directly adjacent to the origin means nothing was trapped.
                    return if index == 0 { None } else { Some(position) };
                }
                Some(_) => continue,
            }
        }

        None
    }

    /// Every opponent piece that placing `piece` at `origin` would flip, across all directions.
    /// Nothing is mutated; an empty result means the placement flips nothing.
    fn flips_for(&self, origin: BoardPosition, piece: ReversiPiece) -> FlipSet {
        let mut flips = FlipSet::new();

        for &direction in DIRECTIONS.iter() {
            if let Some(sibling) = self.find_sibling_piece_pos(origin, piece, direction) {
                flips.extend(self.traverse_from(origin, direction).take_while(|p| *p != sibling));
            }
        }

        flips
    }

    /// Works out what a placement would flip, without touching the board.
    fn evaluate(&self, position: BoardPosition, piece: ReversiPiece) -> Result<FlipSet, BoardError> {
        self.check_bounds(position)?;

        let illegal = |reason| BoardError::IllegalMove {
            row: position.row,
            col: position.col,
            reason,
        };

        if self.cells[self.index(position)].is_some() {
            return Err(illegal(Rejection::Occupied));
        }

        let flips = self.flips_for(position, piece);
        if flips.is_empty() {
            return Err(illegal(Rejection::NoFlips));
        }

        Ok(flips)
    }

    /// Places `piece` at `position` and flips every opponent run it caps.
    ///
    /// The placement is legal only if at least one run gets flipped. Runs that
    /// end at the edge or at an empty cell are left alone. All directions are
    /// evaluated before anything is written, so a rejected placement leaves the
    /// board exactly as it was.
    ///
    /// Example, placing Black ('X') at '*':
    ///    * O O X      X X X X
    ///    O            X
    ///    O       =>   X
    ///    _            _
    /// Only the row is capped by a Black piece; the column runs into an empty cell.
    pub fn place_piece(&mut self, position: BoardPosition, piece: ReversiPiece) -> Result<FlipSet, BoardError> {
        let flips = match self.evaluate(position, piece) {
            Ok(flips) => flips,
            Err(e) => {
                info!("Invalid Move: {}", e);
                return Err(e);
            }
        };

        self.set_piece(position, Some(piece));
        for &flipped in &flips {
            self.set_piece(flipped, Some(piece));
        }

        info!(
            "Valid Move: {:?} at ({}, {}) flipped {}",
            piece,
            position.row,
            position.col,
            flips.len()
        );

        Ok(flips)
    }

    /// Like [`ReversiBoard::place_piece`], but only reports whether the move was applied.
    pub fn try_place(&mut self, position: BoardPosition, piece: ReversiPiece) -> bool {
        self.place_piece(position, piece).is_ok()
    }

    /// True if `place_piece` would accept this placement.
    pub fn is_legal_move(&self, position: BoardPosition, piece: ReversiPiece) -> bool {
        self.evaluate(position, piece).is_ok()
    }

    /// True if `piece` can be legally placed anywhere on the board.
    pub fn has_legal_move(&self, piece: ReversiPiece) -> bool {
        self.cells()
            .filter(|(_, cell)| cell.is_none())
            .any(|(position, _)| !self.flips_for(position, piece).is_empty())
    }

    /// True if neither player can place a piece.
    pub fn is_blocked(&self) -> bool {
        !self.has_legal_move(ReversiPiece::Black) && !self.has_legal_move(ReversiPiece::White)
    }

    /// The game is over once no empty cell is left.
    /// A board where neither player can move but cells remain empty is not over;
    /// see [`ReversiBoard::is_blocked`].
    pub fn is_game_over(&self) -> bool {
        self.empty_count() == 0
    }

    /// Whoever holds strictly more cells wins; equal counts are a draw.
    pub fn winner(&self) -> GameResult {
        GameResult::from_scores(self.black_pieces_count, self.white_pieces_count)
    }
}

impl BoardView for ReversiBoard {
    type Piece = ReversiPiece;

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn piece_at(&self, row: usize, col: usize) -> Option<ReversiPiece> {
        self.get_piece(BoardPosition::new(row, col)).ok().flatten()
    }
}

impl GameState for ReversiBoard {
    type Move = ReversiAction;
    type Error = BoardError;

    fn apply_move(&mut self, action: ReversiAction) -> Result<(), BoardError> {
        let position = self.position(action.row, action.col)?;
        self.place_piece(position, action.piece)?;

        Ok(())
    }

    fn player_score(&self, player: PlayerColor) -> usize {
        self.piece_count(player.into())
    }

    fn is_game_over(&self) -> bool {
        ReversiBoard::is_game_over(self)
    }

    fn has_legal_move(&self, player: PlayerColor) -> bool {
        ReversiBoard::has_legal_move(self, player.into())
    }

    fn game_result(&self) -> GameResult {
        self.winner()
    }
}
