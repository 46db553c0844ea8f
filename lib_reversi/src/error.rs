use std::fmt;

/// Why a well-formed placement was turned down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The target cell already holds a piece.
    Occupied,
    /// No direction ends in a run of opponent pieces capped by one of the player's own.
    NoFlips,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Occupied => write!(f, "the cell is already occupied"),
            Rejection::NoFlips => write!(f, "no opponent pieces would be flipped"),
        }
    }
}

/// Errors reported by board queries and placements. None of them change the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("x: {row} y: {col} is outside the {rows}x{columns} board")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        columns: usize,
    },

    #[error("invalid move at x: {row} y: {col}: {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: Rejection,
    },
}

/// Board dimensions must both be even and at least 2, so that the
/// starting block sits exactly in the middle, and the board may hold at most
/// [`MAX_CELLS`](crate::reversi_board::MAX_CELLS) cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "cannot build a {rows}x{columns} board: both dimensions must be even and at least 2, \
     with at most {} cells in total",
    crate::reversi_board::MAX_CELLS
)]
pub struct DimensionsError {
    pub rows: usize,
    pub columns: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display() {
        let err = BoardError::OutOfBounds {
            row: -1,
            col: 4,
            rows: 8,
            columns: 8,
        };
        assert_eq!(err.to_string(), "x: -1 y: 4 is outside the 8x8 board");
    }

    #[test]
    fn illegal_move_display() {
        let err = BoardError::IllegalMove {
            row: 0,
            col: 0,
            reason: Rejection::NoFlips,
        };
        assert_eq!(
            err.to_string(),
            "invalid move at x: 0 y: 0: no opponent pieces would be flipped"
        );
    }

    #[test]
    fn dimensions_error_display() {
        let err = DimensionsError { rows: 3, columns: 4 };
        assert_eq!(
            err.to_string(),
            "cannot build a 3x4 board: both dimensions must be even and at least 2, \
             with at most 1048576 cells in total"
        );
    }
}
