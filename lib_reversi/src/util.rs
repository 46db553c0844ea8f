use crate::{BoardPosition, Direction};

/// Walks outward from an origin, one step in a fixed direction at a time,
/// stopping at the edge of a `rows x columns` grid. The origin itself is not yielded.
pub(crate) struct BoardDirectionIter {
    direction: Direction,
    rows: usize,
    columns: usize,

    /// for iteration -- what position are we currently at?
    cursor: BoardPosition,
}

impl BoardDirectionIter {
    pub fn new(origin: BoardPosition, direction: Direction, rows: usize, columns: usize) -> Self {
        debug_assert!(
            direction.col_dir != 0 || direction.row_dir != 0,
            "a direction with no row or column step never moves"
        );

        BoardDirectionIter {
            direction,
            rows,
            columns,
            cursor: origin,
        }
    }
}

fn step(index: usize, delta: isize, limit: usize) -> Option<usize> {
    let next = if delta < 0 {
        index.checked_sub(delta.unsigned_abs())?
    } else {
        index.checked_add(delta as usize)?
    };

    if next < limit {
        Some(next)
    } else {
        None
    }
}

impl Iterator for BoardDirectionIter {
    type Item = BoardPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let next_row = step(self.cursor.row, self.direction.row_dir, self.rows)?;
        let next_col = step(self.cursor.col, self.direction.col_dir, self.columns)?;

        self.cursor = BoardPosition::new(next_row, next_col);

        Some(self.cursor)
    }
}
