//! Candidate winning lines on an NxN board.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, Position};

/// A full-length line: a row, a column, or one of the two diagonals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `r`, left to right.
    Row(usize),
    /// Column `c`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All lines of a `size` x `size` board in scan order: rows, columns,
    /// then the two diagonals.
    ///
    /// ```
    /// use rust_tictactoe::rules::Line;
    ///
    /// assert_eq!(Line::all(3).count(), 8);
    /// assert_eq!(Line::all(5).count(), 12);
    /// ```
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Positions covered by this line on a `size` x `size` board.
    pub fn positions(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(col) => Position::new(i, col),
            Line::Diagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        })
    }

    /// The player holding every slot of this line, if one does.
    #[must_use]
    pub fn owner(self, board: &Board) -> Option<Player> {
        let mut positions = self.positions(board.size());
        let first = board.slot(positions.next()?);
        let player = first.owner()?;

        positions
            .all(|pos| board.slot(pos) == first)
            .then_some(player)
    }
}
