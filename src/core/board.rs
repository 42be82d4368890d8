//! Board model: slots, positions and the NxN grid.
//!
//! ## Board
//!
//! A square grid stored row-major in an `im::Vector`. Placing a mark returns a
//! new board that shares structure with the old one, so search branches can
//! hold their own boards cheaply.
//!
//! ## Text format
//!
//! Boards parse from `/`-separated rows, one character per slot:
//!
//! ```
//! use rust_tictactoe::core::{Board, Position, Slot};
//!
//! let board: Board = "XO./.X./..O".parse().unwrap();
//! assert_eq!(board.size(), 3);
//! assert_eq!(board.get(Position::new(1, 1)), Some(Slot::X));
//! assert_eq!(board.empty_positions().count(), 5);
//! ```

use std::fmt;
use std::str::FromStr;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::GameError;
use super::player::Player;

/// Smallest supported board size.
pub const MIN_BOARD_SIZE: usize = 3;

/// Content of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Slot {
    /// Check if the slot is unmarked.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// The player who marked this slot, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Slot::Empty => None,
            Slot::X => Some(Player::X),
            Slot::O => Some(Player::O),
        }
    }

    fn symbol(self) -> char {
        self.owner().map_or(' ', Player::symbol)
    }
}

impl From<Player> for Slot {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Slot::X,
            Player::O => Slot::O,
        }
    }
}

/// A `(row, col)` coordinate.
///
/// Only meaningful relative to a board: `Board::contains` tells whether it
/// lies inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of slots.
///
/// Serializes as its row notation, e.g. `"XO./.X./..O"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    size: usize,
    slots: Vector<Slot>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// Fails with `InvalidSize` when `size` is below [`MIN_BOARD_SIZE`], and
    /// with `BoardTooLarge` when `size * size` overflows.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidSize(size));
        }
        let len = size
            .checked_mul(size)
            .ok_or(GameError::BoardTooLarge(size))?;

        Ok(Self {
            size,
            slots: std::iter::repeat(Slot::Empty).take(len).collect(),
        })
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position lies on this board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get the slot at a position, or `None` if it lies outside the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Slot> {
        self.contains(pos).then(|| self.slots[self.index(pos)])
    }

    /// Slot at a position known to be on the board.
    pub(crate) fn slot(&self, pos: Position) -> Slot {
        self.slots[self.index(pos)]
    }

    /// Return a copy of this board with one slot replaced.
    ///
    /// The position must lie on the board; callers validate first.
    #[must_use]
    pub(crate) fn with_slot(&self, pos: Position, slot: Slot) -> Self {
        Self {
            size: self.size,
            slots: self.slots.update(self.index(pos), slot),
        }
    }

    /// Check if every slot is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.slots.iter().any(|slot| slot.is_empty())
    }

    /// Iterate over unmarked positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_empty())
            .map(move |(i, _)| Position::new(i / size, i % size))
    }

    /// Iterate over rows, each collected into a `Vec` of slots.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Slot>> + '_ {
        (0..self.size).map(move |row| {
            (0..self.size)
                .map(|col| self.slot(Position::new(row, col)))
                .collect()
        })
    }

    /// Count marks placed by a player.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.owner() == Some(player))
            .count()
    }

    /// Row notation accepted by `FromStr`: rows joined by `/`, `.` for empty.
    #[must_use]
    pub fn notation(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|slot| slot.owner().map_or('.', Player::symbol))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

/// Error parsing a board from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    /// The parsed board would be smaller than the minimum size.
    #[error(transparent)]
    InvalidSize(#[from] GameError),

    /// A row has the wrong number of slots.
    #[error("row {row} has {len} slots, expected {size}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Slots found in the row.
        len: usize,
        /// Expected row length.
        size: usize,
    },

    /// A character that is not `X`, `O` or `.`.
    #[error("unknown slot character {0:?}")]
    UnknownSlot(char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        let size = rows.len();
        let mut board = Board::new(size)?;

        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != size {
                return Err(ParseBoardError::NotSquare { row, len, size });
            }

            for (col, ch) in text.chars().enumerate() {
                let slot = match ch.to_ascii_uppercase() {
                    'X' => Slot::X,
                    'O' => Slot::O,
                    '.' | '-' => Slot::Empty,
                    _ => return Err(ParseBoardError::UnknownSlot(ch)),
                };
                board = board.with_slot(Position::new(row, col), slot);
            }
        }

        Ok(board)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.notation()
    }
}

impl TryFrom<String> for Board {
    type Error = ParseBoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(self.size * 2 - 1);

        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let line: Vec<String> = row.iter().map(|slot| slot.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
