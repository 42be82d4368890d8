//! Game outcome evaluation.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

use super::lines::Line;

/// Outcome of a board.
///
/// `Progress` is the only non-terminal variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No winner, empty slots remain.
    Progress,
    /// No winner, board full.
    Draw,
    /// A full line belongs to this player.
    Winner(Player),
}

impl Status {
    /// Check if no further move is allowed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::Progress)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(player),
            Status::Progress | Status::Draw => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Progress => write!(f, "The game is in progress!"),
            Status::Draw => write!(f, "The game is a draw!"),
            Status::Winner(player) => write!(f, "The winner of the game is {player}!"),
        }
    }
}

/// First completed line in scan order, with its owner.
///
/// Rows are scanned before columns, columns before diagonals. A board with
/// lines completed by both players cannot arise from legal play, so the first
/// match is taken as-is.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    Line::all(board.size()).find_map(|line| line.owner(board).map(|player| (line, player)))
}

/// Compute the status of a board.
///
/// ```
/// use rust_tictactoe::core::{Board, Player};
/// use rust_tictactoe::rules::{compute_status, Status};
///
/// let board: Board = "XXX/OO./...".parse().unwrap();
/// assert_eq!(compute_status(&board), Status::Winner(Player::X));
/// ```
#[must_use]
pub fn compute_status(board: &Board) -> Status {
    if let Some((_, player)) = winning_line(board) {
        Status::Winner(player)
    } else if board.is_full() {
        Status::Draw
    } else {
        Status::Progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(notation: &str) -> Status {
        compute_status(&notation.parse().unwrap())
    }

    #[test]
    fn test_empty_board_in_progress() {
        for size in 3..=5 {
            assert_eq!(compute_status(&Board::new(size).unwrap()), Status::Progress);
        }
    }

    #[test]
    fn test_row_column_and_diagonals() {
        assert_eq!(status_of("OO./XXX/..."), Status::Winner(Player::X));
        assert_eq!(status_of("XO./XO./.O."), Status::Winner(Player::O));
        assert_eq!(status_of("XO./OX./..X"), Status::Winner(Player::X));
        assert_eq!(status_of("X.O/XO./O.."), Status::Winner(Player::O));
    }

    #[test]
    fn test_full_board_draw() {
        assert_eq!(status_of("XOX/XOO/OXX"), Status::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        assert_eq!(status_of("XOX/OXO/OXX"), Status::Winner(Player::X));
    }

    #[test]
    fn test_partial_line_does_not_win() {
        assert_eq!(status_of("XX../OO../..../...."), Status::Progress);
        assert_eq!(status_of("XXX./OOO./..../...."), Status::Progress);
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Not reachable by legal play: both players hold a row.
        let board: Board = "OOO/XXX/...".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Line::Row(0), Player::O)));
        assert_eq!(compute_status(&board), Status::Winner(Player::O));

        let board: Board = "X.O/XO./XOO".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Line::Column(0), Player::X)));
    }

    #[test]
    fn test_status_helpers() {
        assert!(!Status::Progress.is_terminal());
        assert!(Status::Draw.is_terminal());
        assert!(Status::Winner(Player::O).is_terminal());
        assert_eq!(Status::Winner(Player::O).winner(), Some(Player::O));
        assert_eq!(Status::Draw.winner(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Status::Draw.to_string(), "The game is a draw!");
        assert_eq!(
            Status::Winner(Player::X).to_string(),
            "The winner of the game is X!"
        );
    }
}
