//! Records of finished self-play games.
//!
//! A record captures a complete game:
//! - Seed and starting player, enough to replay it
//! - Every move with the player who made it
//! - Final status and board

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameError, GameState, Player, Position};
use crate::rules::Status;

/// A single move in a game record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// Where the mark was placed.
    pub position: Position,

    /// Whether the move came from the engine (false for random openings).
    pub searched: bool,

    /// Nodes the engine visited to choose this move.
    pub nodes: u64,
}

/// A complete self-play game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Seed the game was played with.
    pub seed: u64,

    /// Board side length.
    pub board_size: usize,

    /// Player who moved first.
    pub starting_player: Player,

    /// Moves in the order they were played.
    pub moves: Vec<MoveRecord>,

    /// Final status.
    pub result: Status,

    /// Final board.
    pub final_board: Board,
}

impl GameRecord {
    /// Start a record for a freshly created game.
    pub fn new(seed: u64, state: &GameState) -> Self {
        Self {
            seed,
            board_size: state.size(),
            starting_player: state.current_player(),
            moves: Vec::new(),
            result: state.status(),
            final_board: state.board().clone(),
        }
    }

    /// Add a move to the record.
    pub fn push(&mut self, mv: MoveRecord) {
        self.moves.push(mv);
    }

    /// Capture the outcome of the final state.
    pub fn finish(&mut self, state: &GameState) {
        self.result = state.status();
        self.final_board = state.board().clone();
    }

    /// Get the number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves were played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    /// Get moves made by a specific player.
    pub fn player_moves(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.player == player)
    }

    /// Replay the recorded moves from an empty board.
    pub fn replay(&self) -> Result<GameState, GameError> {
        let start = GameState::with_starting_player(self.board_size, self.starting_player)?;
        self.moves
            .iter()
            .try_fold(start, |state, mv| state.apply_move(mv.position))
    }
}

/// Win/draw tally over a batch of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Games counted.
    pub games: usize,
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
    /// Games that stopped before a result (should stay zero).
    pub unfinished: usize,
}

impl MatchSummary {
    /// Tally a batch of records.
    pub fn from_records(records: &[GameRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.games += 1;
            match record.result {
                Status::Winner(Player::X) => summary.x_wins += 1,
                Status::Winner(Player::O) => summary.o_wins += 1,
                Status::Draw => summary.draws += 1,
                Status::Progress => summary.unfinished += 1,
            }
            summary
        })
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} draws",
            self.games, self.x_wins, self.o_wins, self.draws
        )?;
        if self.unfinished > 0 {
            write!(f, ", {} unfinished", self.unfinished)?;
        }
        Ok(())
    }
}
