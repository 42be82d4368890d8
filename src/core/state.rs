//! Game state and its transition function.
//!
//! ## GameState
//!
//! An immutable value: board, player to move, status and move history.
//! `apply_move` validates a move and returns a *new* state; the input is
//! never modified. Board and history are `im` persistent vectors, so cloning
//! a state for a search branch is O(1).
//!
//! ## Invariants
//!
//! - `status` is always `compute_status(board)`.
//! - A terminal state (`Draw` or `Winner`) accepts no further moves.

use im::Vector;
use serde::Serialize;

use super::board::{Board, Position, Slot};
use super::error::GameError;
use super::player::Player;
use super::rng::GameRng;
use crate::rules::{compute_status, Status};

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: Status,
    history: Vector<Position>,
}

impl GameState {
    /// Start a new game on an empty `size` x `size` board.
    ///
    /// The starting player is drawn uniformly from the given RNG.
    pub fn new(size: usize, rng: &mut GameRng) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        Ok(Self::from_board(board, rng.starting_player()))
    }

    /// Start a new game with a fixed starting player.
    pub fn with_starting_player(size: usize, player: Player) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::new(size)?, player))
    }

    /// Build a state around an existing board.
    ///
    /// Status is computed from the board; history starts empty.
    #[must_use]
    pub fn from_board(board: Board, player_to_move: Player) -> Self {
        let status = compute_status(&board);
        Self {
            board,
            current_player: player_to_move,
            status,
            history: Vector::new(),
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The player to move. Only meaningful while the game is in progress.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The game status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Positions played since this state was created, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Position> {
        &self.history
    }

    /// Empty positions in row-major order.
    ///
    /// Empty once the board is full.
    pub fn available_moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.board.empty_positions()
    }

    /// Play a move for the current player.
    ///
    /// ## Errors
    ///
    /// Checked in this order:
    /// - `GameFinished` if the game has ended
    /// - `OutOfBounds` if the position is off the board
    /// - `PositionOccupied` if the slot is taken
    pub fn apply_move(&self, pos: Position) -> Result<Self, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameFinished);
        }

        match self.board.get(pos) {
            None => Err(GameError::OutOfBounds {
                position: pos,
                size: self.size(),
            }),
            Some(Slot::Empty) => Ok(self.advance(pos)),
            Some(_) => Err(GameError::PositionOccupied(pos)),
        }
    }

    /// Apply a move already known to be legal.
    pub(crate) fn advance(&self, pos: Position) -> Self {
        let board = self.board.with_slot(pos, self.current_player.into());
        let status = compute_status(&board);
        let mut history = self.history.clone();
        history.push_back(pos);

        Self {
            board,
            current_player: self.current_player.opponent(),
            status,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &GameState, moves: &[(usize, usize)]) -> GameState {
        moves.iter().fold(state.clone(), |s, &m| s.apply_move(m.into()).unwrap())
    }

    #[test]
    fn test_new_game() {
        let mut rng = GameRng::new(42);
        let state = GameState::new(4, &mut rng).unwrap();

        assert_eq!(state.size(), 4);
        assert_eq!(state.status(), Status::Progress);
        assert_eq!(state.available_moves().count(), 16);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_new_game_rejects_small_board() {
        let mut rng = GameRng::new(42);
        assert_eq!(GameState::new(2, &mut rng), Err(GameError::InvalidSize(2)));
        assert_eq!(
            GameState::with_starting_player(0, Player::X),
            Err(GameError::InvalidSize(0))
        );
    }

    #[test]
    fn test_new_game_is_seed_deterministic() {
        for seed in 0..16 {
            let a = GameState::new(3, &mut GameRng::new(seed)).unwrap();
            let b = GameState::new(3, &mut GameRng::new(seed)).unwrap();
            assert_eq!(a.current_player(), b.current_player());
        }
    }

    #[test]
    fn test_apply_move_flips_player() {
        let state = GameState::with_starting_player(3, Player::O).unwrap();
        let next = state.apply_move(Position::new(1, 1)).unwrap();

        assert_eq!(next.current_player(), Player::X);
        assert_eq!(next.board().get(Position::new(1, 1)), Some(Slot::O));
        assert_eq!(next.history().len(), 1);

        // Input state untouched
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board().get(Position::new(1, 1)), Some(Slot::Empty));
    }

    #[test]
    fn test_apply_move_errors() {
        let state = GameState::with_starting_player(3, Player::X).unwrap();
        let state = play(&state, &[(0, 0)]);

        assert_eq!(
            state.apply_move(Position::new(0, 0)),
            Err(GameError::PositionOccupied(Position::new(0, 0)))
        );
        assert_eq!(
            state.apply_move(Position::new(0, 3)),
            Err(GameError::OutOfBounds {
                position: Position::new(0, 3),
                size: 3
            })
        );
    }

    #[test]
    fn test_finished_check_comes_first() {
        let state = GameState::with_starting_player(3, Player::X).unwrap();
        let done = play(&state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(done.status(), Status::Winner(Player::X));
        assert_eq!(done.apply_move(Position::new(9, 9)), Err(GameError::GameFinished));
        assert_eq!(done.apply_move(Position::new(0, 0)), Err(GameError::GameFinished));
        assert_eq!(done.apply_move(Position::new(2, 2)), Err(GameError::GameFinished));
    }

    #[test]
    fn test_from_board_computes_status() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let state = GameState::from_board(board, Player::O);

        assert_eq!(state.status(), Status::Draw);
        assert_eq!(state.available_moves().count(), 0);
    }

    #[test]
    fn test_history_order() {
        let state = GameState::with_starting_player(3, Player::X).unwrap();
        let state = play(&state, &[(2, 2), (0, 0), (1, 2)]);

        let history: Vec<_> = state.history().iter().copied().collect();
        assert_eq!(
            history,
            vec![Position::new(2, 2), Position::new(0, 0), Position::new(1, 2)]
        );
    }

    #[test]
    fn test_serialization() {
        let state = GameState::with_starting_player(3, Player::X).unwrap();
        let state = play(&state, &[(1, 1)]);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["board"], ".../.X./...");
        assert_eq!(json["current_player"], "O");
        assert_eq!(json["status"], "Progress");
    }
}
