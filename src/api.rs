//! Free-function facade over the state machine and the search.
//!
//! These are the operations a front end (prompt loop, GUI, server) needs.
//!
//! ```
//! use rust_tictactoe::{apply_move, available_moves, get_best_move, make_game, GameRng};
//!
//! let mut rng = GameRng::new(7);
//! let game = make_game(3, &mut rng).unwrap();
//! assert_eq!(available_moves(&game).len(), 9);
//!
//! let pos = get_best_move(&game, 2).unwrap().unwrap();
//! let game = apply_move(&game, pos).unwrap();
//! assert_eq!(available_moves(&game).len(), 8);
//! ```

use crate::core::{GameError, GameRng, GameState, Player, Position};
use crate::search::{ConfigError, Minimax};

/// Start a game on an empty `size` x `size` board with a random first player.
pub fn make_game(size: usize, rng: &mut GameRng) -> Result<GameState, GameError> {
    GameState::new(size, rng)
}

/// Play a move for the player to move, returning the new state.
pub fn apply_move(state: &GameState, position: Position) -> Result<GameState, GameError> {
    state.apply_move(position)
}

/// Empty positions in row-major order.
pub fn available_moves(state: &GameState) -> Vec<Position> {
    state.available_moves().collect()
}

/// The other player.
pub fn opponent(player: Player) -> Player {
    player.opponent()
}

/// Best move for the player to move, searching at most `max_depth` plies.
///
/// `Ok(None)` means the game is over. Fails only if `max_depth` is zero.
pub fn get_best_move(state: &GameState, max_depth: u32) -> Result<Option<Position>, ConfigError> {
    Ok(Minimax::with_max_depth(max_depth)?.best_move(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Status;

    #[test]
    fn test_make_game_size_check() {
        let mut rng = GameRng::new(1);
        assert_eq!(make_game(1, &mut rng), Err(GameError::InvalidSize(1)));
        assert_eq!(make_game(3, &mut rng).unwrap().status(), Status::Progress);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(opponent(Player::X), Player::O);
        assert_eq!(opponent(opponent(Player::O)), Player::O);
    }

    #[test]
    fn test_get_best_move_zero_depth() {
        let game = GameState::with_starting_player(3, Player::X).unwrap();
        assert!(matches!(get_best_move(&game, 0), Err(ConfigError::ZeroDepth)));
    }

    #[test]
    fn test_get_best_move_finished_game() {
        let game = GameState::from_board("XXX/OO./...".parse().unwrap(), Player::O);
        assert_eq!(get_best_move(&game, 3).unwrap(), None);
    }
}
