//! Player identification.
//!
//! ## Player
//!
//! The two sides of the game. `X` is always the maximizing side during
//! search, `O` the minimizing side, independent of who moves first.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (the maximizer).
    X,
    /// Player O (the minimizer).
    O,
}

impl Player {
    /// Both players, X first.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the other player.
    ///
    /// ```
    /// use rust_tictactoe::core::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent().opponent(), Player::O);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Pick a player uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Player::X
        } else {
            Player::O
        }
    }

    /// The character used for this player on the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }

    #[test]
    fn test_random_covers_both_players() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let picks: Vec<_> = (0..64).map(|_| Player::random(&mut rng)).collect();

        assert!(picks.contains(&Player::X));
        assert!(picks.contains(&Player::O));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Player::O).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::O);
    }
}
