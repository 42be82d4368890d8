//! Exhaustive minimax search.
//!
//! Scores are absolute: X is always the maximizer and O the minimizer,
//! whoever is to move. A won position scores `+1` for X and `-1` for O;
//! draws and positions cut off at the depth limit score `0`.
//!
//! Children are visited in `available_moves` order. The first move whose
//! score strictly improves on the best so far is kept, so among equally good
//! moves the earliest one wins. Pruning and parallel root search both
//! preserve this rule and return exactly what the plain search returns.

use std::time::Instant;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player, Position};
use crate::rules::Status;

use super::config::{ConfigError, Difficulty, SearchConfig};
use super::stats::SearchStats;

/// Position score from X's point of view.
pub type Score = i8;

/// The player whose wins score positive.
pub const MAXIMIZER: Player = Player::X;

/// Check if a player takes the maximum of its children's scores.
#[must_use]
pub const fn is_maximizing(player: Player) -> bool {
    matches!(player, MAXIMIZER)
}

/// Score a status from `perspective`'s point of view.
///
/// ```
/// use rust_tictactoe::core::Player;
/// use rust_tictactoe::rules::Status;
/// use rust_tictactoe::search::evaluate;
///
/// assert_eq!(evaluate(Status::Winner(Player::X), Player::X), 1);
/// assert_eq!(evaluate(Status::Winner(Player::O), Player::X), -1);
/// assert_eq!(evaluate(Status::Draw, Player::X), 0);
/// ```
#[must_use]
pub fn evaluate(status: Status, perspective: Player) -> Score {
    match status {
        Status::Winner(player) if player == perspective => 1,
        Status::Winner(_) => -1,
        Status::Draw | Status::Progress => 0,
    }
}

/// Result of a search: the best score and the move reaching it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Score of the position (X-centric).
    pub score: Score,

    /// Move achieving `score`; `None` at leaves.
    pub best_move: Option<Position>,
}

impl SearchOutcome {
    fn leaf(status: Status) -> Self {
        Self {
            score: evaluate(status, MAXIMIZER),
            best_move: None,
        }
    }
}

/// Minimax search context.
///
/// Owns its configuration and the statistics of the most recent search.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SearchStats::default(),
        })
    }

    /// Create a plain search context with the given depth limit.
    pub fn with_max_depth(max_depth: u32) -> Result<Self, ConfigError> {
        Self::new(SearchConfig::default().with_max_depth(max_depth))
    }

    /// Create a plain search context for a difficulty level.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            config: SearchConfig::for_difficulty(difficulty),
            stats: SearchStats::default(),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `depth` plies below `state` with `player` to move.
    ///
    /// Returns a leaf outcome (no move) if the state is terminal, `depth` is
    /// zero, or no moves remain.
    pub fn search(&mut self, state: &GameState, depth: u32, player: Player) -> SearchOutcome {
        let start = Instant::now();
        self.stats.reset();

        let outcome = if self.config.parallel {
            search_root_parallel(state, depth, player, self.config.pruning, &mut self.stats)
        } else {
            search_node(
                state,
                depth,
                player,
                Window::FULL,
                self.config.pruning,
                &mut self.stats,
                0,
            )
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        outcome
    }

    /// Pick the best move for the player to move.
    ///
    /// Returns `None` only if the game is over.
    pub fn best_move(&mut self, state: &GameState) -> Option<Position> {
        let outcome = self.search(state, self.config.max_depth, state.current_player());

        debug!(
            "{} to move: best {:?} (score {}), {} nodes, {} cutoffs, {}us ({:.0} nps)",
            state.current_player(),
            outcome.best_move,
            outcome.score,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.time_us,
            self.stats.nodes_per_second()
        );

        outcome.best_move
    }
}

/// Alpha-beta bounds. The full window never closes, which makes the search
/// plain minimax.
#[derive(Clone, Copy, Debug)]
struct Window {
    alpha: Score,
    beta: Score,
}

impl Window {
    const FULL: Window = Window {
        alpha: Score::MIN,
        beta: Score::MAX,
    };

    fn narrow(&mut self, player: Player, score: Score) {
        if is_maximizing(player) {
            self.alpha = self.alpha.max(score);
        } else {
            self.beta = self.beta.min(score);
        }
    }

    fn is_closed(&self) -> bool {
        self.alpha >= self.beta
    }
}

/// Check if `score` strictly beats the running best for `player`.
///
/// `None` stands for the starting accumulator (-inf for X, +inf for O).
fn improves(player: Player, score: Score, best: Option<Score>) -> bool {
    match best {
        None => true,
        Some(best) if is_maximizing(player) => score > best,
        Some(best) => score < best,
    }
}

fn search_node(
    state: &GameState,
    depth: u32,
    player: Player,
    mut window: Window,
    pruning: bool,
    stats: &mut SearchStats,
    ply: u32,
) -> SearchOutcome {
    stats.nodes += 1;
    stats.max_ply = stats.max_ply.max(ply);

    if state.is_terminal() || depth == 0 {
        stats.leaves += 1;
        return SearchOutcome::leaf(state.status());
    }

    let mut best: Option<(Score, Position)> = None;

    for mv in state.available_moves() {
        let child = state.advance(mv);
        let score = search_node(
            &child,
            depth - 1,
            player.opponent(),
            window,
            pruning,
            stats,
            ply + 1,
        )
        .score;

        if improves(player, score, best.map(|(s, _)| s)) {
            best = Some((score, mv));
        }

        if pruning {
            window.narrow(player, score);
            if window.is_closed() {
                stats.cutoffs += 1;
                break;
            }
        }
    }

    match best {
        Some((score, mv)) => SearchOutcome {
            score,
            best_move: Some(mv),
        },
        None => {
            stats.leaves += 1;
            SearchOutcome::leaf(state.status())
        }
    }
}

/// Search each root move on its own rayon task, then fold the results in
/// move order with the same tie rule as the sequential search.
fn search_root_parallel(
    state: &GameState,
    depth: u32,
    player: Player,
    pruning: bool,
    stats: &mut SearchStats,
) -> SearchOutcome {
    let moves: Vec<Position> = state.available_moves().collect();

    if state.is_terminal() || depth == 0 || moves.is_empty() {
        return search_node(state, depth, player, Window::FULL, pruning, stats, 0);
    }

    stats.nodes += 1;

    let results: Vec<(Position, Score, SearchStats)> = moves
        .par_iter()
        .map(|&mv| {
            let mut branch = SearchStats::default();
            let child = state.advance(mv);
            let score = search_node(
                &child,
                depth - 1,
                player.opponent(),
                Window::FULL,
                pruning,
                &mut branch,
                1,
            )
            .score;
            (mv, score, branch)
        })
        .collect();

    let mut best: Option<(Score, Position)> = None;
    for (mv, score, branch) in results {
        stats.merge(&branch);
        if improves(player, score, best.map(|(s, _)| s)) {
            best = Some((score, mv));
        }
    }

    match best {
        Some((score, mv)) => SearchOutcome {
            score,
            best_move: Some(mv),
        },
        None => SearchOutcome::leaf(state.status()),
    }
}
