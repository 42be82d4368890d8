//! Property-based tests for the state machine and the search.

use proptest::prelude::*;

use rust_tictactoe::search::{Minimax, SearchConfig};
use rust_tictactoe::{
    apply_move, available_moves, compute_status, GameError, GameRng, GameState, Player, Status,
};

/// Play up to `plies` uniformly random moves from a seeded fresh game.
fn random_state(size: usize, seed: u64, plies: usize) -> GameState {
    let mut rng = GameRng::new(seed);
    let mut state = GameState::new(size, &mut rng).unwrap();
    for _ in 0..plies {
        let moves = available_moves(&state);
        match rng.choose(&moves) {
            Some(&pos) if !state.is_terminal() => state = apply_move(&state, pos).unwrap(),
            _ => break,
        }
    }
    state
}

fn search_with(config: SearchConfig, state: &GameState, depth: u32) -> (i8, Option<(usize, usize)>) {
    let mut engine = Minimax::new(config).unwrap();
    let outcome = engine.search(state, depth, state.current_player());
    (outcome.score, outcome.best_move.map(|p| (p.row, p.col)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // Mark counts never differ by more than one
    #[test]
    fn marks_stay_balanced(size in 3usize..=5, seed in any::<u64>(), plies in 0usize..25) {
        let state = random_state(size, seed, plies);
        let x = state.board().count(Player::X) as isize;
        let o = state.board().count(Player::O) as isize;
        prop_assert!((x - o).abs() <= 1, "x={x} o={o}");
        prop_assert_eq!((x + o) as usize, state.history().len());
    }

    // Status always agrees with a fresh scan of the board
    #[test]
    fn status_matches_board(size in 3usize..=5, seed in any::<u64>(), plies in 0usize..25) {
        let state = random_state(size, seed, plies);
        prop_assert_eq!(state.status(), compute_status(state.board()));
        if state.status() == Status::Draw {
            prop_assert!(state.board().is_full());
        }
    }

    // Every listed move is legal and nothing else is
    #[test]
    fn available_moves_are_exactly_the_legal_ones(seed in any::<u64>(), plies in 0usize..9) {
        let state = random_state(3, seed, plies);
        let moves = available_moves(&state);

        for row in 0..3 {
            for col in 0..3 {
                let pos = (row, col).into();
                let result = apply_move(&state, pos);
                if state.is_terminal() {
                    prop_assert_eq!(result, Err(GameError::GameFinished));
                } else if moves.contains(&pos) {
                    let next = result.unwrap();
                    prop_assert_eq!(next.history().len(), state.history().len() + 1);
                    prop_assert_eq!(next.current_player(), state.current_player().opponent());
                } else {
                    prop_assert_eq!(result, Err(GameError::PositionOccupied(pos)));
                }
            }
        }
    }

    // Pruning and parallel root search return what plain minimax returns
    #[test]
    fn search_variants_agree(seed in any::<u64>(), plies in 2usize..9, depth in 1u32..=9) {
        let state = random_state(3, seed, plies);
        let plain = search_with(SearchConfig::default(), &state, depth);

        prop_assert_eq!(search_with(SearchConfig::default().with_pruning(true), &state, depth), plain);
        prop_assert_eq!(search_with(SearchConfig::default().with_parallel(true), &state, depth), plain);
        prop_assert_eq!(
            search_with(SearchConfig::default().with_pruning(true).with_parallel(true), &state, depth),
            plain
        );
    }

    // The chosen move is legal and its score is the exact value of the position
    #[test]
    fn best_move_is_legal(seed in any::<u64>(), plies in 1usize..9) {
        let state = random_state(3, seed, plies);
        let mut engine = Minimax::new(SearchConfig::default().with_pruning(true)).unwrap();

        match engine.best_move(&state) {
            Some(pos) => {
                prop_assert!(!state.is_terminal());
                let child = apply_move(&state, pos).unwrap();
                let parent = engine.search(&state, 9, state.current_player()).score;
                let reply = engine.search(&child, 9, child.current_player()).score;
                prop_assert_eq!(parent, reply);
            }
            None => prop_assert!(state.is_terminal()),
        }
    }
}
