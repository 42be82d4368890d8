use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_tictactoe::search::{Minimax, SearchConfig};
use rust_tictactoe::{Board, GameState, Player};

fn bench_empty_board(c: &mut Criterion) {
    let state = GameState::with_starting_player(3, Player::X).unwrap();

    c.bench_function("minimax_3x3_empty_plain", |b| {
        b.iter(|| {
            let mut engine = Minimax::default();
            black_box(engine.search(black_box(&state), 9, Player::X))
        })
    });

    c.bench_function("minimax_3x3_empty_pruned", |b| {
        b.iter(|| {
            let mut engine = Minimax::new(SearchConfig::default().with_pruning(true)).unwrap();
            black_box(engine.search(black_box(&state), 9, Player::X))
        })
    });

    c.bench_function("minimax_3x3_empty_pruned_parallel", |b| {
        b.iter(|| {
            let config = SearchConfig::default().with_pruning(true).with_parallel(true);
            let mut engine = Minimax::new(config).unwrap();
            black_box(engine.search(black_box(&state), 9, Player::X))
        })
    });
}

fn bench_four_by_four(c: &mut Criterion) {
    let board: Board = "X.../.O../..../....".parse().unwrap();
    let state = GameState::from_board(board, Player::X);

    c.bench_function("minimax_4x4_depth_4_pruned", |b| {
        b.iter(|| {
            let mut engine = Minimax::new(SearchConfig::default().with_pruning(true)).unwrap();
            black_box(engine.search(black_box(&state), 4, Player::X))
        })
    });
}

criterion_group!(benches, bench_empty_board, bench_four_by_four);
criterion_main!(benches);
