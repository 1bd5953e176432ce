use criterion::{black_box, criterion_group, criterion_main, Criterion};

use parlor_chess::engines::engine_greedy::GreedyEngine;
use parlor_chess::engines::engine_lookahead::LookaheadEngine;
use parlor_chess::engines::engine_trait::Engine;
use parlor_chess::game_state::board::Board;
use parlor_chess::game_state::chess_types::Color;
use parlor_chess::game_state::game_engine::GameEngine;
use parlor_chess::move_generation::legality_filter::all_legal_moves;

fn bench_legal_move_generation(c: &mut Criterion) {
    let board = Board::standard_setup();

    c.bench_function("all_legal_moves_startpos", |b| {
        b.iter(|| {
            let moves = all_legal_moves(black_box(&board), Color::White);
            assert_eq!(moves.iter().map(|m| m.destinations.len()).sum::<usize>(), 20);
            moves
        })
    });
}

fn bench_ai_tiers(c: &mut Criterion) {
    let game = GameEngine::new();

    c.bench_function("greedy_choose_startpos", |b| {
        b.iter(|| GreedyEngine.choose_move(black_box(&game)))
    });

    c.bench_function("lookahead_choose_startpos", |b| {
        b.iter(|| LookaheadEngine.choose_move(black_box(&game)))
    });
}

criterion_group!(benches, bench_legal_move_generation, bench_ai_tiers);
criterion_main!(benches);
