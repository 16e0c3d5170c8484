//! Search Benchmarks
//!
//! Performance benchmarks for the search and its building blocks using Criterion.

use std::hint::black_box;

use chess_ai::{evaluate, legal_moves, order_moves, Board, ChessAi, Color};
use criterion::{criterion_group, criterion_main, Criterion};

const MIDDLEGAME: &str = "r3k2r/pppq1ppp/2n5/3pp3/3PP3/2N5/PPPQ1PPP/R3K2R";

fn bench_legal_moves_starting(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(legal_moves(&board, Color::White)))
    });
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("evaluate_starting_position", |b| {
        b.iter(|| black_box(evaluate(&board, Color::White)))
    });
}

fn bench_order_moves_middlegame(c: &mut Criterion) {
    let board = Board::from_placement(MIDDLEGAME).unwrap();
    let moves = legal_moves(&board, Color::White);

    c.bench_function("order_moves_middlegame", |b| {
        b.iter(|| {
            let mut moves = moves.clone();
            order_moves(&board, &mut moves);
            black_box(moves)
        })
    });
}

fn bench_best_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_move");
    group.sample_size(10);

    for depth in [2u8, 3] {
        group.bench_function(format!("starting_depth_{depth}"), |b| {
            let mut board = Board::new();
            let mut ai = ChessAi::new(depth, Color::White).unwrap();
            b.iter(|| black_box(ai.get_best_move(&mut board)))
        });
        group.bench_function(format!("middlegame_depth_{depth}"), |b| {
            let mut board = Board::from_placement(MIDDLEGAME).unwrap();
            let mut ai = ChessAi::new(depth, Color::Black).unwrap();
            b.iter(|| black_box(ai.get_best_move(&mut board)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_legal_moves_starting,
    bench_evaluate_starting,
    bench_order_moves_middlegame,
    bench_best_move,
);
criterion_main!(benches);
