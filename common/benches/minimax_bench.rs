use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::games::tictactoe::{Board, Mark, best_move};

fn bench_full_engine_game() {
    let mut board = Board::new();
    let mut mover = Mark::X;
    while !board.evaluate().is_terminal() {
        let Ok(pos) = best_move(&board, mover) else {
            break;
        };
        if board.place(mover, pos).is_err() {
            break;
        }
        mover = mover.opponent();
    }
}

fn bench_single_move_empty_board() {
    let board = Board::new();
    let _ = black_box(best_move(black_box(&board), Mark::O));
}

fn bench_single_move_mid_game(board: &Board) {
    let _ = black_box(best_move(black_box(board), Mark::O));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("full_engine_game", |b| b.iter(bench_full_engine_game));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    let mid_game: Board = "X--/-O-/--X".parse().unwrap();
    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| bench_single_move_mid_game(&mid_game))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
