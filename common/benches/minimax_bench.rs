use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::tictactoe::{Mark, TicTacToeGameState, best_move};

fn bench_best_move_empty_board() {
    let state = TicTacToeGameState::new(Mark::X);
    black_box(best_move(&state, Mark::X));
}

fn bench_best_move_mid_game() {
    let mut state = TicTacToeGameState::new(Mark::X);
    state.play(4).play(0).play(8);
    black_box(best_move(&state, Mark::O));
}

fn bench_self_play() {
    let mut state = TicTacToeGameState::new(Mark::X);
    while let Some(index) = best_move(&state, state.current_player()) {
        state.play(index);
    }
    black_box(state.winner());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(10);

    group.bench_function("best_move_empty", |b| b.iter(bench_best_move_empty_board));

    group.bench_function("best_move_mid_game", |b| b.iter(bench_best_move_mid_game));

    group.bench_function("self_play", |b| b.iter(bench_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
