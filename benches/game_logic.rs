use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term2048::core::Board;
use term2048::types::GameAction;

fn checkerboard() -> Board {
    let mut board = Board::new(4, 2048, 12345);
    board.set_row(0, &[2, 4, 2, 4]);
    board.set_row(1, &[4, 2, 4, 2]);
    board.set_row(2, &[2, 4, 2, 4]);
    board.set_row(3, &[4, 2, 4, 2]);
    board
}

fn bench_shift(c: &mut Criterion) {
    c.bench_function("shift_left_full_board", |b| {
        b.iter(|| {
            let mut board = checkerboard();
            board.shift(black_box(GameAction::Left))
        })
    });
}

fn bench_merge_heavy_move(c: &mut Criterion) {
    c.bench_function("shift_left_all_pairs", |b| {
        b.iter(|| {
            let mut board = Board::new(4, 2048, 12345);
            for y in 0..4 {
                board.set_row(y, &[2, 2, 4, 4]);
            }
            board.shift(black_box(GameAction::Left))
        })
    });
}

fn bench_can_move(c: &mut Criterion) {
    // Worst case: full board, no merges, every pair checked.
    let board = checkerboard();
    c.bench_function("can_move_frozen_board", |b| {
        b.iter(|| black_box(&board).can_move())
    });
}

fn bench_spawn_tile(c: &mut Criterion) {
    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut board = Board::new(4, 2048, 12345);
            board.spawn_tile();
        })
    });
}

criterion_group!(
    benches,
    bench_shift,
    bench_merge_heavy_move,
    bench_can_move,
    bench_spawn_tile
);
criterion_main!(benches);
