use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{Board, Cell, GameSession, Player, check_win};

const X: Cell = Cell::Mark(Player::X);
const O: Cell = Cell::Mark(Player::O);
const E: Cell = Cell::Empty;

fn bench_check_win_empty(c: &mut Criterion) {
    let board = Board::empty();
    c.bench_function("check_win_empty_board", |b| {
        b.iter(|| check_win(black_box(&board)))
    });
}

fn bench_check_win_last_diagonal(c: &mut Criterion) {
    // only the final line in scan order is satisfied
    let board = Board::from([X, O, O, E, O, X, O, X, X]);
    c.bench_function("check_win_last_diagonal", |b| {
        b.iter(|| check_win(black_box(&board)))
    });
}

fn bench_full_game_with_jumps(c: &mut Criterion) {
    c.bench_function("session_full_game_with_jumps", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            for index in [4, 0, 8, 2, 1] {
                let _ = session.play_move(black_box(index));
            }
            let _ = session.jump_to(2);
            for index in [6, 3, 5, 7] {
                let _ = session.play_move(black_box(index));
            }
            black_box(session.current_status())
        })
    });
}

criterion_group!(
    benches,
    bench_check_win_empty,
    bench_check_win_last_diagonal,
    bench_full_game_with_jumps
);
criterion_main!(benches);
