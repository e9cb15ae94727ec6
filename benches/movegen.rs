use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pawnshop::game::{action::CoordinateMove, state::GameState};

fn middlegame() -> GameState {
    let mut state = GameState::initial();
    for notation in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "d2d3", "g8f6"] {
        let Ok(coordinates) = notation.parse::<CoordinateMove>() else {
            continue;
        };
        let candidate = coordinates.to_move(state.board());
        if let Some(mv) = state.legal_moves().into_iter().find(|mv| *mv == candidate) {
            state.apply(mv)
        }
    }
    state
}

fn legal_moves(c: &mut Criterion) {
    let mut initial = GameState::initial();
    c.bench_function("legal moves (initial)", |b| {
        b.iter(|| black_box(initial.legal_moves()))
    });

    let mut state = middlegame();
    c.bench_function("legal moves (italian)", |b| {
        b.iter(|| black_box(state.legal_moves()))
    });
}

fn pseudo_legal_moves(c: &mut Criterion) {
    let state = middlegame();
    c.bench_function("pseudo-legal moves (italian)", |b| {
        b.iter(|| black_box(state.pseudo_legal_moves()))
    });
}

fn perft(c: &mut Criterion) {
    let mut state = GameState::initial();
    c.bench_function("perft 3", |b| {
        b.iter(|| pawnshop::game::perft::perft(black_box(&mut state), 3))
    });
}

criterion_group!(benches, legal_moves, pseudo_legal_moves, perft);
criterion_main!(benches);
