use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dominoes::core::Side;
use dominoes::rules::{place, Engine};
use dominoes::tiles::double_six;
use std::hint::black_box;

const MAX_TURNS: usize = 200;

/// Play first-fit for the player too, drawing when stuck, until a hand empties.
fn play_out(mut engine: Engine) -> usize {
    let mut turns = 0;
    while engine.winner().is_none() && turns < MAX_TURNS {
        turns += 1;
        match engine.hand(Side::Player).first_playable(engine.chain()) {
            Some(index) => {
                let _ = engine.player_turn(index);
            }
            None => {
                engine.request_draw(Side::Player);
                if !engine.has_legal_move(Side::Player) {
                    engine.opponent_turn();
                }
            }
        }
    }
    turns
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("engine/deal", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(Engine::with_seed(seed))
        })
    });
}

fn bench_place(c: &mut Criterion) {
    let mut engine = Engine::with_seed(42);
    engine.player_turn(0).ok();
    let tiles = double_six();

    c.bench_function("rules/place_all", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &tile in &tiles {
                hits += usize::from(place(engine.chain(), tile).is_some());
            }
            black_box(hits)
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("engine/full_game", |b| {
        let mut seed = 0u64;
        b.iter_batched(
            || {
                seed = seed.wrapping_add(1);
                Engine::with_seed(seed)
            },
            |engine| black_box(play_out(engine)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_invariants(c: &mut Criterion) {
    let engine = Engine::with_seed(7);
    c.bench_function("engine/check_invariants", |b| {
        b.iter(|| black_box(engine.check_invariants()))
    });
}

criterion_group!(benches, bench_deal, bench_place, bench_full_game, bench_invariants);
criterion_main!(benches);
