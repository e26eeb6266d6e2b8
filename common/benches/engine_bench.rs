use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::collections::HashSet;
use std::time::Duration;

use common::engine::{Direction, GameState, Level, PlayerColor, PlayerIdentity, PlayerSlot, Point};

fn open_level(size: i32) -> Level {
    Level::new(
        size,
        size,
        HashSet::new(),
        Point::new(1, size / 2),
        Point::new(size - 2, size / 2),
        "Bench Field".to_string(),
    )
}

fn identity(name: &str) -> PlayerIdentity {
    PlayerIdentity::new(name, PlayerColor::new(0, 102, 255))
}

/// Both cycles run straight at opposite walls until the duel resolves,
/// roughly `size` ticks with two trail inserts each.
fn bench_straight_run(size: i32) {
    let mut game = GameState::new(open_level(size), identity("Alice"), identity("Bob"));
    // Turn both away from each other so neither crashes into a trail early.
    game.set_direction(PlayerSlot::One, Direction::Up);
    game.set_direction(PlayerSlot::Two, Direction::Down);
    while !game.tick().is_terminal() {}
}

/// A zig-zag course exercising the direction change path on every tick.
fn bench_zig_zag(size: i32) {
    let mut game = GameState::new(open_level(size), identity("Alice"), identity("Bob"));
    let mut toggle = false;
    loop {
        let direction = if toggle { Direction::Down } else { Direction::Right };
        game.set_direction(PlayerSlot::One, direction);
        game.set_direction(PlayerSlot::Two, Direction::Up);
        toggle = !toggle;
        if game.tick().is_terminal() {
            break;
        }
    }
}

fn engine_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group
        .sampling_mode(SamplingMode::Flat)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("straight_run_256", |b| b.iter(|| bench_straight_run(256)));

    group.bench_function("zig_zag_256", |b| b.iter(|| bench_zig_zag(256)));

    group.finish();
}

criterion_group!(benches, engine_bench);
criterion_main!(benches);
