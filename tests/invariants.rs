use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grid_snake::config::{GameConfig, MIN_TICK_INTERVAL_MS};
use grid_snake::game::{GameEngine, GameStatus, TickOutcome};
use grid_snake::input::{Direction, GameInput};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn assert_invariants(engine: &GameEngine, eaten: u32, last_interval: u64) {
    let state = engine.state();
    let bounds = engine.bounds();

    if let Some(food) = state.food {
        assert!(!state.snake.occupies(food), "food on the snake");
    }
    assert!(state.tick_interval_ms <= last_interval, "interval grew");
    assert!(state.tick_interval_ms >= MIN_TICK_INTERVAL_MS);
    assert_eq!(state.score, eaten);

    if state.status == GameStatus::Running {
        let unique: HashSet<_> = state.snake.segments().collect();
        assert_eq!(unique.len(), state.snake.len(), "snake overlaps itself");
        assert!(state.snake.segments().all(|cell| cell.is_within_bounds(bounds)));
        assert_eq!(
            state.snake.len(),
            engine.config().initial_snake_length + eaten as usize
        );
    }
}

#[test]
fn random_play_keeps_every_invariant() {
    let config = GameConfig {
        grid_width: 10,
        grid_height: 8,
        ..GameConfig::default()
    };

    for seed in 0..40 {
        let mut driver = StdRng::seed_from_u64(seed);
        let mut engine = GameEngine::with_seed(config, seed);
        let mut eaten = 0;
        let mut last_interval = engine.state().tick_interval_ms;

        for _ in 0..400 {
            // Random turns; reversals are rejected by the engine itself.
            if driver.gen_bool(0.6) {
                let direction = DIRECTIONS[driver.gen_range(0..DIRECTIONS.len())];
                engine.handle_input(GameInput::Direction(direction));
            }
            if driver.gen_bool(0.02) {
                engine.handle_input(GameInput::TogglePause);
            }

            match engine.tick() {
                TickOutcome::Ate => eaten += 1,
                TickOutcome::Died(_) => {
                    assert_invariants(&engine, eaten, last_interval);
                    engine.handle_input(GameInput::Reset);
                    eaten = 0;
                    last_interval = engine.state().tick_interval_ms;
                }
                TickOutcome::Idle | TickOutcome::Moved => {}
            }

            assert_invariants(&engine, eaten, last_interval);
            last_interval = engine.state().tick_interval_ms;
        }
    }
}

#[test]
fn reset_is_canonical_apart_from_food() {
    let config = GameConfig::default();
    let mut engine = GameEngine::with_seed(config, 77);
    let initial: Vec<_> = engine.state().snake.segments().copied().collect();

    for _ in 0..10 {
        engine.handle_input(GameInput::Direction(Direction::Down));
        for _ in 0..15 {
            let _ = engine.tick();
        }
        engine.handle_input(GameInput::Reset);

        let state = engine.state();
        let segments: Vec<_> = state.snake.segments().copied().collect();
        assert_eq!(segments, initial);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_interval_ms, config.initial_interval_ms);
        assert_eq!(state.status, GameStatus::Running);
    }
}
