use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, GridSize};
use crate::food::place_food;
use crate::input::GameInput;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one call to [`GameEngine::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Idle,
    Moved,
    Ate,
    Died(DeathReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Position>,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
}

/// Owns the game state and the random source used to place food.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates a deterministic engine for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Creates an engine seeded from the operating system.
    #[must_use]
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine in the initial configuration.
    ///
    /// `config` is expected to have passed [`GameConfig::validate`].
    #[must_use]
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let state = initial_state(&config, &mut rng);
        Self { config, state, rng }
    }

    /// Replaces the state wholesale, e.g. to stage a scenario in tests.
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState, rng: R) -> Self {
        Self { config, state, rng }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for staging scenarios; callers keep food off the snake.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Returns to the initial configuration with freshly placed food.
    pub fn reset(&mut self) {
        self.state = initial_state(&self.config, &mut self.rng);
        info!("game reset, food at {:?}", self.state.food);
    }

    /// Re-rolls the food position against the current snake.
    pub fn place_food(&mut self) {
        let bounds = self.bounds();
        self.state.food = place_food(&mut self.rng, bounds, &self.state.snake);
        if self.state.food.is_none() {
            info!("board full at length {}, no food placed", self.state.snake.len());
        }
    }

    /// Applies one external input event.
    pub fn handle_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.state.status != GameStatus::GameOver {
                    let _ = self.state.snake.steer(direction);
                }
            }
            GameInput::Reset => self.reset(),
            GameInput::TogglePause => {
                self.state.status = match self.state.status {
                    GameStatus::Running => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Running,
                    GameStatus::GameOver => GameStatus::GameOver,
                };
                debug!("pause toggled, status {:?}", self.state.status);
            }
        }
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        let direction = self.state.snake.adopt_pending_direction();
        let new_head = self.state.snake.head().step(direction);

        if !new_head.is_within_bounds(self.bounds()) {
            return self.end_game(DeathReason::WallCollision);
        }

        // The tail cell counts: it has not moved out of the way yet.
        if self.state.snake.occupies(new_head) {
            return self.end_game(DeathReason::SelfCollision);
        }

        self.state.snake.push_head(new_head);

        if self.state.food == Some(new_head) {
            self.state.score += 1;
            self.state.tick_interval_ms = self
                .state
                .tick_interval_ms
                .saturating_sub(self.config.speed_step_ms)
                .max(self.config.min_interval_ms);
            debug!(
                "food eaten, score {} interval {}ms",
                self.state.score, self.state.tick_interval_ms
            );
            self.place_food();
            return TickOutcome::Ate;
        }

        self.state.snake.drop_tail();
        TickOutcome::Moved
    }

    fn end_game(&mut self, reason: DeathReason) -> TickOutcome {
        self.state.status = GameStatus::GameOver;
        self.state.death_reason = Some(reason);
        info!("game over ({reason:?}) with score {}", self.state.score);
        TickOutcome::Died(reason)
    }
}

fn initial_state<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> GameState {
    let bounds = config.grid();
    let snake = Snake::centered(bounds, config.initial_snake_length);
    let food = place_food(rng, bounds, &snake);

    GameState {
        snake,
        food,
        score: 0,
        tick_interval_ms: config.initial_interval_ms,
        status: GameStatus::Running,
        death_reason: None,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GameConfig;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameEngine, GameStatus, TickOutcome};

    fn engine_with(snake: Snake, food: Option<Position>) -> GameEngine {
        let config = GameConfig::default();
        let mut state = GameEngine::with_seed(config, 1).state().clone();
        state.snake = snake;
        state.food = food;
        GameEngine::from_state(config, state, StdRng::seed_from_u64(1))
    }

    #[test]
    fn new_engine_starts_running_with_food_off_the_snake() {
        let engine = GameEngine::with_seed(GameConfig::default(), 9);
        let state = engine.state();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.len(), 5);
        assert_eq!(state.snake.head(), Position::new(15, 10));
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_interval_ms, 120);
        let food = state.food.expect("fresh board has room for food");
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn moving_into_the_tail_cell_is_a_self_collision() {
        // Head (0,1) turning Up runs into the tail at (0,0).
        let snake = Snake::from_segments(
            vec![
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(1, 0),
                Position::new(0, 0),
            ],
            Direction::Left,
        );
        let mut engine = engine_with(snake, None);
        engine.handle_input(GameInput::Direction(Direction::Up));

        assert_eq!(
            engine.tick(),
            TickOutcome::Died(DeathReason::SelfCollision)
        );
        assert_eq!(engine.state().snake.len(), 4);
    }

    #[test]
    fn interval_never_drops_below_minimum() {
        let config = GameConfig {
            grid_width: 40,
            initial_interval_ms: 45,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::with_seed(config, 5);

        for expected in [42, 40, 40] {
            let state = engine.state_mut();
            state.food = Some(state.snake.head().step(Direction::Right));

            assert_eq!(engine.tick(), TickOutcome::Ate);
            assert_eq!(engine.state().tick_interval_ms, expected);
        }
    }

    #[test]
    fn toggle_pause_has_no_effect_after_game_over() {
        let snake = Snake::from_segments(vec![Position::new(0, 0)], Direction::Up);
        let mut engine = engine_with(snake, None);

        assert_eq!(
            engine.tick(),
            TickOutcome::Died(DeathReason::WallCollision)
        );
        engine.handle_input(GameInput::TogglePause);

        assert_eq!(engine.status(), GameStatus::GameOver);
    }

    #[test]
    fn reset_clears_death_reason_and_restarts() {
        let snake = Snake::from_segments(vec![Position::new(0, 0)], Direction::Left);
        let mut engine = engine_with(snake, None);
        let _ = engine.tick();

        engine.handle_input(GameInput::Reset);

        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.state().death_reason, None);
        assert_eq!(engine.state().snake.len(), 5);
    }

    #[test]
    fn directions_are_ignored_after_game_over() {
        let snake = Snake::from_segments(vec![Position::new(0, 0)], Direction::Up);
        let mut engine = engine_with(snake, None);
        let _ = engine.tick();

        engine.handle_input(GameInput::Direction(Direction::Right));

        assert_eq!(engine.state().snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn paused_engine_still_buffers_a_turn() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 2);
        engine.handle_input(GameInput::TogglePause);
        engine.handle_input(GameInput::Direction(Direction::Down));
        engine.handle_input(GameInput::TogglePause);

        assert_ne!(engine.tick(), TickOutcome::Idle);
        assert_eq!(engine.state().snake.head(), Position::new(15, 11));
    }
}
