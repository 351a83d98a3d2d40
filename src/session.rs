use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;
use rand::rngs::StdRng;

use crate::game::{GameEngine, GameStatus, TickOutcome};
use crate::input::GameInput;
use crate::scene::Scene;
use crate::timer::TickTimer;

/// Longest input poll while no tick is scheduled (paused or game over).
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// One game engine plus the timer that drives it.
///
/// Input and timer expiries both go through `&mut self`, so a direction
/// change is always observed whole by the next tick.
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    engine: GameEngine<R>,
    timer: TickTimer,
}

impl<R: Rng> Session<R> {
    #[must_use]
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            timer: TickTimer::new(),
        }
    }

    /// Schedules the first tick if the game is running.
    pub fn start(&mut self, now: Instant) {
        self.sync_timer(now, true);
    }

    /// Forwards input to the engine and keeps the timer in step with the
    /// resulting status.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        let before = self.engine.status();
        self.engine.handle_input(input);
        let after = self.engine.status();

        // Reset must replace any stale deadline even when already running.
        let rearm = matches!(input, GameInput::Reset) || before != after;
        self.sync_timer(now, rearm);
    }

    /// Ticks the engine if the deadline has passed, then re-arms with the
    /// interval as it stands after the tick.
    pub fn on_timer(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.timer.fire_if_due(now) {
            return None;
        }

        let outcome = self.engine.tick();
        self.sync_timer(now, true);
        Some(outcome)
    }

    /// How long the input loop may block before the timer needs service.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.timer
            .time_until_due(now)
            .map_or(IDLE_POLL_INTERVAL, |left| left.min(IDLE_POLL_INTERVAL))
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::from_state(self.engine.state(), self.engine.bounds())
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine<R> {
        &mut self.engine
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    fn sync_timer(&mut self, now: Instant, rearm: bool) {
        if self.engine.status() != GameStatus::Running {
            if self.timer.is_armed() {
                debug!("tick timer cancelled ({:?})", self.engine.status());
            }
            self.timer.cancel();
            return;
        }

        if rearm || !self.timer.is_armed() {
            let interval = Duration::from_millis(self.engine.state().tick_interval_ms);
            self.timer.arm(now, interval);
        }
    }
}
