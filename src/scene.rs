use crate::config::GridSize;
use crate::game::{GameState, GameStatus};
use crate::snake::Position;

/// Read-only snapshot of everything the renderer draws.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scene {
    pub bounds: GridSize,
    pub head: Position,
    /// Body segments after the head, head-side first.
    pub body: Vec<Position>,
    pub food: Option<Position>,
    pub score_label: String,
    pub status: GameStatus,
    pub overlay: Option<String>,
}

impl Scene {
    #[must_use]
    pub fn from_state(state: &GameState, bounds: GridSize) -> Self {
        let mut segments = state.snake.segments().copied();
        let head = segments.next().unwrap_or_default();

        Self {
            bounds,
            head,
            body: segments.collect(),
            food: state.food,
            score_label: score_label(state.score),
            status: state.status,
            overlay: overlay_text(state),
        }
    }
}

/// Text of the score label under the board.
#[must_use]
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

fn overlay_text(state: &GameState) -> Option<String> {
    match state.status {
        GameStatus::Running => None,
        GameStatus::Paused => Some("PAUSED\nPress Space to resume".to_owned()),
        GameStatus::GameOver => Some(format!(
            "GAME OVER\nScore: {}\nPress R to restart",
            state.score
        )),
    }
}
