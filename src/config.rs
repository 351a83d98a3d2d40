use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Snake length after a reset.
pub const INITIAL_SNAKE_LENGTH: usize = 5;

/// Tick interval in milliseconds at the start of a game.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 120;

/// Milliseconds shaved off the tick interval per food eaten.
pub const SPEED_STEP_MS: u64 = 3;

/// Floor for the tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 40;

/// Largest board accepted from a config file, in cells.
pub const MAX_GRID_CELLS: usize = 65_536;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Tunable game parameters.
///
/// Every field is optional in the JSON form; missing ones fall back to the
/// defaults above, so an empty object yields the stock game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub initial_snake_length: usize,
    pub initial_interval_ms: u64,
    pub speed_step_ms: u64,
    pub min_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            initial_interval_ms: INITIAL_TICK_INTERVAL_MS,
            speed_step_ms: SPEED_STEP_MS,
            min_interval_ms: MIN_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw)
    }

    /// Parses and validates a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }

    /// Checks that a game built from this config can start.
    ///
    /// The initial snake extends left from the center cell, so its length
    /// is bounded by `width / 2 + 1`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        // The bordered board must fit a terminal row, two columns per cell.
        let board_columns = u32::from(self.grid_width) * u32::from(CELL_COLUMNS) + 2;
        if board_columns > u32::from(u16::MAX) || self.grid().total_cells() > MAX_GRID_CELLS {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max_cells: MAX_GRID_CELLS,
            });
        }

        let max_length = usize::from(self.grid_width / 2) + 1;
        if self.initial_snake_length == 0 || self.initial_snake_length > max_length {
            return Err(ConfigError::SnakeLength {
                length: self.initial_snake_length,
                max: max_length,
            });
        }

        if self.min_interval_ms == 0 {
            return Err(ConfigError::ZeroMinInterval);
        }

        if self.initial_interval_ms < self.min_interval_ms {
            return Err(ConfigError::IntervalBelowMinimum {
                initial: self.initial_interval_ms,
                min: self.min_interval_ms,
            });
        }

        Ok(())
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_hint: Color,
    pub overlay_fg: Color,
}

/// Bright green snake on black.
pub const THEME: Theme = Theme {
    snake_head: Color::Rgb(0x00, 0xff, 0x00),
    snake_body: Color::Rgb(0x66, 0xff, 0x66),
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_score: Color::White,
    hud_hint: Color::DarkGray,
    overlay_fg: Color::White,
};

/// Terminal columns drawn per grid cell, so cells come out roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Glyph filling one grid cell.
pub const GLYPH_CELL: &str = "██";

#[cfg(test)]
mod tests {
    use super::{GameConfig, GridSize};
    use crate::error::ConfigError;

    #[test]
    fn default_config_is_valid_and_matches_stock_game() {
        let config = GameConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(
            config.grid(),
            GridSize {
                width: 30,
                height: 20
            }
        );
        assert_eq!(config.initial_snake_length, 5);
        assert_eq!(config.initial_interval_ms, 120);
        assert_eq!(config.speed_step_ms, 3);
        assert_eq!(config.min_interval_ms, 40);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = GameConfig::from_json(r#"{ "grid_width": 12, "speed_step_ms": 5 }"#)
            .expect("partial config should parse");

        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.speed_step_ms, 5);
        assert_eq!(config.initial_interval_ms, 120);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = GameConfig::from_json(r#"{ "lives": 3 }"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn snake_longer_than_half_the_grid_is_rejected() {
        let config = GameConfig {
            grid_width: 6,
            initial_snake_length: 5,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::SnakeLength { length: 5, max: 4 })
        ));
    }

    #[test]
    fn initial_interval_below_floor_is_rejected() {
        let config = GameConfig {
            initial_interval_ms: 30,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::IntervalBelowMinimum { initial: 30, min: 40 })
        ));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let config = GameConfig {
            grid_height: 0,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let giant = GameConfig::from_json(r#"{ "grid_width": 65535, "grid_height": 65535 }"#);
        assert!(matches!(giant, Err(ConfigError::GridTooLarge { .. })));

        let too_many_cells = GameConfig {
            grid_width: 400,
            grid_height: 200,
            ..GameConfig::default()
        };
        assert!(matches!(
            too_many_cells.validate(),
            Err(ConfigError::GridTooLarge { width: 400, height: 200, .. })
        ));

        let too_wide = GameConfig {
            grid_width: 40_000,
            grid_height: 1,
            ..GameConfig::default()
        };
        assert!(matches!(
            too_wide.validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn largest_allowed_grid_is_accepted() {
        let config = GameConfig {
            grid_width: 256,
            grid_height: 256,
            ..GameConfig::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn total_cells_multiplies_dimensions() {
        assert_eq!(GridSize::default().total_cells(), 600);
    }
}
