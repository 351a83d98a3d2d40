use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with a user-supplied game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },

    #[error("grid {width}x{height} is too large, at most {max_cells} cells that fit a terminal row")]
    GridTooLarge {
        width: u16,
        height: u16,
        max_cells: usize,
    },

    #[error("initial snake length {length} must be between 1 and {max} for this grid")]
    SnakeLength { length: usize, max: usize },

    #[error("minimum tick interval must be positive")]
    ZeroMinInterval,

    #[error("initial tick interval {initial}ms is below the minimum {min}ms")]
    IntervalBelowMinimum { initial: u64, min: u64 },
}

/// Top-level failure of the game process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to create log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
