use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;

/// Sends all `log` output at debug level and above to `path`.
///
/// The terminal belongs to the game while it runs, so logs only ever go to a
/// file.
pub fn init_file_logger(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    Ok(())
}
