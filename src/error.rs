use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the host surface: terminal, settings file, logger.
///
/// The simulation itself never fails; collisions are state transitions.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal or file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
