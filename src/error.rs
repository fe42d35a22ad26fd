use std::io;

use thiserror::Error;

/// Failures of the collaborators around the game core.
///
/// The core itself never fails: walls, self-bites and unknown keys are game
/// events, not errors. Everything here is fatal to the process.
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, SnakeError>;
