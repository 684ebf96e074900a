/// Error types shared by the config loader and the game loop.

use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 1x1 (got {rows}x{cols})")]
    EmptyBoard { rows: i32, cols: i32 },

    /// Unique placement would never terminate.
    #[error("board has {cells} cells but {what} needs {needed}")]
    Overcrowded { what: &'static str, cells: usize, needed: usize },

    #[error("respawn interval must be at least 1 turn")]
    ZeroRespawnInterval,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}
