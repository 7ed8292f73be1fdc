use std::path::PathBuf;

/// Errors returned by the rules engine. None of them are fatal: a call that
/// fails leaves the board and session exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board dimensions {width}x{height} (width 4..=15, height 4..=14)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid game config: {0}")]
    InvalidConfig(String),

    #[error("column {column} is out of range (board width {width})")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("session is not accepting moves")]
    NotAcceptingMoves,

    #[error("cell ({x}, {y}) is outside the board")]
    OutOfRange { x: usize, y: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

impl From<EngineError> for ConfigError {
    fn from(err: EngineError) -> Self {
        ConfigError::Validation(err.to_string())
    }
}
