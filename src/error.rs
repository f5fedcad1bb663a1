use std::path::PathBuf;

/// Errors that can occur while generating a board pair.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("board size {size} is not a positive perfect square")]
    InvalidSize { size: usize },

    #[error("requested {requested} indexes but only {available} remain in the pool")]
    InsufficientIndexes { requested: usize, available: usize },

    #[error("index {index} is outside the board of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Errors that can occur while exporting a board.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("board of {size} tiles does not form a square grid")]
    NotSquare { size: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
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
