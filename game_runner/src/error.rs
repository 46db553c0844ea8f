use lib_agents::InputError;
use lib_reversi::DimensionsError;
use std::path::PathBuf;

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

/// Anything that stops the program before or while setting up a game.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not read the board size: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    Dimensions(#[from] DimensionsError),

    #[error("could not write to the console: {0}")]
    Output(#[from] std::io::Error),
}
