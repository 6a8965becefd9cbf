use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnakeError {
    #[error("Player id out of range: {0}")]
    InvalidPlayer(u8),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No free interior cell left for food")]
    ArenaFull,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnakeError>;
