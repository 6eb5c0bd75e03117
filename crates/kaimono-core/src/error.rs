use thiserror::Error;

#[derive(Debug, Error)]
pub enum KaimonoError {
    #[error("Item name is empty")]
    EmptyItemName,

    #[error("Invalid store key: '{key}' - must contain only alphanumeric, hyphen, underscore")]
    InvalidKey { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Home directory not found")]
    HomeNotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, KaimonoError>;
