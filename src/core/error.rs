use thiserror::Error;

#[derive(Error, Debug)]
pub enum TierError {
    #[error("Tier store unavailable: {0}")]
    TierStore(String),

    #[error("Experience source unavailable for user {0:?}: {1}")]
    ExperienceSource(crate::core::types::UserId, String),

    #[error("Malformed tier '{name}': {reason}")]
    MalformedTier { name: String, reason: String },

    #[error("Arithmetic overflow while resolving: {0}")]
    Overflow(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TierError>;
