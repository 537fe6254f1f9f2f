// src/error.rs
use thiserror::Error;

/// Reasons a surname cannot be masculinized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurnameError {
    #[error("surname is empty")]
    Empty,

    #[error("surname {surname:?} has nothing left before the suffix {suffix:?}")]
    TooShort { surname: String, suffix: &'static str },
}

/// Everything that can abort a harvest run.
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("malformed profile {id}: missing {field}")]
    Malformed { id: u64, field: &'static str },

    #[error("surname normalization failed: {0}")]
    Normalization(#[from] SurnameError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directory API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = HarvestError> = std::result::Result<T, E>;
