//! Error types

/// Errors surfaced by the game library
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A command was issued in a state where its contract does not hold
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("invalid rules: {0}")]
    InvalidRules(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("rules parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
