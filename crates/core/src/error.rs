use thiserror::Error;

/// Shared error type used across all RezGenie crates.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
}
