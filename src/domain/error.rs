// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Backend unreachable: {0}")]
    Transport(String),
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected response body: {0}")]
    Decode(String),
    #[error("Unknown emoji: {0}")]
    InvalidEmoji(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
