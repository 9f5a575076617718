use std::io;

use thiserror::Error;

/// Malformed initial-state description.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("expected marker `{expected}`, found `{found}`")]
    UnexpectedMarker { expected: char, found: String },
    #[error("unknown direction letter `{0}`")]
    UnknownDirection(String),
    #[error("configuration ended early, missing {0}")]
    MissingToken(&'static str),
    #[error("invalid number `{value}` for {field}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("snake body must contain at least one segment")]
    EmptyBody,
}

/// Run-time contract violation raised by the event dispatcher.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ControllerError {
    #[error("unexpected event received: {kind}")]
    UnexpectedEvent { kind: &'static str },
}

/// Application-level error for the binary entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bad configuration of snake controller: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("malformed message: {0}")]
    Codec(#[from] serde_json::Error),
}
