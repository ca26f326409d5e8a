use thiserror::Error;

use crate::types::RequestType;

#[derive(Error, Debug)]
pub enum PatternsError {
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Unhandled request: no handler in the chain accepts {0} requests")]
    UnhandledRequest(RequestType),
}

pub type Result<T> = std::result::Result<T, PatternsError>;
