use reqwest::StatusCode;
use thiserror::Error;

use crate::error::Error;

#[derive(Error, Debug)]
pub enum UnifiError {
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API token is not a valid header value: {0}")]
    InvalidToken(String),
}

pub fn map_error(e: UnifiError) -> Error {
    use UnifiError::*;
    match e {
        Status { status, body } => Error::Http {
            status: status.as_u16(),
            body,
        },
        Transport(err) => Error::Transport(err.to_string()),
        Json(err) => Error::Validation(err.to_string()),
        InvalidToken(msg) => Error::Config(msg),
    }
}
