use std::fmt;

use crate::core::provider::Props;

#[derive(Debug)]
pub enum Error {
    /// The controller answered with a non-2xx status.
    Http { status: u16, body: String },
    /// No record in the listing carries the requested identity.
    RecordNotFound { id: String, props: Props },
    /// The controller broke its contract, e.g. created a record without an identity.
    InvariantViolation(String),
    Validation(String),
    Transport(String),
    UnresolvedInput(String),
    Config(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http { status, body } => write!(f, "HTTP error {status}: {body}"),
            Error::RecordNotFound { id, props } => {
                let props = serde_json::Value::Object(props.clone());
                write!(f, "DNS record not found: {id} (props: {props})")
            }
            Error::InvariantViolation(msg) => write!(f, "Invariant violation: {msg}"),
            Error::Validation(msg) => write!(f, "Validation error: {msg}"),
            Error::Transport(msg) => write!(f, "Transport error: {msg}"),
            Error::UnresolvedInput(name) => write!(f, "Input was never resolved: {name}"),
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_http() {
        let err = Error::Http {
            status: 404,
            body: "{\"error\":\"not found\"}".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 404: {\"error\":\"not found\"}");
    }

    #[test]
    fn test_display_record_not_found() {
        let err = Error::RecordNotFound {
            id: "abc123".to_string(),
            props: Props::new(),
        };
        assert!(err.to_string().contains("abc123"));
    }
}
