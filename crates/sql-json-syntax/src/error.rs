use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SqlOpError {
    #[error("{0}")]
    ArityError(String),

    #[error("malformed call: {0}")]
    MalformedCall(String),
}
