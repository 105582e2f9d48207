use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("session storage encoding error: {0}")]
    Encoding(String),
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid request: {0}")]
    Request(String),
    #[error("connection error: {0}")]
    Connection(String),
    #[error("request timed out")]
    Timeout,
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
