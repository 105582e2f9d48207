use fincore::error::TransportError;
use http::StatusCode;
use thiserror::Error;

/// Failure of a single outbound call, tagged with what was being
/// attempted.
#[derive(Debug, Error)]
#[error("{context}: {kind}")]
pub struct ApiError {
    pub context: String,
    #[source]
    pub kind: ErrorKind,
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("unexpected status {status}: {body}")]
    Status {
        status: StatusCode,
        body: String,
    },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("empty response body")]
    Empty,
}

impl ApiError {
    pub fn new(context: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            context: context.into(),
            kind,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match &self.kind {
            ErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
