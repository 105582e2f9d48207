use leptos::server_fn::{
    codec::JsonEncoding,
    error::{
        FromServerFnError,
        ServerFnErrorErr,
    },
};
use http::status::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    #[error("400 Bad Request")]
    BadRequest,
    #[error("401 Unauthorized")]
    Unauthorized,
    #[error("403 Forbidden")]
    Forbidden,
    #[error("404 Not Found")]
    NotFound,

    #[error("500 Internal Server Error")]
    InternalServerError,
    /// The finance API failed; carries the message shown to the user.
    #[error("{0}")]
    Upstream(String),

    // other non-http error
    #[error("Network Error")]
    NetworkError,
    #[error("Encode/decode error")]
    SerdeError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StatusCode> for AppError {
    // Only convert into status known to AppError
    fn from(value: StatusCode) -> Self {
        match value {
            StatusCode::BAD_REQUEST => AppError::BadRequest,
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::FORBIDDEN => AppError::Forbidden,
            _ => AppError::InternalServerError,
        }
    }
}

impl FromServerFnError for AppError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(e: ServerFnErrorErr) -> Self {
        match e {
            ServerFnErrorErr::Request(_) => Self::NetworkError,
            ServerFnErrorErr::Deserialization(_) |
            ServerFnErrorErr::Serialization(_) => Self::SerdeError,
            _ => Self::InternalServerError,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum AuthError {
    /// Rejection or failure reported by the account service.
    #[error("{0}")]
    Failed(String),
    #[error("Password and confirmation do not match")]
    PasswordMismatch,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Network error")]
    NetworkError,
    #[error("Encoding error (is the application out of date?)")]
    SerdeError,
}

impl FromServerFnError for AuthError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(e: ServerFnErrorErr) -> Self {
        match e {
            ServerFnErrorErr::Request(_) => Self::NetworkError,
            ServerFnErrorErr::Deserialization(_) |
            ServerFnErrorErr::Serialization(_) => Self::SerdeError,
            _ => Self::InternalServerError,
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr {
    use axum::response::{IntoResponse, Response};
    use finclient::error::ApiError;
    use fincore::error::ValueError;
    use http::status::StatusCode;
    use super::{AppError, AuthError};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            (self.status_code(), self.to_string()).into_response()
        }
    }

    impl From<ApiError> for AppError {
        fn from(e: ApiError) -> Self {
            match e.status() {
                Some(StatusCode::UNAUTHORIZED) => AppError::Unauthorized,
                Some(StatusCode::FORBIDDEN) => AppError::Forbidden,
                Some(StatusCode::NOT_FOUND) => AppError::NotFound,
                _ => AppError::Upstream(e.to_string()),
            }
        }
    }

    impl From<ValueError> for AppError {
        fn from(_: ValueError) -> Self {
            AppError::BadRequest
        }
    }

    impl From<finac::error::AuthError> for AuthError {
        fn from(e: finac::error::AuthError) -> Self {
            AuthError::Failed(e.to_string())
        }
    }
}
