use fincore::error::SlotError;
use serde::{
    Deserialize,
    Serialize,
};
use std::fmt;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Slot(#[from] SlotError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum AuthAction {
    Login,
    Registration,
    PasswordReset,
}

/// Failure of an account operation, rendered as the message shown to
/// the user.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum AuthError {
    /// The API answered but refused; `detail` is its response body.
    Rejected {
        action: AuthAction,
        detail: String,
    },
    /// The exchange itself failed; details go to the log only.
    Unexpected {
        action: AuthAction,
    },
}

impl AuthAction {
    fn title(&self) -> &'static str {
        match self {
            AuthAction::Login => "Login",
            AuthAction::Registration => "Registration",
            AuthAction::PasswordReset => "Password reset",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            AuthAction::Login => "login",
            AuthAction::Registration => "registration",
            AuthAction::PasswordReset => "password reset",
        }
    }
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::Rejected { action, detail } =>
                write!(f, "{} failed: {detail}", action.title()),
            AuthError::Unexpected { action } =>
                write!(f, "An error occurred during {}. Please try again.", action.noun()),
        }
    }
}

impl std::error::Error for AuthError {}
