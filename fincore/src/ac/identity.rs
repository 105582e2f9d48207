use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the remote auth endpoints.
///
/// This is always replaced as a whole; there are no setters for the
/// individual fields.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

mod impls;
