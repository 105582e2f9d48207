use fincore::{
    ac::{
        identity::SessionIdentity,
        traits::SessionSlot,
    },
    transport::{
        ApiRequest,
        ApiResponse,
    },
};
use finclient::{
    client::{
        decode,
        instrument,
        ApiClient,
    },
    endpoint,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::sync::Arc;

use crate::{
    error::{
        AuthAction,
        AuthError,
        Error,
    },
    store::SessionStore,
};

pub const PASSWORD_RESET_SENT: &str =
    "Password reset instructions have been sent to your email.";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Account operations against the remote API.  A successful login or
/// registration is written to the durable slot (when present) and then
/// assigned to the session store, which in turn informs every listener
/// of the session.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    store: SessionStore,
    slot: Option<Arc<dyn SessionSlot>>,
}

impl AuthService {
    pub fn new(client: ApiClient, store: SessionStore) -> Self {
        Self {
            client,
            store,
            slot: None,
        }
    }

    pub fn with_slot(mut self, slot: Arc<dyn SessionSlot>) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn current_identity(&self) -> Option<SessionIdentity> {
        self.store.current_identity()
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<SessionIdentity, AuthError> {
        self.authenticate(AuthAction::Login, endpoint::AUTH_LOGIN, request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<SessionIdentity, AuthError> {
        self.authenticate(AuthAction::Registration, endpoint::AUTH_REGISTER, request).await
    }

    /// On success returns the confirmation message for the user.
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<String, AuthError> {
        let action = AuthAction::PasswordReset;
        let response = self.post(action, endpoint::AUTH_FORGOT_PASSWORD, request).await?;
        if response.is_success() {
            Ok(PASSWORD_RESET_SENT.to_string())
        } else {
            Err(AuthError::Rejected {
                action,
                detail: response.body,
            })
        }
    }

    /// The session becomes anonymous even if the durable slot could
    /// not be cleared; that failure is still reported.
    pub async fn logout(&self) -> Result<(), Error> {
        let cleared = match &self.slot {
            Some(slot) => slot.clear().await,
            None => Ok(()),
        };
        self.store.set_current_identity(None);
        cleared.map_err(|e| {
            log::error!("failed to clear stored session: {e}");
            e.into()
        })
    }

    async fn post(
        &self,
        action: AuthAction,
        path: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse, AuthError> {
        let request = ApiRequest::post(path)
            .json(body)
            .map_err(|e| {
                log::error!("Error encoding {action} request: {e}");
                AuthError::Unexpected { action }
            })?;
        instrument(
            format!("Error during {action}"),
            self.client.execute(request),
        )
            .await
            .map_err(|_| AuthError::Unexpected { action })
    }

    async fn authenticate(
        &self,
        action: AuthAction,
        path: &str,
        body: &impl Serialize,
    ) -> Result<SessionIdentity, AuthError> {
        let response = self.post(action, path, body).await?;
        if !response.is_success() {
            log::info!("{action} rejected with status {}", response.status);
            return Err(AuthError::Rejected {
                action,
                detail: response.body,
            });
        }
        let identity = match decode::<SessionIdentity>(&response.body) {
            Ok(Some(identity)) => identity,
            Ok(None) => return Err(AuthError::Rejected {
                action,
                detail: response.body,
            }),
            Err(e) => {
                log::error!("Error during {action}: {e}");
                return Err(AuthError::Unexpected { action });
            }
        };
        if let Some(slot) = &self.slot {
            slot.save(&identity)
                .await
                .map_err(|e| {
                    log::error!("Error during {action}: failed to store session: {e}");
                    AuthError::Unexpected { action }
                })?;
        }
        log::info!("{action} succeeded for {identity}");
        self.store.set_current_identity(Some(identity.clone()));
        Ok(identity)
    }
}
