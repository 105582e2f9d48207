use async_trait::async_trait;
use finac::{
    auth::{
        ForgotPasswordRequest,
        LoginRequest,
        RegisterRequest,
    },
    observer::Subscription,
    AuthService,
    SessionContext,
};
use finclient::{
    ApiClient,
    EntityService,
    OperationService,
    OperationTypeService,
    ReportService,
};
use fincore::{
    ac::{
        identity::SessionIdentity,
        principal::Principal,
        traits::SessionSlot,
    },
    error::SlotError,
    transport::traits::Transport,
};
use std::sync::Arc;
use tower_sessions::session;

use crate::{
    error::{
        AppError,
        AuthError,
    },
    server::transport,
};

pub const SESSION_KEY: &str = "UserSession";

/// Keeps the session identity in the cookie backed server session.
#[derive(Clone)]
pub struct TowerSessionSlot(session::Session);

impl From<session::Session> for TowerSessionSlot {
    fn from(value: session::Session) -> Self {
        Self(value)
    }
}

fn slot_error(e: session::Error) -> SlotError {
    match e {
        session::Error::SerdeJson(e) => SlotError::Encoding(e.to_string()),
        e => SlotError::Unavailable(e.to_string()),
    }
}

#[async_trait]
impl SessionSlot for TowerSessionSlot {
    async fn load(&self) -> Result<Option<SessionIdentity>, SlotError> {
        self.0.get::<SessionIdentity>(SESSION_KEY)
            .await
            .map_err(slot_error)
    }

    async fn save(&self, identity: &SessionIdentity) -> Result<(), SlotError> {
        self.0.insert(SESSION_KEY, identity)
            .await
            .map_err(slot_error)
    }

    async fn clear(&self) -> Result<(), SlotError> {
        self.0.remove::<SessionIdentity>(SESSION_KEY)
            .await
            .map(|_| ())
            .map_err(slot_error)
    }
}

pub struct Session {
    context: SessionContext,
    client: ApiClient,
    _audit: Subscription,
}

impl Session {
    pub async fn new(
        session: session::Session,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, AppError> {
        let context = SessionContext::restore(Arc::new(TowerSessionSlot::from(session)))
            .await
            .map_err(|e| {
                log::error!("failed to restore session: {e}");
                AppError::InternalServerError
            })?;
        let _audit = context.bridge()
            .subscribe(|state| log::info!("authentication state now {}", state.user));
        let client = context.client(transport);
        Ok(Self {
            context,
            client,
            _audit,
        })
    }

    fn auth(&self) -> AuthService {
        self.context.auth_service(self.client.clone())
    }

    pub fn current_principal(&self) -> Principal {
        self.context.authentication_state().user
    }

    pub fn require_authenticated(&self) -> Result<(), AppError> {
        if self.context.authentication_state().is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }

    pub async fn sign_in(
        &self,
        email: String,
        password: String,
    ) -> Result<String, AuthError> {
        let identity = self.auth()
            .login(&LoginRequest { email, password })
            .await?;
        Ok(format!("Logged in as {}.", identity.name))
    }

    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    ) -> Result<String, AuthError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        let identity = self.auth()
            .register(&RegisterRequest {
                email,
                password,
                confirm_password,
                name,
            })
            .await?;
        Ok(format!("Welcome, {}.", identity.name))
    }

    pub async fn forgot_password(&self, email: String) -> Result<String, AuthError> {
        Ok(self.auth()
            .forgot_password(&ForgotPasswordRequest { email })
            .await?)
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.auth()
            .logout()
            .await
            .map_err(|_| AuthError::InternalServerError)
    }

    pub fn operations(&self) -> OperationService {
        OperationService::new(self.client.clone())
    }

    pub fn operation_types(&self) -> OperationTypeService {
        OperationTypeService::new(self.client.clone())
    }

    pub fn entities(&self) -> EntityService {
        EntityService::new(self.client.clone())
    }

    pub fn reports(&self) -> ReportService {
        ReportService::new(self.client.clone())
    }
}

pub async fn session() -> Result<Session, AppError> {
    let session = leptos_axum::extract::<session::Session>()
        .await
        .map_err(|_| AppError::InternalServerError)?;
    Session::new(session, transport().await?).await
}
