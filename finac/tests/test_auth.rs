use fincore::{
    ac::traits::BearerSource,
    error::{
        SlotError,
        TransportError,
    },
    transport::ApiRequest,
};
use finac::{
    auth::{
        ForgotPasswordRequest,
        LoginRequest,
        RegisterRequest,
        PASSWORD_RESET_SENT,
    },
    error::{
        AuthAction,
        AuthError,
        Error,
    },
    SessionContext,
};
use finclient::endpoint;
use http::Method;
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;
use test_fin::{
    ac::{
        ann,
        MemorySlot,
    },
    core::{
        json_response,
        text_response,
        MockApiTransport,
    },
};

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "ann@x.com".to_string(),
        password: "secret".to_string(),
    }
}

fn ann_json() -> serde_json::Value {
    json!({
        "userId": "1",
        "name": "Ann",
        "email": "ann@x.com",
        "token": "ann-token",
    })
}

#[async_std::test]
async fn login_success() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| {
            request.method == Method::POST
                && request.path == endpoint::AUTH_LOGIN
                && request.bearer.is_none()
                && request.body == Some(json!({
                    "email": "ann@x.com",
                    "password": "secret",
                }))
        })
        .times(1)
        .returning(|_| Ok(json_response(200, ann_json())));

    let slot = MemorySlot::new();
    let context = SessionContext::restore(Arc::new(slot.clone())).await?;
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = seen.clone();
    let _subscription = context.bridge().subscribe(move |state| {
        s.lock().push(state.user.name().map(str::to_string))
    });

    let service = context.auth_service(context.client(Arc::new(transport)));
    let identity = service.login(&login_request()).await?;

    assert_eq!(identity, ann());
    assert_eq!(slot.stored(), Some(ann()));
    assert_eq!(service.current_identity(), Some(ann()));
    assert_eq!(context.store().bearer_token().as_deref(), Some("ann-token"));
    assert_eq!(*seen.lock(), [Some("Ann".to_string())]);
    assert!(context.authentication_state().is_authenticated());
    Ok(())
}

#[async_std::test]
async fn login_rejected() {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .times(1)
        .returning(|_| Ok(text_response(401, "Invalid credentials")));
    let context = SessionContext::new();
    let service = context.auth_service(context.client(Arc::new(transport)));
    let error = service.login(&login_request()).await.unwrap_err();
    assert_eq!(error, AuthError::Rejected {
        action: AuthAction::Login,
        detail: "Invalid credentials".to_string(),
    });
    assert_eq!(error.to_string(), "Login failed: Invalid credentials");
    assert!(!context.authentication_state().is_authenticated());
}

#[async_std::test]
async fn login_null_body_is_rejected() {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .times(1)
        .returning(|_| Ok(text_response(200, "null")));
    let context = SessionContext::new();
    let service = context.auth_service(context.client(Arc::new(transport)));
    let error = service.login(&login_request()).await.unwrap_err();
    assert_eq!(error.to_string(), "Login failed: null");
    assert_eq!(context.store().current_identity(), None);
}

#[async_std::test]
async fn login_transport_failure() {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .times(1)
        .returning(|_| Err(TransportError::Timeout));
    let context = SessionContext::new();
    let service = context.auth_service(context.client(Arc::new(transport)));
    let error = service.login(&login_request()).await.unwrap_err();
    assert_eq!(
        error.to_string(),
        "An error occurred during login. Please try again.",
    );
}

#[async_std::test]
async fn login_malformed_body() {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .times(1)
        .returning(|_| Ok(text_response(200, "{not json")));
    let context = SessionContext::new();
    let service = context.auth_service(context.client(Arc::new(transport)));
    let error = service.login(&login_request()).await.unwrap_err();
    assert_eq!(error, AuthError::Unexpected { action: AuthAction::Login });
    assert!(!context.authentication_state().is_authenticated());
}

#[async_std::test]
async fn login_slot_failure_leaves_session_anonymous() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .times(1)
        .returning(|_| Ok(json_response(200, ann_json())));
    let slot = MemorySlot::new();
    let context = SessionContext::restore(Arc::new(slot.clone())).await?;
    slot.set_failing(true);
    let service = context.auth_service(context.client(Arc::new(transport)));
    let error = service.login(&login_request()).await.unwrap_err();
    assert_eq!(error, AuthError::Unexpected { action: AuthAction::Login });
    assert_eq!(context.store().current_identity(), None);
    Ok(())
}

#[async_std::test]
async fn register_success() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| {
            request.path == endpoint::AUTH_REGISTER
                && request.body == Some(json!({
                    "email": "ann@x.com",
                    "password": "pw",
                    "confirmPassword": "pw",
                    "name": "Ann",
                }))
        })
        .times(1)
        .returning(|_| Ok(json_response(200, ann_json())));
    let context = SessionContext::new();
    let service = context.auth_service(context.client(Arc::new(transport)));
    service.register(&RegisterRequest {
        email: "ann@x.com".to_string(),
        password: "pw".to_string(),
        confirm_password: "pw".to_string(),
        name: "Ann".to_string(),
    }).await?;
    assert_eq!(context.authentication_state().user.email(), Some("ann@x.com"));
    Ok(())
}

#[async_std::test]
async fn register_rejected() {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .times(1)
        .returning(|_| Ok(text_response(400, "Email already registered")));
    let context = SessionContext::new();
    let service = context.auth_service(context.client(Arc::new(transport)));
    let error = service.register(&RegisterRequest {
        email: "ann@x.com".to_string(),
        password: "pw".to_string(),
        confirm_password: "pw".to_string(),
        name: "Ann".to_string(),
    }).await.unwrap_err();
    assert_eq!(error.to_string(), "Registration failed: Email already registered");
}

#[async_std::test]
async fn forgot_password() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| *request == ApiRequest::post(endpoint::AUTH_FORGOT_PASSWORD)
            .body(json!({ "email": "ann@x.com" })))
        .times(1)
        .returning(|_| Ok(text_response(200, "")));
    transport.expect_send()
        .withf(|request| *request == ApiRequest::post(endpoint::AUTH_FORGOT_PASSWORD)
            .body(json!({ "email": "nobody@x.com" })))
        .times(1)
        .returning(|_| Ok(text_response(404, "Unknown email")));
    let context = SessionContext::new();
    let service = context.auth_service(context.client(Arc::new(transport)));

    let message = service.forgot_password(&ForgotPasswordRequest {
        email: "ann@x.com".to_string(),
    }).await?;
    assert_eq!(message, PASSWORD_RESET_SENT);

    let error = service.forgot_password(&ForgotPasswordRequest {
        email: "nobody@x.com".to_string(),
    }).await.unwrap_err();
    assert_eq!(error.to_string(), "Password reset failed: Unknown email");
    Ok(())
}

#[async_std::test]
async fn logout_clears_everything() -> anyhow::Result<()> {
    let slot = MemorySlot::with_identity(ann());
    let context = SessionContext::restore(Arc::new(slot.clone())).await?;
    assert!(context.authentication_state().is_authenticated());
    let transport = MockApiTransport::new();
    let service = context.auth_service(context.client(Arc::new(transport)));
    service.logout().await?;
    assert_eq!(slot.stored(), None);
    assert_eq!(service.current_identity(), None);
    assert!(!context.authentication_state().is_authenticated());
    Ok(())
}

#[async_std::test]
async fn logout_slot_failure_still_anonymous() -> anyhow::Result<()> {
    let slot = MemorySlot::with_identity(ann());
    let context = SessionContext::restore(Arc::new(slot.clone())).await?;
    slot.set_failing(true);
    let service = context.auth_service(context.client(Arc::new(MockApiTransport::new())));
    assert!(matches!(
        service.logout().await,
        Err(Error::Slot(SlotError::Unavailable(_))),
    ));
    assert!(!context.authentication_state().is_authenticated());
    Ok(())
}

#[async_std::test]
async fn session_token_authorizes_requests() -> anyhow::Result<()> {
    let mut transport = MockApiTransport::new();
    transport.expect_send()
        .withf(|request| request.bearer.as_deref() == Some("ann-token"))
        .times(1)
        .returning(|_| Ok(json_response(200, json!([]))));
    let context = SessionContext::restore(Arc::new(MemorySlot::with_identity(ann()))).await?;
    let client = context.client(Arc::new(transport));
    let operations = finclient::OperationService::new(client).list().await?;
    assert!(operations.is_empty());
    Ok(())
}
