use fincore::ac::principal::Principal;
use leptos::server;

use crate::error::{
    AppError,
    AuthError,
};

#[cfg(feature = "ssr")]
use crate::server::ac::session;

#[server]
pub(crate) async fn sign_in(
    email: String,
    password: String,
) -> Result<String, AuthError> {
    let session = session().await
        .map_err(|_| AuthError::InternalServerError)?;
    let message = session.sign_in(email, password).await?;
    leptos_axum::redirect("/");
    Ok(message)
}

#[server]
pub(crate) async fn register(
    name: String,
    email: String,
    password: String,
    confirm_password: String,
) -> Result<String, AuthError> {
    let session = session().await
        .map_err(|_| AuthError::InternalServerError)?;
    let message = session.register(name, email, password, confirm_password).await?;
    leptos_axum::redirect("/");
    Ok(message)
}

#[server]
pub(crate) async fn forgot_password(
    email: String,
) -> Result<String, AuthError> {
    let session = session().await
        .map_err(|_| AuthError::InternalServerError)?;
    session.forgot_password(email).await
}

#[server]
pub(crate) async fn sign_out() -> Result<(), AuthError> {
    let session = session().await
        .map_err(|_| AuthError::InternalServerError)?;
    session.sign_out().await?;
    leptos_axum::redirect("/logged_out");
    Ok(())
}

#[server]
pub(crate) async fn current_principal() -> Result<Principal, AppError> {
    Ok(session().await?.current_principal())
}
