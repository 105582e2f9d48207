use fincore::transport::traits::Transport;
use std::sync::Arc;

use crate::error::AppError;

pub mod ac;

/// The connection to the finance API shared by every request.
#[derive(Clone)]
pub struct ApiTransport(pub Arc<dyn Transport>);

pub async fn transport() -> Result<Arc<dyn Transport>, AppError> {
    Ok(leptos_axum::extract::<axum::Extension<ApiTransport>>()
        .await
        .map_err(|_| AppError::InternalServerError)?
        .0
        .0
    )
}
