use fincore::operation_type::OperationTypes;
use leptos::server;

use crate::error::AppError;

#[cfg(feature = "ssr")]
mod ssr {
    pub use fincore::{
        entity::{
            EditMode,
            Entity,
        },
        operation_type::OperationType,
    };
    pub use crate::server::ac::session;
}

#[cfg(feature = "ssr")]
use self::ssr::*;

#[server]
pub(crate) async fn list_operation_types() -> Result<OperationTypes, AppError> {
    let session = session().await?;
    session.require_authenticated()?;
    Ok(session.operation_types().list().await?)
}

#[server]
pub(crate) async fn save_operation_type(
    id: Option<i64>,
    name: String,
    description: Option<String>,
    is_income: bool,
) -> Result<String, AppError> {
    let session = session().await?;
    session.require_authenticated()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest);
    }
    let mode = EditMode::from(id);
    let operation_type = OperationType {
        operation_type_id: id.unwrap_or_default(),
        name,
        description: description.filter(|d| !d.trim().is_empty()),
        is_income,
    };
    session.entities().save(mode, operation_type.into()).await?;
    Ok(format!("Operation type successfully {}!", mode.verb()))
}

#[server]
pub(crate) async fn delete_operation_type(id: i64) -> Result<String, AppError> {
    let session = session().await?;
    session.require_authenticated()?;
    let entity = Entity::from(OperationType {
        operation_type_id: id,
        .. Default::default()
    });
    session.entities().delete(&entity).await?;
    Ok("Operation type successfully deleted!".to_string())
}
