use fincore::{
    operation::Operations,
    operation_type::OperationTypes,
};
use leptos::server;

use crate::error::AppError;

#[cfg(feature = "ssr")]
mod ssr {
    pub use fincore::{
        entity::EditMode,
        operation::{
            map_operation_types,
            Operation,
        },
        report::parse_date,
    };
    pub use crate::server::ac::session;
}

#[cfg(feature = "ssr")]
use self::ssr::*;

/// All operations with their types attached, and the types available
/// to the editor.
#[server]
pub(crate) async fn load_operations() -> Result<(Operations, OperationTypes), AppError> {
    let session = session().await?;
    session.require_authenticated()?;
    // the listing remains usable without type names
    let types = session.operation_types()
        .list()
        .await
        .unwrap_or_else(|e| {
            log::warn!("{e}");
            Vec::new()
        });
    let mut operations = session.operations().list().await?;
    map_operation_types(&mut operations, &types);
    log::trace!("loaded {} operations", operations.len());
    Ok((operations, types))
}

#[server]
pub(crate) async fn save_operation(
    id: Option<i64>,
    date: String,
    amount: f64,
    note: Option<String>,
    operation_type_id: i64,
) -> Result<String, AppError> {
    let session = session().await?;
    session.require_authenticated()?;
    let mode = EditMode::from(id);
    let operation = Operation {
        operation_id: id.unwrap_or_default(),
        date: parse_date(&date)?,
        amount,
        note: note.filter(|note| !note.trim().is_empty()),
        operation_type_id,
        operation_type: None,
    };
    session.entities().save(mode, operation.into()).await?;
    Ok(format!("Operation successfully {}!", mode.verb()))
}

#[server]
pub(crate) async fn delete_operation(id: i64) -> Result<String, AppError> {
    let session = session().await?;
    session.require_authenticated()?;
    session.operations().delete(id).await?;
    Ok("Operation successfully deleted!".to_string())
}
