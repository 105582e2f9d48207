use fincore::{
    operation::Operation,
    operation_type::OperationType,
    transport::ApiRequest,
};
use http::StatusCode;
use serde::{
    de::DeserializeOwned,
    Serialize,
};
use std::marker::PhantomData;

use crate::{
    client::{
        ApiClient,
        decode,
        instrument,
    },
    endpoint,
    error::{
        ApiError,
        ErrorKind,
    },
};

mod entity;
pub use entity::EntityService;

/// A record exposed by the remote API as a plain REST collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// Collection path, e.g. `api/operations`.
    const PATH: &'static str;
    /// Used in log and error messages.
    const NAME: &'static str;
    const NAME_PLURAL: &'static str;
}

impl Record for Operation {
    const PATH: &'static str = endpoint::OPERATIONS;
    const NAME: &'static str = "operation";
    const NAME_PLURAL: &'static str = "operations";
}

impl Record for OperationType {
    const PATH: &'static str = endpoint::OPERATION_TYPES;
    const NAME: &'static str = "operation type";
    const NAME_PLURAL: &'static str = "operation types";
}

pub struct CrudService<T> {
    client: ApiClient,
    _record: PhantomData<fn() -> T>,
}

pub type OperationService = CrudService<Operation>;
pub type OperationTypeService = CrudService<OperationType>;

impl<T> Clone for CrudService<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> CrudService<T> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{id}", T::PATH)
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        instrument(format!("Failed to load {}", T::NAME_PLURAL), async {
            let records = self.client
                .fetch_json::<Vec<T>>(ApiRequest::get(T::PATH))
                .await?;
            Ok::<_, ErrorKind>(records.unwrap_or_default())
        }).await
    }

    /// A missing record is `Ok(None)` rather than an error.
    pub async fn get(&self, id: i64) -> Result<Option<T>, ApiError> {
        instrument(format!("Failed to load {} {id}", T::NAME), async {
            let response = self.client
                .execute(ApiRequest::get(Self::item_path(id)))
                .await?;
            match response.status {
                StatusCode::NOT_FOUND => Ok(None),
                status if status.is_success() => decode(&response.body),
                status => Err(ErrorKind::Status {
                    status,
                    body: response.body,
                }),
            }
        }).await
    }

    pub async fn create(&self, record: &T) -> Result<T, ApiError> {
        instrument(format!("Failed to create {}", T::NAME), async {
            self.client
                .fetch_json::<T>(ApiRequest::post(T::PATH).json(record)?)
                .await?
                .ok_or(ErrorKind::Empty)
        }).await
    }

    pub async fn update(&self, id: i64, record: &T) -> Result<(), ApiError> {
        instrument(format!("Failed to update {} {id}", T::NAME), async {
            self.client
                .execute_ok(ApiRequest::put(Self::item_path(id)).json(record)?)
                .await?;
            Ok::<_, ErrorKind>(())
        }).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        instrument(format!("Failed to delete {} {id}", T::NAME), async {
            self.client
                .execute_ok(ApiRequest::delete(Self::item_path(id)))
                .await?;
            Ok::<_, ErrorKind>(())
        }).await
    }
}
