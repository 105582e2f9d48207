use fincore::entity::{
    EditMode,
    Entity,
};

use crate::{
    client::ApiClient,
    error::ApiError,
};
use super::{
    OperationService,
    OperationTypeService,
};

/// Dispatches editor submissions to the service owning the entity.
#[derive(Clone)]
pub struct EntityService {
    operations: OperationService,
    operation_types: OperationTypeService,
}

impl EntityService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            operations: OperationService::new(client.clone()),
            operation_types: OperationTypeService::new(client),
        }
    }

    pub fn operations(&self) -> &OperationService {
        &self.operations
    }

    pub fn operation_types(&self) -> &OperationTypeService {
        &self.operation_types
    }

    /// Create or update the entity; returns the entity as it is now
    /// known, i.e. the server's copy for a creation.
    pub async fn save(&self, mode: EditMode, entity: Entity) -> Result<Entity, ApiError> {
        match (mode, entity) {
            (EditMode::Create, Entity::Operation(operation)) => Ok(
                self.operations.create(&operation).await?.into()
            ),
            (EditMode::Create, Entity::OperationType(operation_type)) => Ok(
                self.operation_types.create(&operation_type).await?.into()
            ),
            (EditMode::Update(id), Entity::Operation(operation)) => {
                self.operations.update(id, &operation).await?;
                Ok(operation.into())
            }
            (EditMode::Update(id), Entity::OperationType(operation_type)) => {
                self.operation_types.update(id, &operation_type).await?;
                Ok(operation_type.into())
            }
        }
    }

    pub async fn delete(&self, entity: &Entity) -> Result<(), ApiError> {
        match entity {
            Entity::Operation(operation) =>
                self.operations.delete(operation.operation_id).await,
            Entity::OperationType(operation_type) =>
                self.operation_types.delete(operation_type.operation_type_id).await,
        }
    }
}
