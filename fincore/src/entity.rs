use serde::{Deserialize, Serialize};

use crate::{
    operation::Operation,
    operation_type::OperationType,
};

/// The records that may be created, edited or deleted through the
/// editor forms.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum Entity {
    Operation(Operation),
    OperationType(OperationType),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum EditMode {
    Create,
    Update(i64),
}

impl Entity {
    pub fn id(&self) -> i64 {
        match self {
            Entity::Operation(operation) => operation.operation_id,
            Entity::OperationType(operation_type) => operation_type.operation_type_id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Entity::Operation(_) => "Operation",
            Entity::OperationType(_) => "Operation type",
        }
    }

    /// The mode an editor opened on this entity should start in.
    pub fn edit_mode(&self) -> EditMode {
        EditMode::Update(self.id())
    }
}

impl From<Operation> for Entity {
    fn from(value: Operation) -> Self {
        Entity::Operation(value)
    }
}

impl From<OperationType> for Entity {
    fn from(value: OperationType) -> Self {
        Entity::OperationType(value)
    }
}

impl From<Option<i64>> for EditMode {
    fn from(value: Option<i64>) -> Self {
        value.map(EditMode::Update)
            .unwrap_or(EditMode::Create)
    }
}

impl EditMode {
    /// Past tense verb for messages, e.g. "Operation successfully created!"
    pub fn verb(&self) -> &'static str {
        match self {
            EditMode::Create => "created",
            EditMode::Update(_) => "updated",
        }
    }
}
