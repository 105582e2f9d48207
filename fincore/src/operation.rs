use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::operation_type::OperationType;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub operation_id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
    pub operation_type_id: i64,
    // Reports embed the type as `operationType`; listings leave this
    // empty and it gets filled in by `map_operation_types`.
    #[serde(
        default,
        alias = "operationTypeModel",
        skip_serializing_if = "Option::is_none",
    )]
    pub operation_type: Option<OperationType>,
}

pub type Operations = Vec<Operation>;

impl Operation {
    pub fn is_income(&self) -> Option<bool> {
        self.operation_type
            .as_ref()
            .map(|t| t.is_income)
    }

    pub fn type_name(&self) -> Option<&str> {
        self.operation_type
            .as_ref()
            .map(|t| t.name.as_str())
    }
}

/// Attach the matching operation type to every operation; operations
/// referencing an unknown type end up with `None`.
pub fn map_operation_types(
    operations: &mut [Operation],
    types: &[OperationType],
) {
    for operation in operations.iter_mut() {
        operation.operation_type = types.iter()
            .find(|t| t.operation_type_id == operation.operation_type_id)
            .cloned();
    }
}
