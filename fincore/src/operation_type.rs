use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationType {
    #[serde(default)]
    pub operation_type_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_income: bool,
}

pub type OperationTypes = Vec<OperationType>;

impl OperationType {
    /// Partition into `(income, expense)`, each retaining the original
    /// order.
    pub fn split_by_kind(
        types: impl IntoIterator<Item = OperationType>,
    ) -> (OperationTypes, OperationTypes) {
        types.into_iter()
            .partition(|t| t.is_income)
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_income {
            "Income"
        } else {
            "Expense"
        }
    }
}
