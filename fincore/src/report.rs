use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::ValueError,
    operation::{
        Operation,
        Operations,
    },
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_income: f64,
    pub total_expenses: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub operations: Operations,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_income: f64,
    pub total_expenses: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub operations: Operations,
}

/// Selects which line items of a report are shown.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub enum IncomeFilter {
    #[default]
    All,
    Income,
    Expense,
}

pub trait Report {
    fn operations(&self) -> &[Operation];
    fn total_income(&self) -> f64;
    fn total_expenses(&self) -> f64;

    /// Line items matching the filter, in report order.  Items lacking
    /// an operation type only ever match `IncomeFilter::All`.
    fn filter_operations(&self, filter: IncomeFilter) -> Operations {
        self.operations()
            .iter()
            .filter(|operation| filter.matches(operation))
            .cloned()
            .collect()
    }
}

mod impls;

fn null_as_empty<'de, D>(deserializer: D) -> Result<Operations, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Operations>::deserialize(deserializer)?
        .unwrap_or_default())
}

pub fn parse_date(value: &str) -> Result<NaiveDate, ValueError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValueError::InvalidDate(value.to_string()))
}
