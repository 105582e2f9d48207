use std::fmt;

use super::*;

impl IncomeFilter {
    pub fn matches(&self, operation: &Operation) -> bool {
        match self {
            IncomeFilter::All => true,
            IncomeFilter::Income => operation.is_income() == Some(true),
            IncomeFilter::Expense => operation.is_income() == Some(false),
        }
    }
}

impl From<Option<bool>> for IncomeFilter {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => IncomeFilter::All,
            Some(true) => IncomeFilter::Income,
            Some(false) => IncomeFilter::Expense,
        }
    }
}

impl From<IncomeFilter> for Option<bool> {
    fn from(value: IncomeFilter) -> Self {
        match value {
            IncomeFilter::All => None,
            IncomeFilter::Income => Some(true),
            IncomeFilter::Expense => Some(false),
        }
    }
}

impl fmt::Display for IncomeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IncomeFilter::All => "All",
            IncomeFilter::Income => "Income",
            IncomeFilter::Expense => "Expense",
        })
    }
}

impl Report for DailyReport {
    fn operations(&self) -> &[Operation] {
        &self.operations
    }

    fn total_income(&self) -> f64 {
        self.total_income
    }

    fn total_expenses(&self) -> f64 {
        self.total_expenses
    }
}

impl Report for PeriodReport {
    fn operations(&self) -> &[Operation] {
        &self.operations
    }

    fn total_income(&self) -> f64 {
        self.total_income
    }

    fn total_expenses(&self) -> f64 {
        self.total_expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_report() -> anyhow::Result<DailyReport> {
        Ok(serde_json::from_str(r#"{
            "date": "2026-01-10",
            "totalIncome": 1000,
            "totalExpenses": 250.25,
            "operations": [
                {
                    "operationId": 1, "date": "2026-01-10", "amount": 1000,
                    "operationTypeId": 1,
                    "operationType": {"operationTypeId": 1, "name": "Salary", "isIncome": true}
                },
                {
                    "operationId": 2, "date": "2026-01-10", "amount": 200,
                    "operationTypeId": 2,
                    "operationType": {"operationTypeId": 2, "name": "Rent", "isIncome": false}
                },
                {
                    "operationId": 3, "date": "2026-01-10", "amount": 50.25,
                    "operationTypeId": 3,
                    "operationType": null
                },
                {
                    "operationId": 4, "date": "2026-01-10", "amount": 0,
                    "operationTypeId": 2,
                    "operationType": {"operationTypeId": 2, "name": "Rent", "isIncome": false}
                }
            ]
        }"#)?)
    }

    fn ids(operations: &[Operation]) -> Vec<i64> {
        operations.iter().map(|o| o.operation_id).collect()
    }

    #[test]
    fn filter_all() -> anyhow::Result<()> {
        let report = daily_report()?;
        assert_eq!(ids(&report.filter_operations(IncomeFilter::All)), [1, 2, 3, 4]);
        Ok(())
    }

    #[test]
    fn filter_income() -> anyhow::Result<()> {
        let report = daily_report()?;
        assert_eq!(ids(&report.filter_operations(IncomeFilter::Income)), [1]);
        Ok(())
    }

    #[test]
    fn filter_expense() -> anyhow::Result<()> {
        let report = daily_report()?;
        assert_eq!(ids(&report.filter_operations(IncomeFilter::Expense)), [2, 4]);
        assert_eq!(report.total_expenses(), 250.25);
        Ok(())
    }

    #[test]
    fn missing_operations() -> anyhow::Result<()> {
        let report: PeriodReport = serde_json::from_str(r#"{
            "startDate": "2026-01-01",
            "endDate": "2026-01-31",
            "totalIncome": 0,
            "totalExpenses": 0
        }"#)?;
        assert!(report.operations.is_empty());
        let report: PeriodReport = serde_json::from_str(r#"{
            "startDate": "2026-01-01",
            "endDate": "2026-01-31",
            "totalIncome": 0,
            "totalExpenses": 0,
            "operations": null
        }"#)?;
        assert!(report.filter_operations(IncomeFilter::Income).is_empty());
        Ok(())
    }

    #[test]
    fn filter_conversion() {
        assert_eq!(IncomeFilter::from(None), IncomeFilter::All);
        assert_eq!(IncomeFilter::from(Some(true)), IncomeFilter::Income);
        assert_eq!(IncomeFilter::from(Some(false)), IncomeFilter::Expense);
        assert_eq!(Option::<bool>::from(IncomeFilter::Expense), Some(false));
    }

    #[test]
    fn dates() {
        assert_eq!(
            parse_date("2026-01-10"),
            Ok(NaiveDate::from_ymd_opt(2026, 1, 10).expect("valid date")),
        );
        assert!(matches!(
            parse_date("10/01/2026"),
            Err(ValueError::InvalidDate(s)) if s == "10/01/2026",
        ));
    }
}
