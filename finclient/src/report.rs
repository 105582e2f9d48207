use chrono::NaiveDate;
use fincore::{
    report::{
        DATE_FORMAT,
        DailyReport,
        PeriodReport,
    },
    transport::ApiRequest,
};

use crate::{
    client::{
        ApiClient,
        instrument,
    },
    endpoint,
    error::{
        ApiError,
        ErrorKind,
    },
};

/// Reports are computed by the remote API; this only requests them.
#[derive(Clone)]
pub struct ReportService {
    client: ApiClient,
}

impl ReportService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn daily(&self, date: NaiveDate) -> Result<DailyReport, ApiError> {
        let date = date.format(DATE_FORMAT).to_string();
        instrument(format!("Failed to generate daily report for {date}"), async {
            self.client
                .fetch_json::<DailyReport>(
                    ApiRequest::get(endpoint::DAILY_REPORT)
                        .query("Date", &date)
                )
                .await?
                .ok_or(ErrorKind::Empty)
        }).await
    }

    pub async fn period(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PeriodReport, ApiError> {
        let start_date = start_date.format(DATE_FORMAT).to_string();
        let end_date = end_date.format(DATE_FORMAT).to_string();
        instrument(
            format!("Failed to generate period report for {start_date} to {end_date}"),
            async {
                self.client
                    .fetch_json::<PeriodReport>(
                        ApiRequest::get(endpoint::PERIOD_REPORT)
                            .query("StartDate", &start_date)
                            .query("EndDate", &end_date)
                    )
                    .await?
                    .ok_or(ErrorKind::Empty)
            },
        ).await
    }
}
