use fincore::report::{
    DailyReport,
    PeriodReport,
};
use leptos::server;

use crate::error::AppError;

#[cfg(feature = "ssr")]
mod ssr {
    pub use fincore::report::parse_date;
    pub use crate::server::ac::session;
}

#[cfg(feature = "ssr")]
use self::ssr::*;

#[server]
pub(crate) async fn generate_daily_report(date: String) -> Result<DailyReport, AppError> {
    let session = session().await?;
    session.require_authenticated()?;
    Ok(session.reports().daily(parse_date(&date)?).await?)
}

#[server]
pub(crate) async fn generate_period_report(
    start_date: String,
    end_date: String,
) -> Result<PeriodReport, AppError> {
    let session = session().await?;
    session.require_authenticated()?;
    Ok(session.reports()
        .period(parse_date(&start_date)?, parse_date(&end_date)?)
        .await?)
}
