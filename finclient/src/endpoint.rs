//! Paths on the remote API, relative to the configured base address.

pub const AUTH_LOGIN: &str = "api/auth/login";
pub const AUTH_REGISTER: &str = "api/auth/register";
pub const AUTH_FORGOT_PASSWORD: &str = "api/auth/forgot-password";

pub const OPERATIONS: &str = "api/operations";
pub const OPERATION_TYPES: &str = "api/operationtypes";

pub const DAILY_REPORT: &str = "api/dailyreport/report/daily";
pub const PERIOD_REPORT: &str = "api/periodreport/report/period";
