use clap::Parser;
use finclient::ApiConfig;

#[derive(Debug, Parser)]
pub struct Cli {
    #[clap(flatten)]
    pub api: ApiConfig,
    /// Days of inactivity before a session expires.
    #[clap(long, value_name = "SESSION_EXPIRY_DAYS", env = "SESSION_EXPIRY_DAYS", default_value = "1")]
    pub session_expiry_days: i64,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
