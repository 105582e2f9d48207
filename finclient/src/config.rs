use fincore::error::TransportError;
use std::time::Duration;

use crate::transport::HttpTransport;

#[cfg_attr(feature = "clap", derive(clap::Parser))]
#[derive(Clone, Debug)]
pub struct ApiConfig {
    #[cfg_attr(feature = "clap", clap(long, value_name = "API_URL", env = "API_URL"))]
    pub api_url: String,
    /// Seconds before an outbound request is abandoned.
    #[cfg_attr(feature = "clap", clap(
        long,
        value_name = "API_TIMEOUT",
        env = "API_TIMEOUT",
        default_value_t = 30,
    ))]
    pub api_timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/".to_string(),
            api_timeout: 30,
        }
    }
}

impl ApiConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            .. Default::default()
        }
    }

    pub fn api_timeout(mut self, value: u64) -> Self {
        self.api_timeout = value;
        self
    }

    pub fn transport(&self) -> Result<HttpTransport, TransportError> {
        HttpTransport::new(&self.api_url, Duration::from_secs(self.api_timeout))
    }
}
