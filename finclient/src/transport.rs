use async_trait::async_trait;
use fincore::{
    error::TransportError,
    transport::{
        ApiRequest,
        ApiResponse,
        traits::Transport,
    },
};
use reqwest::{
    Client,
    Url,
};
use std::time::Duration;

/// `Transport` issuing real HTTP requests relative to a base address.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        // without the trailing slash `Url::join` would drop the last
        // path segment of the base.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)
        } else {
            Url::parse(&format!("{base_url}/"))
        }
            .map_err(|e| TransportError::Request(format!("{base_url}: {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::Request(format!("{path}: {e}")))
    }
}

fn from_reqwest(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_builder() {
        TransportError::Request(error.to_string())
    } else {
        TransportError::Connection(error.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path)?;
        let mut builder = self.client.request(request.method, url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }
        let response = builder.send()
            .await
            .map_err(from_reqwest)?;
        let status = response.status();
        let body = response.text()
            .await
            .map_err(from_reqwest)?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url() -> anyhow::Result<()> {
        let transport = HttpTransport::new("http://localhost:5000", Duration::from_secs(1))?;
        assert_eq!(transport.base_url().as_str(), "http://localhost:5000/");
        assert_eq!(
            transport.url_for("api/operations")?.as_str(),
            "http://localhost:5000/api/operations",
        );

        let transport = HttpTransport::new("http://localhost:5000/finance/", Duration::from_secs(1))?;
        assert_eq!(
            transport.url_for("/api/operations/3")?.as_str(),
            "http://localhost:5000/finance/api/operations/3",
        );
        Ok(())
    }

    #[test]
    fn invalid_base_url() {
        assert!(matches!(
            HttpTransport::new("not a url", Duration::from_secs(1)),
            Err(TransportError::Request(_)),
        ));
    }
}
