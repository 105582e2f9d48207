use fincore::{
    ac::traits::BearerSource,
    transport::{
        ApiRequest,
        ApiResponse,
        traits::Transport,
    },
};
use serde::de::DeserializeOwned;
use std::{
    future::Future,
    sync::Arc,
};

use crate::error::{
    ApiError,
    ErrorKind,
};

/// Handle to the remote API.  Cheap to clone; clones share the same
/// transport and bearer source.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    bearer: Option<Arc<dyn BearerSource>>,
}

impl ApiClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    pub fn from_arc(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            bearer: None,
        }
    }

    /// Attach the credential provided by `source` to every request
    /// issued through the returned client.
    pub fn with_bearer(mut self, source: impl BearerSource + 'static) -> Self {
        self.bearer = Some(Arc::new(source));
        self
    }

    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ErrorKind> {
        let token = self.bearer
            .as_ref()
            .and_then(|source| source.bearer_token())
            .filter(|token| !token.is_empty());
        let request = request.bearer(token);
        log::trace!(
            "{} {} (authorized: {})",
            request.method,
            request.path,
            request.bearer.is_some(),
        );
        let response = self.transport.send(request).await?;
        log::trace!("response status: {}", response.status);
        Ok(response)
    }

    /// As `execute`, but any non-success status is an error.
    pub async fn execute_ok(&self, request: ApiRequest) -> Result<ApiResponse, ErrorKind> {
        let response = self.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ErrorKind::Status {
                status: response.status,
                body: response.body,
            })
        }
    }

    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<T>, ErrorKind> {
        decode(&self.execute_ok(request).await?.body)
    }
}

/// Decode a response body; an empty body or a JSON `null` is `None`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ErrorKind> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<T>>(body)?)
}

/// Wraps an outbound call so that its failure is logged once and
/// reported as an `ApiError` carrying `context`.
pub async fn instrument<T, F>(
    context: impl Into<String>,
    call: F,
) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ErrorKind>>,
{
    call.await.map_err(|kind| {
        let error = ApiError::new(context, kind);
        log::error!("{error}");
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincore::operation_type::OperationType;

    #[test]
    fn decode_empty() -> anyhow::Result<()> {
        assert_eq!(decode::<OperationType>("")?, None);
        assert_eq!(decode::<OperationType>("  null ")?, None);
        assert!(decode::<OperationType>("{").is_err());
        Ok(())
    }

    #[test]
    fn decode_value() -> anyhow::Result<()> {
        let value = decode::<Vec<i64>>("[1, 2]")?;
        assert_eq!(value, Some(vec![1, 2]));
        Ok(())
    }

    #[async_std::test]
    async fn instrument_wraps() {
        let result: Result<(), _> = instrument("Failed to load operations", async {
            Err(ErrorKind::Empty)
        }).await;
        let error = result.expect_err("must fail");
        assert_eq!(error.context, "Failed to load operations");
        assert_eq!(error.to_string(), "Failed to load operations: empty response body");
        assert!(matches!(error.kind, ErrorKind::Empty));
    }
}
