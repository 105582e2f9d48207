use async_trait::async_trait;
use fincore::{
    error::TransportError,
    transport::{
        ApiRequest,
        ApiResponse,
        traits::Transport,
    },
};
use http::StatusCode;
use mockall::mock;
use serde_json::Value;

mock! {
    pub ApiTransport {}

    #[async_trait]
    impl Transport for ApiTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
    }
}

pub fn json_response(status: u16, value: Value) -> ApiResponse {
    ApiResponse::new(
        StatusCode::from_u16(status).expect("valid status code"),
        value.to_string(),
    )
}

pub fn text_response(status: u16, body: &str) -> ApiResponse {
    ApiResponse::new(
        StatusCode::from_u16(status).expect("valid status code"),
        body,
    )
}
