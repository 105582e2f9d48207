use async_trait::async_trait;

use crate::error::TransportError;
use super::{
    ApiRequest,
    ApiResponse,
};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
