use http::{
    Method,
    StatusCode,
};
use serde_json::Value;

pub mod traits;

/// A request against the remote API, relative to its base address.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

mod impls;
