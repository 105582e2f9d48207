pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod report;
pub mod service;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use report::ReportService;
pub use service::{
    CrudService,
    EntityService,
    OperationService,
    OperationTypeService,
};
