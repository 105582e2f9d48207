pub mod ac;
pub mod entity;
pub mod error;
pub mod operation;
pub mod operation_type;
pub mod report;
pub mod transport;
