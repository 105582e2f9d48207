pub mod identity;
pub mod principal;
pub mod traits;
