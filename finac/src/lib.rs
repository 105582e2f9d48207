pub mod auth;
pub mod bridge;
pub mod context;
pub mod error;
pub mod identity;
pub mod observer;
pub mod store;

pub use auth::AuthService;
pub use bridge::AuthStateBridge;
pub use context::SessionContext;
pub use store::SessionStore;
