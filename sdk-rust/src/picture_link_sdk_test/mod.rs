//! In-memory stand-ins for the clients, for testing code built on the
//! [`AuthService`](crate::AuthService) and [`LinkService`](crate::LinkService)
//! traits without a backend.
mod auth;
mod links;
mod storage;

pub use auth::{MockAuthResult, MockAuthService};
pub use links::{LinkCall, LinkOperation, MockLinkService};
pub use storage::MemoryStorage;
