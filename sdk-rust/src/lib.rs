pub mod auth;
mod client_utils;
pub mod config;
mod errors;
mod events;
pub mod firestore;
mod opentelemetry;
pub mod picture_link_sdk_test;
mod service;
pub mod storage;
mod types;
pub mod validation;

pub use auth::{AuthClient, AuthClientOptions};
pub use config::FirebaseConfig;
pub use errors::*;
pub use firestore::{LinkStoreClient, LinkStoreClientOptions};
pub use service::{AuthService, LinkService};
pub use storage::StorageBackend;
pub use types::*;
