#![allow(dead_code)]
pub mod stub;

use picture_link_sdk::{
    storage::StorageBackend, AuthClient, AuthClientOptions, LinkStoreClient,
    LinkStoreClientOptions,
};
use std::sync::Arc;
pub use stub::{start_stub_backend, StubBackend, API_KEY, BUCKET, PROJECT_ID};

pub const ADMIN_EMAIL: &str = "admin@example.com";

pub fn auth_client(stub: &StubBackend) -> AuthClient {
    AuthClient::new(AuthClientOptions {
        api_key: API_KEY.to_string(),
        admin_emails: [ADMIN_EMAIL.to_string()].into_iter().collect(),
        base_url: Some(stub.auth_base_url()),
        client: None,
    })
}

pub fn link_store(stub: &StubBackend, storage: Option<Arc<dyn StorageBackend>>) -> LinkStoreClient {
    LinkStoreClient::new(LinkStoreClientOptions {
        project_id: PROJECT_ID.to_string(),
        base_url: Some(stub.firestore_base_url()),
        client: None,
        storage,
    })
}
