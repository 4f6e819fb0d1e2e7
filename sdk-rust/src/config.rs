//! Project-level configuration shared by the clients.
//!
//! A [`FirebaseConfig`] holds the three values that identify a Firebase
//! project (web API key, project id, storage bucket) plus the administrator
//! allow-list. It can be deserialized from any serde source or read from the
//! environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `FIREBASE_API_KEY` | `api_key` |
//! | `FIREBASE_PROJECT_ID` | `project_id` |
//! | `FIREBASE_STORAGE_BUCKET` | `storage_bucket` |
//! | `PICTURE_LINK_ADMIN_EMAILS` | `admin_emails` (comma separated, optional) |

use crate::{
    auth::AuthClientOptions,
    firestore::LinkStoreClientOptions,
    storage::{FirebaseStorage, FirebaseStorageOptions},
    ClientError, ClientResult,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, sync::Arc};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
    pub storage_bucket: String,
    #[serde(default)]
    pub admin_emails: Vec<String>,
}

impl FirebaseConfig {
    pub fn from_env() -> ClientResult<Self> {
        Ok(Self {
            api_key: required_var("FIREBASE_API_KEY")?,
            project_id: required_var("FIREBASE_PROJECT_ID")?,
            storage_bucket: required_var("FIREBASE_STORAGE_BUCKET")?,
            admin_emails: env::var("PICTURE_LINK_ADMIN_EMAILS")
                .map(|value| parse_email_list(&value))
                .unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn auth_options(&self) -> AuthClientOptions {
        AuthClientOptions {
            api_key: self.api_key.clone(),
            admin_emails: self.admin_emails.iter().cloned().collect::<HashSet<_>>(),
            ..Default::default()
        }
    }

    /// Options for a link store that uploads images to the project's
    /// storage bucket.
    #[must_use]
    pub fn link_store_options(&self) -> LinkStoreClientOptions {
        let storage = FirebaseStorage::new(FirebaseStorageOptions {
            bucket: self.storage_bucket.clone(),
            ..Default::default()
        });
        LinkStoreClientOptions {
            project_id: self.project_id.clone(),
            storage: Some(Arc::new(storage)),
            ..Default::default()
        }
    }
}

fn required_var(name: &str) -> ClientResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ClientError::Config(format!("{name} must be set"))),
    }
}

fn parse_email_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_lowercase)
        .collect()
}
