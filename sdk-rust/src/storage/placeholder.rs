use super::StorageBackend;
use crate::ClientResult;

/// Returns the URL an object *would* have in a Firebase Storage bucket
/// without transferring anything. Useful for demos and offline development.
#[derive(Debug, Clone)]
pub struct PlaceholderStorage {
    bucket: String,
}

impl PlaceholderStorage {
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }
}

#[async_trait::async_trait]
impl StorageBackend for PlaceholderStorage {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> ClientResult<String> {
        tracing::debug!(file_name, size = bytes.len(), "skipping upload");
        Ok(format!(
            "https://firebasestorage.googleapis.com/v0/b/{}/o/{file_name}?alt=media",
            self.bucket
        ))
    }
}
