use crate::{storage::StorageBackend, ClientError, ClientResult};
use std::{collections::HashMap, sync::Mutex};

/// A storage backend that keeps uploads in memory and resolves them to
/// `{base_url}/{file_name}`.
pub struct MemoryStorage {
    base_url: String,
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail_uploads: Mutex<bool>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new("memory://images")
    }
}

impl MemoryStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Mutex::new(HashMap::new()),
            fail_uploads: Mutex::new(false),
        }
    }

    /// Bytes uploaded under `file_name`, if any.
    pub fn object(&self, file_name: &str) -> Option<Vec<u8>> {
        let objects = self.objects.lock().expect("storage poisoned");
        objects.get(file_name).cloned()
    }

    pub fn set_fail_uploads(&self, fail: bool) {
        *self.fail_uploads.lock().expect("storage poisoned") = fail;
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryStorage {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> ClientResult<String> {
        if *self.fail_uploads.lock().expect("storage poisoned") {
            return Err(ClientError::Invariant("memory", "uploads disabled".to_string()));
        }
        let mut objects = self.objects.lock().expect("storage poisoned");
        objects.insert(file_name.to_string(), bytes);
        Ok(format!("{}/{file_name}", self.base_url))
    }
}
