//! Image storage backends used by the link store to turn a local image into
//! a URL that every client can resolve.
mod firebase;
mod placeholder;

pub use firebase::{FirebaseStorage, FirebaseStorageOptions};
pub use placeholder::PlaceholderStorage;

use crate::ClientResult;

#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    fn name(&self) -> &'static str;
    /// Store `bytes` under `file_name` and return the URL to download them.
    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> ClientResult<String>;
}

/// Guess an image content type from the file extension.
#[must_use]
pub fn guess_content_type(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
