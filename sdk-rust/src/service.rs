use crate::{PictureLink, Session};
use std::path::Path;
use tokio::sync::mpsc;

/// Authentication as seen by the application. Every operation reports
/// failure as `false`/`None` instead of an error.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> bool;
    async fn register(&self, email: &str, password: &str, display_name: &str) -> bool;
    async fn logout(&self) -> bool;
    async fn reset_password(&self, email: &str) -> bool;
    fn current_session(&self) -> Option<Session>;
    fn is_logged_in(&self) -> bool {
        self.current_session().is_some()
    }
    /// Receive the new session (or `None`) after every successful login,
    /// every successful registration and every logout. Each subscriber gets
    /// its own unbounded queue, so no event is dropped for a slow reader.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<Option<Session>>;
}

/// Picture link storage as seen by the application. Failures surface as
/// `false`, `None`, an empty list or an empty URL.
#[async_trait::async_trait]
pub trait LinkService: Send + Sync {
    async fn list_all(&self) -> Vec<PictureLink>;
    async fn get(&self, id: &str) -> Option<PictureLink>;
    async fn create(&self, link: &PictureLink) -> bool;
    async fn update(&self, link: &mut PictureLink) -> bool;
    async fn delete(&self, id: &str) -> bool;
    async fn upload_image(&self, local_path: &Path, file_name: &str) -> String;
    async fn download_image(&self, url: &str) -> Option<Vec<u8>>;
}
