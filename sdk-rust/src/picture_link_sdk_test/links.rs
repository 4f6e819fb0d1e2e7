use crate::{firestore, validation, LinkService, PictureLink};
use chrono::Utc;
use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::Mutex,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkOperation {
    ListAll,
    Get,
    Create,
    Update,
    Delete,
    UploadImage,
    DownloadImage,
}

/// A call recorded by [`MockLinkService`].
#[derive(Debug, Clone, PartialEq)]
pub enum LinkCall {
    ListAll,
    Get(String),
    Create(PictureLink),
    Update(PictureLink),
    Delete(String),
    UploadImage(PathBuf, String),
    DownloadImage(String),
}

#[derive(Default)]
struct MockLinkState {
    links: HashMap<String, PictureLink>,
    images: HashMap<String, Vec<u8>>,
    failures: HashSet<LinkOperation>,
    tracked_calls: Vec<LinkCall>,
}

impl MockLinkState {
    fn take_failure(&mut self, operation: LinkOperation) -> bool {
        self.failures.remove(&operation)
    }
}

/// An in-memory link service with the same listing, validation and
/// timestamp rules as [`LinkStoreClient`](crate::firestore::LinkStoreClient).
/// Uploaded images resolve to `memory://{file_name}`.
#[derive(Default)]
pub struct MockLinkService {
    state: Mutex<MockLinkState>,
}

impl MockLinkService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a link directly, bypassing validation and call tracking.
    pub fn insert(&self, link: PictureLink) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.links.insert(link.id().to_string(), link);
        drop(state);
        self
    }

    /// Serve `bytes` for downloads of `url`.
    pub fn insert_image(&self, url: impl Into<String>, bytes: Vec<u8>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.images.insert(url.into(), bytes);
        drop(state);
        self
    }

    /// Make the next call of `operation` fail.
    pub fn fail_next(&self, operation: LinkOperation) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.failures.insert(operation);
        drop(state);
        self
    }

    /// Every stored link, including inactive ones.
    pub fn stored_links(&self) -> Vec<PictureLink> {
        let state = self.state.lock().expect("mock state poisoned");
        let mut links: Vec<PictureLink> = state.links.values().cloned().collect();
        firestore::sort_newest_first(&mut links);
        links
    }

    pub fn tracked_calls(&self) -> Vec<LinkCall> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.clone()
    }

    /// Forget tracked calls without touching stored links.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.clear();
    }
}

#[async_trait::async_trait]
impl LinkService for MockLinkService {
    async fn list_all(&self) -> Vec<PictureLink> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(LinkCall::ListAll);
        if state.take_failure(LinkOperation::ListAll) {
            return Vec::new();
        }
        let mut links: Vec<PictureLink> = state
            .links
            .values()
            .filter(|link| link.is_active)
            .cloned()
            .collect();
        firestore::sort_newest_first(&mut links);
        links
    }

    async fn get(&self, id: &str) -> Option<PictureLink> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(LinkCall::Get(id.to_string()));
        if state.take_failure(LinkOperation::Get) {
            return None;
        }
        state.links.get(id).cloned()
    }

    async fn create(&self, link: &PictureLink) -> bool {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(LinkCall::Create(link.clone()));
        if state.take_failure(LinkOperation::Create)
            || validation::validate_link(link).is_err()
            || state.links.contains_key(link.id())
        {
            return false;
        }
        state.links.insert(link.id().to_string(), link.clone());
        true
    }

    async fn update(&self, link: &mut PictureLink) -> bool {
        let mut state = self.state.lock().expect("mock state poisoned");
        if state.take_failure(LinkOperation::Update) || validation::validate_link(link).is_err() {
            state.tracked_calls.push(LinkCall::Update(link.clone()));
            return false;
        }
        link.updated_at = Utc::now().max(link.created_at);
        state.tracked_calls.push(LinkCall::Update(link.clone()));
        state.links.insert(link.id().to_string(), link.clone());
        true
    }

    async fn delete(&self, id: &str) -> bool {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(LinkCall::Delete(id.to_string()));
        if state.take_failure(LinkOperation::Delete) || id.trim().is_empty() {
            return false;
        }
        // Deleting a missing document succeeds, as in Firestore.
        state.links.remove(id);
        true
    }

    async fn upload_image(&self, local_path: &Path, file_name: &str) -> String {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(LinkCall::UploadImage(
            local_path.to_path_buf(),
            file_name.to_string(),
        ));
        if state.take_failure(LinkOperation::UploadImage) || file_name.is_empty() {
            return String::new();
        }
        format!("memory://{file_name}")
    }

    async fn download_image(&self, url: &str) -> Option<Vec<u8>> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(LinkCall::DownloadImage(url.to_string()));
        if state.take_failure(LinkOperation::DownloadImage) {
            return None;
        }
        state.images.get(url).cloned()
    }
}
