use super::{
    api::{Document, ListDocumentsResponse},
    document::{parse_document, to_document},
};
use crate::{
    client_utils,
    opentelemetry::{trace_operation, Component},
    storage::StorageBackend,
    validation, ClientError, ClientResult, LinkService, PictureLink,
};
use chrono::Utc;
use reqwest::Client;
use std::{path::Path, sync::Arc};

const PROVIDER: &str = "firestore";
const COLLECTION: &str = "pictureLinks";

/// CRUD over the `pictureLinks` collection of a Firestore database, plus
/// image upload through a [`StorageBackend`].
pub struct LinkStoreClient {
    project_id: String,
    base_url: String,
    client: Client,
    storage: Option<Arc<dyn StorageBackend>>,
}

#[derive(Clone, Default)]
pub struct LinkStoreClientOptions {
    pub project_id: String,
    pub base_url: Option<String>,
    pub client: Option<Client>,
    /// Where uploaded images go. Uploads fail when unset.
    pub storage: Option<Arc<dyn StorageBackend>>,
}

/// Newest first; links created at the same instant are ordered by id.
pub(crate) fn sort_newest_first(links: &mut [PictureLink]) {
    links.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id().cmp(b.id()))
    });
}

fn require_id(id: &str) -> ClientResult<()> {
    if id.trim().is_empty() {
        return Err(ClientError::InvalidInput(
            "A picture link id is required.".to_string(),
        ));
    }
    Ok(())
}

impl LinkStoreClient {
    #[must_use]
    pub fn new(options: LinkStoreClientOptions) -> Self {
        let LinkStoreClientOptions {
            project_id,
            base_url,
            client,
            storage,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://firestore.googleapis.com/v1".to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            project_id,
            base_url,
            client: client.unwrap_or_else(Client::new),
            storage,
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{COLLECTION}",
            self.base_url, self.project_id
        )
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    /// Every active link, newest first.
    pub async fn try_list_all(&self) -> ClientResult<Vec<PictureLink>> {
        trace_operation(Component::Store, "list_all", || async move {
            let response: ListDocumentsResponse =
                client_utils::send_for_json(self.client.get(self.collection_url()), PROVIDER)
                    .await?;

            if let Some(token) = response.next_page_token.as_deref() {
                tracing::warn!(
                    next_page_token = token,
                    "listing has more pages; only the first page is returned"
                );
            }

            let mut links: Vec<PictureLink> = response
                .documents
                .unwrap_or_default()
                .into_iter()
                .filter_map(|value| serde_json::from_value::<Document>(value).ok())
                .filter_map(|document| parse_document(&document))
                .filter(|link| link.is_active)
                .collect();
            sort_newest_first(&mut links);

            tracing::debug!(count = links.len(), "listed picture links");
            Ok(links)
        })
        .await
    }

    /// Fetch one link. A missing document is `Ok(None)`.
    pub async fn try_get(&self, id: &str) -> ClientResult<Option<PictureLink>> {
        trace_operation(Component::Store, "get", || async move {
            require_id(id)?;
            let result: ClientResult<Document> =
                client_utils::send_for_json(self.client.get(self.document_url(id)), PROVIDER)
                    .await;

            match result {
                Ok(document) => parse_document(&document).map(Some).ok_or_else(|| {
                    ClientError::Invariant(PROVIDER, format!("Document {id} has no fields"))
                }),
                Err(error) if error.is_not_found() => Ok(None),
                Err(error) => Err(error),
            }
        })
        .await
    }

    /// Store a new link under its own id. Fails if a document with that id
    /// already exists.
    pub async fn try_create(&self, link: &PictureLink) -> ClientResult<()> {
        trace_operation(Component::Store, "create", || async move {
            validation::validate_link(link)?;
            require_id(link.id())?;

            client_utils::send(
                self.client
                    .post(self.collection_url())
                    .query(&[("documentId", link.id())])
                    .json(&to_document(link)),
            )
            .await?;

            tracing::info!(link_id = link.id(), "created picture link");
            Ok(())
        })
        .await
    }

    /// Overwrite a stored link, stamping `updated_at` on the caller's record
    /// first. There is no version check; the last writer wins.
    pub async fn try_update(&self, link: &mut PictureLink) -> ClientResult<()> {
        trace_operation(Component::Store, "update", || async move {
            validation::validate_link(link)?;
            require_id(link.id())?;

            link.updated_at = Utc::now().max(link.created_at);
            let document = to_document(link);

            client_utils::send(self.client.patch(self.document_url(link.id())).json(&document))
                .await?;

            tracing::info!(link_id = link.id(), "updated picture link");
            Ok(())
        })
        .await
    }

    /// Remove the document. This is a hard delete; hiding a link is done by
    /// updating it with `is_active = false`.
    pub async fn try_delete(&self, id: &str) -> ClientResult<()> {
        trace_operation(Component::Store, "delete", || async move {
            require_id(id)?;
            client_utils::send(self.client.delete(self.document_url(id))).await?;

            tracing::info!(link_id = id, "deleted picture link");
            Ok(())
        })
        .await
    }

    pub async fn try_upload_image(&self, local_path: &Path, file_name: &str) -> ClientResult<String> {
        trace_operation(Component::Storage, "upload_image", || async move {
            if file_name.trim().is_empty() {
                return Err(ClientError::InvalidInput(
                    "A file name is required to upload an image.".to_string(),
                ));
            }
            let storage = self.storage.as_ref().ok_or_else(|| {
                ClientError::Config("No storage backend configured".to_string())
            })?;

            let bytes = tokio::fs::read(local_path).await?;
            let url = storage.upload(bytes, file_name).await?;

            tracing::info!(backend = storage.name(), file_name, "uploaded image");
            Ok(url)
        })
        .await
    }

    pub async fn try_download_image(&self, url: &str) -> ClientResult<Vec<u8>> {
        trace_operation(Component::Storage, "download_image", || async move {
            let response = client_utils::send(self.client.get(url)).await?;
            Ok(response.bytes().await?.to_vec())
        })
        .await
    }
}

#[async_trait::async_trait]
impl LinkService for LinkStoreClient {
    async fn list_all(&self) -> Vec<PictureLink> {
        client_utils::ok_or_log("list_all", self.try_list_all().await).unwrap_or_default()
    }

    async fn get(&self, id: &str) -> Option<PictureLink> {
        client_utils::ok_or_log("get", self.try_get(id).await).flatten()
    }

    async fn create(&self, link: &PictureLink) -> bool {
        client_utils::ok_or_log("create", self.try_create(link).await).is_some()
    }

    async fn update(&self, link: &mut PictureLink) -> bool {
        client_utils::ok_or_log("update", self.try_update(link).await).is_some()
    }

    async fn delete(&self, id: &str) -> bool {
        client_utils::ok_or_log("delete", self.try_delete(id).await).is_some()
    }

    async fn upload_image(&self, local_path: &Path, file_name: &str) -> String {
        client_utils::ok_or_log(
            "upload_image",
            self.try_upload_image(local_path, file_name).await,
        )
        .unwrap_or_default()
    }

    async fn download_image(&self, url: &str) -> Option<Vec<u8>> {
        client_utils::ok_or_log("download_image", self.try_download_image(url).await)
    }
}
