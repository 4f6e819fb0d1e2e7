use super::{guess_content_type, StorageBackend};
use crate::{client_utils, ClientError, ClientResult};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::Deserialize;
use std::collections::HashMap;

const PROVIDER: &str = "firebasestorage";

/// Uploads images to a Firebase Storage bucket through its REST API.
pub struct FirebaseStorage {
    bucket: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct FirebaseStorageOptions {
    pub bucket: String,
    pub base_url: Option<String>,
    /// Extra headers sent with every upload, e.g. an `Authorization` header
    /// when bucket rules require a signed-in user.
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

/// Object metadata returned by an upload.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct StorageObject {
    name: String,
    /// Comma separated download tokens.
    download_tokens: Option<String>,
}

impl FirebaseStorage {
    #[must_use]
    pub fn new(options: FirebaseStorageOptions) -> Self {
        let FirebaseStorageOptions {
            bucket,
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://firebasestorage.googleapis.com/v0".to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            bucket,
            base_url,
            client: client.unwrap_or_else(Client::new),
            headers: headers.unwrap_or_default(),
        }
    }

    fn request_headers(&self) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                ClientError::InvalidInput(format!("Invalid storage header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                ClientError::InvalidInput(format!(
                    "Invalid storage header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    fn objects_url(&self) -> String {
        format!(
            "{}/b/{}/o",
            self.base_url,
            urlencoding::encode(&self.bucket)
        )
    }

    fn download_url(&self, object: &StorageObject) -> String {
        let mut url = format!(
            "{}/{}?alt=media",
            self.objects_url(),
            urlencoding::encode(&object.name)
        );
        if let Some(token) = object
            .download_tokens
            .as_deref()
            .and_then(|tokens| tokens.split(',').next())
            .filter(|token| !token.is_empty())
        {
            url.push_str("&token=");
            url.push_str(&urlencoding::encode(token));
        }
        url
    }
}

#[async_trait::async_trait]
impl StorageBackend for FirebaseStorage {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> ClientResult<String> {
        let mut headers = self.request_headers()?;
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(guess_content_type(file_name)),
        );

        let request = self
            .client
            .post(self.objects_url())
            .query(&[("uploadType", "media"), ("name", file_name)])
            .headers(headers)
            .body(bytes);

        let object: StorageObject = client_utils::send_for_json(request, PROVIDER).await?;
        Ok(self.download_url(&object))
    }
}
