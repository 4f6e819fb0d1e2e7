use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A picture link: an image with a title and description that opens a
/// target URL when its button is pressed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PictureLink {
    id: String,
    pub title: String,
    pub description: String,
    /// URL of the uploaded image as resolved by the storage backend.
    pub image_url: String,
    /// Path of the image on the device that created the link. Not
    /// authoritative; only used to detect that a new image was picked.
    pub local_image_path: String,
    pub button_label: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Visibility flag. Inactive links are kept in storage but never listed.
    pub is_active: bool,
    pub created_by: String,
}

impl Default for PictureLink {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            local_image_path: String::new(),
            button_label: String::new(),
            target_url: String::new(),
            created_at: now,
            updated_at: now,
            is_active: true,
            created_by: String::new(),
        }
    }
}

impl PictureLink {
    /// Create a link with a freshly generated id.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        button_label: impl Into<String>,
        target_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            button_label: button_label.into(),
            target_url: target_url.into(),
            ..Default::default()
        }
    }

    /// Create a link that reuses an id assigned elsewhere, e.g. the id of a
    /// stored document. The id cannot be changed afterwards.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>, local_path: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self.local_image_path = local_path.into();
        self
    }

    #[must_use]
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// The currently authenticated identity. Lives only in memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Subject identifier assigned by the auth backend (`localId`).
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Session {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
