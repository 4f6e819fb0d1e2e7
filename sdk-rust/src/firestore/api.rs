//! Wire types of the Firestore v1 documents REST API.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A message that can hold any of the supported value types. Serialized as
/// a single-key object naming the type, e.g. `{"stringValue": "Sale"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    StringValue(String),
    /// RFC 3339 timestamp, e.g. `2024-05-01T12:30:00.000Z`.
    TimestampValue(String),
    BooleanValue(bool),
}

/// A Firestore document.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The resource name of the document, e.g.
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The document's fields. Kept as raw JSON so a single field of an
    /// unknown type does not fail the whole document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Map<String, Value>>,
    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl Document {
    /// The last segment of the resource name, i.e. the document id.
    #[must_use]
    pub fn document_id(&self) -> Option<&str> {
        self.name
            .as_deref()
            .and_then(|name| name.rsplit('/').next())
            .filter(|id| !id.is_empty())
    }

    /// Decode one field, or `None` if it is missing or not a known value type.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields
            .as_ref()?
            .get(name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// The response for `ListDocuments`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    /// The documents found. Absent when the collection is empty. Each entry
    /// is decoded on its own so one malformed document is skipped instead of
    /// failing the listing.
    pub documents: Option<Vec<Value>>,
    pub next_page_token: Option<String>,
}
