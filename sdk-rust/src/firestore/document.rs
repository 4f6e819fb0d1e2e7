use super::api::{Document, FieldValue};
use crate::PictureLink;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

const ID: &str = "id";
const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const IMAGE_URL: &str = "imageUrl";
const LOCAL_IMAGE_PATH: &str = "localImagePath";
const BUTTON_LABEL: &str = "buttonLabel";
const TARGET_URL: &str = "targetUrl";
const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";
const IS_ACTIVE: &str = "isActive";
const CREATED_BY: &str = "createdBy";

/// Format a timestamp with millisecond precision, e.g.
/// `2024-05-01T12:30:00.000Z`.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

fn insert(fields: &mut Map<String, Value>, name: &str, value: FieldValue) {
    // Serializing a plain enum into a JSON value cannot fail.
    if let Ok(value) = serde_json::to_value(value) {
        fields.insert(name.to_string(), value);
    }
}

/// Wrap every field of `link` in its typed-field envelope.
#[must_use]
pub fn to_document(link: &PictureLink) -> Document {
    let mut fields = Map::new();
    let strings = [
        (ID, link.id()),
        (TITLE, link.title.as_str()),
        (DESCRIPTION, link.description.as_str()),
        (IMAGE_URL, link.image_url.as_str()),
        (LOCAL_IMAGE_PATH, link.local_image_path.as_str()),
        (BUTTON_LABEL, link.button_label.as_str()),
        (TARGET_URL, link.target_url.as_str()),
        (CREATED_BY, link.created_by.as_str()),
    ];
    for (name, value) in strings {
        insert(&mut fields, name, FieldValue::StringValue(value.to_string()));
    }
    insert(
        &mut fields,
        CREATED_AT,
        FieldValue::TimestampValue(format_timestamp(&link.created_at)),
    );
    insert(
        &mut fields,
        UPDATED_AT,
        FieldValue::TimestampValue(format_timestamp(&link.updated_at)),
    );
    insert(&mut fields, IS_ACTIVE, FieldValue::BooleanValue(link.is_active));

    Document {
        fields: Some(fields),
        ..Default::default()
    }
}

fn string_field(document: &Document, name: &str) -> String {
    match document.field(name) {
        Some(FieldValue::StringValue(value)) => value,
        _ => String::new(),
    }
}

fn timestamp_field(document: &Document, name: &str) -> DateTime<Utc> {
    let timestamp = match document.field(name) {
        Some(FieldValue::TimestampValue(value)) => parse_timestamp(&value),
        _ => None,
    };
    timestamp.unwrap_or_else(Utc::now)
}

fn bool_field(document: &Document, name: &str, default: bool) -> bool {
    match document.field(name) {
        Some(FieldValue::BooleanValue(value)) => value,
        _ => default,
    }
}

/// Map a document back to a [`PictureLink`]. Missing or mistyped fields take
/// their defaults; only a document without a `fields` object yields `None`.
#[must_use]
pub fn parse_document(document: &Document) -> Option<PictureLink> {
    document.fields.as_ref()?;

    let id = match document.field(ID) {
        Some(FieldValue::StringValue(id)) if !id.is_empty() => id,
        _ => document.document_id().unwrap_or_default().to_string(),
    };

    let mut link = PictureLink::with_id(id);
    link.title = string_field(document, TITLE);
    link.description = string_field(document, DESCRIPTION);
    link.image_url = string_field(document, IMAGE_URL);
    link.local_image_path = string_field(document, LOCAL_IMAGE_PATH);
    link.button_label = string_field(document, BUTTON_LABEL);
    link.target_url = string_field(document, TARGET_URL);
    link.created_at = timestamp_field(document, CREATED_AT);
    link.updated_at = timestamp_field(document, UPDATED_AT);
    link.is_active = bool_field(document, IS_ACTIVE, true);
    link.created_by = string_field(document, CREATED_BY);
    Some(link)
}
