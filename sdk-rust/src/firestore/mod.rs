mod api;
mod client;
mod document;

pub use api::{Document, FieldValue, ListDocumentsResponse};
pub use client::{LinkStoreClient, LinkStoreClientOptions};
pub use document::{format_timestamp, parse_document, parse_timestamp, to_document};
pub(crate) use client::sort_newest_first;
