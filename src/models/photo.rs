//! Request-scoped upload models.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single file pulled out of the incoming multipart body.
///
/// `name` is the client-supplied filename, before any prefixing. Items live
/// only for the duration of the request that received them.
#[derive(Debug, Clone)]
pub struct UploadItem {
    pub name: String,
    pub content: Bytes,
}

/// A photo that has been persisted to the blob store.
///
/// Created once per uploaded file after its store call succeeds; immutable
/// thereafter. Appears in the HTTP response and in the forwarded
/// notification, nowhere else.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StoredPhoto {
    /// Storage filename, `<ingest-millis>-<original-name>`.
    pub filename: String,

    /// Public URL assigned by the blob store.
    pub url: String,
}

/// Success payload for `POST /api/photos`.
#[derive(Serialize, Debug)]
pub struct UploadResponse {
    pub success: bool,
    pub photos: Vec<StoredPhoto>,
}
