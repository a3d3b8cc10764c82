//! Client for the external blob-storage service.
//!
//! The store is reached over HTTP: `PUT {base_url}/{filename}` with an
//! optional bearer token, answering a JSON body that carries the public URL
//! of the stored blob.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Visibility requested for a stored blob.
///
/// This service only ever uploads public blobs, but the option travels
/// explicitly so the wire contract stays visible at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobAccess {
    Public,
}

impl BlobAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlobAccess::Public => "public",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("blob store request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("blob store rejected upload with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("blob store returned an unreadable response: {0}")]
    InvalidResponse(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Successful `put` outcome: where the blob is now publicly reachable.
#[derive(Debug, Clone, Deserialize)]
pub struct PutResult {
    pub url: String,
}

/// Blob-storage operations this service consumes.
///
/// Object-safe so the upload service can hold any backend behind an `Arc`
/// and tests can substitute deterministic stubs.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `content` under `filename` and return its public URL.
    async fn put(
        &self,
        filename: &str,
        content: Bytes,
        access: BlobAccess,
    ) -> StoreResult<PutResult>;
}

/// HTTP implementation of [`BlobStore`].
#[derive(Clone)]
pub struct HttpBlobStore {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBlobStore {
    /// Create a client rooted at `base_url`. A trailing slash is tolerated.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn put(
        &self,
        filename: &str,
        content: Bytes,
        access: BlobAccess,
    ) -> StoreResult<PutResult> {
        let url = format!("{}/{}", self.base_url, filename);

        let mut request = self
            .client
            .put(&url)
            .header("x-access", access.as_str())
            .body(content);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected { status, body });
        }

        response
            .json::<PutResult>()
            .await
            .map_err(|err| StoreError::InvalidResponse(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_sends_token_and_access_and_parses_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/1-cat.jpg")
            .match_header("x-access", "public")
            .match_header("authorization", "Bearer secret")
            .match_body("content")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url":"https://cdn.example.com/1-cat.jpg"}"#)
            .create_async()
            .await;

        let store = HttpBlobStore::new(
            reqwest::Client::new(),
            server.url(),
            Some("secret".to_string()),
        );
        let result = store
            .put("1-cat.jpg", Bytes::from_static(b"content"), BlobAccess::Public)
            .await
            .expect("put succeeds");

        assert_eq!(result.url, "https://cdn.example.com/1-cat.jpg");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_upload_surfaces_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PUT", "/1-cat.jpg")
            .with_status(403)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let store = HttpBlobStore::new(reqwest::Client::new(), server.url(), None);
        let err = store
            .put("1-cat.jpg", Bytes::from_static(b"content"), BlobAccess::Public)
            .await
            .expect_err("put must fail");

        match err {
            StoreError::Rejected { status, body } => {
                assert_eq!(status.as_u16(), 403);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn undecodable_success_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PUT", "/1-cat.jpg")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let store = HttpBlobStore::new(reqwest::Client::new(), server.url(), None);
        let err = store
            .put("1-cat.jpg", Bytes::from_static(b"content"), BlobAccess::Public)
            .await
            .expect_err("put must fail");

        assert!(matches!(err, StoreError::InvalidResponse(_)));
    }
}
