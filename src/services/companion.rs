//! Client for the companion listener that consumes stored-photo references.

use crate::models::photo::StoredPhoto;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("companion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("companion answered with status {0}")]
    Status(StatusCode),
}

pub type ForwardResult<T> = Result<T, ForwardError>;

/// JSON body for the companion's `addImages` endpoint.
#[derive(Serialize, Debug)]
struct AddImagesRequest<'a> {
    photos: &'a [StoredPhoto],
}

/// One-shot notifier for the companion application.
///
/// Sends exactly one POST per batch and never retries. A non-success answer
/// is an error even though the referenced blobs are already stored.
#[derive(Clone)]
pub struct CompanionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CompanionClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Forward the stored references for one batch.
    pub async fn add_images(&self, photos: &[StoredPhoto]) -> ForwardResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AddImagesRequest { photos })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Status(status));
        }
        Ok(())
    }
}
