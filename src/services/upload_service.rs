//! UploadService relays one batch of photos end-to-end.
//!
//! Every file in the batch is stored concurrently; the batch settles as a
//! unit before any result is inspected; a single notification carries the
//! stored references to the companion. Any failure anywhere fails the whole
//! batch. Nothing is retried, and blobs already stored when a later stage
//! fails are left in place.

use crate::models::photo::{StoredPhoto, UploadItem};
use crate::services::{
    blob_store::{BlobAccess, BlobStore, StoreError},
    companion::{CompanionClient, ForwardError},
    naming::FileNamer,
};
use futures::future;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No photos uploaded")]
    EmptyBatch,
    #[error("storing `{filename}` failed: {source}")]
    Store {
        filename: String,
        #[source]
        source: StoreError,
    },
    #[error("forwarding stored photos failed: {0}")]
    Forward(#[from] ForwardError),
}

pub type UploadResult<T> = Result<T, UploadError>;

#[derive(Clone)]
pub struct UploadService {
    store: Arc<dyn BlobStore>,
    namer: Arc<dyn FileNamer>,
    companion: CompanionClient,
}

impl UploadService {
    pub fn new(
        store: Arc<dyn BlobStore>,
        namer: Arc<dyn FileNamer>,
        companion: CompanionClient,
    ) -> Self {
        Self {
            store,
            namer,
            companion,
        }
    }

    /// Store every item in the batch, then notify the companion once.
    ///
    /// The returned references are in submission order. The notification is
    /// only sent after the entire batch stored successfully.
    pub async fn upload_batch(&self, items: Vec<UploadItem>) -> UploadResult<Vec<StoredPhoto>> {
        if items.is_empty() {
            return Err(UploadError::EmptyBatch);
        }

        let uploads = items.into_iter().map(|item| {
            // Filename is derived per item at launch time, not per batch.
            let filename = self.namer.name_for(&item.name);
            let store = Arc::clone(&self.store);
            async move {
                let put = store
                    .put(&filename, item.content, BlobAccess::Public)
                    .await
                    .map_err(|source| UploadError::Store {
                        filename: filename.clone(),
                        source,
                    })?;
                debug!("stored `{}` at {}", filename, put.url);
                Ok(StoredPhoto {
                    filename,
                    url: put.url,
                })
            }
        });

        // Join-all barrier: every put settles before any result is inspected.
        let photos = future::join_all(uploads)
            .await
            .into_iter()
            .collect::<UploadResult<Vec<_>>>()?;

        self.companion.add_images(&photos).await?;

        debug!("forwarded batch of {} photo(s)", photos.len());
        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::blob_store::{PutResult, StoreResult};
    use async_trait::async_trait;
    use bytes::Bytes;

    /// Fails the test if the store is reached at all.
    struct UnreachableStore;

    #[async_trait]
    impl BlobStore for UnreachableStore {
        async fn put(
            &self,
            filename: &str,
            _content: Bytes,
            _access: BlobAccess,
        ) -> StoreResult<PutResult> {
            panic!("store must not be called, got put of `{filename}`");
        }
    }

    struct PassthroughNamer;

    impl FileNamer for PassthroughNamer {
        fn name_for(&self, original: &str) -> String {
            original.to_string()
        }
    }

    #[tokio::test]
    async fn empty_batch_is_rejected_before_any_collaborator_call() {
        let service = UploadService::new(
            Arc::new(UnreachableStore),
            Arc::new(PassthroughNamer),
            CompanionClient::new(reqwest::Client::new(), "http://127.0.0.1:9/unused"),
        );

        let err = service.upload_batch(Vec::new()).await.expect_err("must fail");
        assert!(matches!(err, UploadError::EmptyBatch));
        assert_eq!(err.to_string(), "No photos uploaded");
    }
}
