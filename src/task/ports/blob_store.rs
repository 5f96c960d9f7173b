//! Blob storage port for task attachments.

use crate::task::domain::BlobRef;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for blob store operations.
pub type BlobStoreResult<T> = Result<T, BlobStoreError>;

/// Attachment storage contract.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` under `path` and returns a retrievable reference.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::EmptyPayload`] for zero-length uploads.
    async fn store(&self, bytes: Vec<u8>, path: &str) -> BlobStoreResult<BlobRef>;

    /// Deletes a stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::NotFound`] when the reference is unknown.
    async fn delete(&self, reference: &BlobRef) -> BlobStoreResult<()>;
}

/// Errors returned by blob store implementations.
#[derive(Debug, Clone, Error)]
pub enum BlobStoreError {
    /// The upload contained no bytes.
    #[error("attachment '{0}' is empty")]
    EmptyPayload(String),

    /// The blob reference does not exist.
    #[error("blob not found: {0}")]
    NotFound(BlobRef),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BlobStoreError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
