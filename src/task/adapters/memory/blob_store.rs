//! In-memory blob store for attachment tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::BlobRef,
    ports::{BlobStore, BlobStoreError, BlobStoreResult},
};

/// Thread-safe in-memory blob store keyed by upload path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<HashMap<BlobRef, Vec<u8>>>>,
}

impl InMemoryBlobStore {
    /// Creates an empty blob store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the stored bytes, if present.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Persistence`] when the lock is poisoned.
    pub fn get(&self, reference: &BlobRef) -> BlobStoreResult<Option<Vec<u8>>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|err| BlobStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(blobs.get(reference).cloned())
    }

    /// Returns the number of stored blobs.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Persistence`] when the lock is poisoned.
    pub fn stored_count(&self) -> BlobStoreResult<usize> {
        let blobs = self
            .blobs
            .read()
            .map_err(|err| BlobStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(blobs.len())
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn store(&self, bytes: Vec<u8>, path: &str) -> BlobStoreResult<BlobRef> {
        if bytes.is_empty() {
            return Err(BlobStoreError::EmptyPayload(path.to_owned()));
        }
        let mut blobs = self
            .blobs
            .write()
            .map_err(|err| BlobStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let reference = BlobRef::new(path);
        blobs.insert(reference.clone(), bytes);
        Ok(reference)
    }

    async fn delete(&self, reference: &BlobRef) -> BlobStoreResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|err| BlobStoreError::persistence(std::io::Error::other(err.to_string())))?;
        blobs
            .remove(reference)
            .map(drop)
            .ok_or_else(|| BlobStoreError::NotFound(reference.clone()))
    }
}
