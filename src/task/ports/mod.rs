//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces for the hosted data store
//! and the attachment blob store.

pub mod blob_store;
pub mod repository;

pub use blob_store::{BlobStore, BlobStoreError, BlobStoreResult};
pub use repository::{TaskOrdering, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
