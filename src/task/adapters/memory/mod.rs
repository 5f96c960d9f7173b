//! In-memory adapters for tests and local tooling.

mod blob_store;
mod task;

pub use blob_store::InMemoryBlobStore;
pub use task::InMemoryTaskRepository;
