//! Object storage collaborator for uploaded files (event flyers,
//! downloadable resources).
//!
//! The service only needs two operations from its object store: upload a
//! blob under a key and get back a public retrieval URL, and delete a
//! blob by key. [`ObjectStorage`] captures that contract; [`s3::S3Storage`]
//! is the production backend and [`memory::MemoryStorage`] backs tests
//! and local development.

pub mod memory;
pub mod s3;

use async_trait::async_trait;

/// Errors from an object storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Upload-by-key / delete-by-key contract for an object store.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` under `key` and return the public retrieval URL.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Delete the object stored under `key`.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Public retrieval URL for `key`.
    fn public_url(&self, key: &str) -> String;
}
