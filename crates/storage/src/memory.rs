//! In-memory object storage for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ObjectStorage, StorageError};

/// Object storage held in a process-local map. Contents are lost on
/// restart; URLs are only meaningful to code that also holds this store.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().expect("storage lock poisoned").len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an object exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.objects
            .lock()
            .expect("storage lock poisoned")
            .contains_key(key)
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        self.objects
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), bytes);
        Ok(self.public_url(key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let removed = self
            .objects
            .lock()
            .expect("storage lock poisoned")
            .remove(key);
        match removed {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(key.to_string())),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("memory://{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_delete() {
        let storage = MemoryStorage::new();
        let url = storage
            .put("flyers/a.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap();
        assert_eq!(url, "memory://flyers/a.png");
        assert!(storage.contains("flyers/a.png"));

        storage.delete("flyers/a.png").await.unwrap();
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let storage = MemoryStorage::new();
        let result = storage.delete("nope").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }
}
