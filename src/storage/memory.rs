// ABOUTME: In-memory storage backend over a shared HashMap
// ABOUTME: Default backend for tests and for running without a data directory
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitTrack Contributors

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use fittrack_core::errors::AppResult;

use super::StorageBackend;

/// In-memory blob storage
///
/// Uses `Arc<RwLock<HashMap>>` so clones share one map, matching the
/// shared-ownership shape of the file backend. Contents vanish with the
/// process; useful for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryStorage {
    async fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, bytes: &[u8]) -> AppResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }

    async fn clear(&self, key: &str) -> AppResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
