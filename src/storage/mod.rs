// ABOUTME: Storage abstraction for the persisted health-state blob
// ABOUTME: Pluggable backend support (in-memory, file) behind one async trait
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitTrack Contributors

//! Storage backends
//!
//! The store persists its whole state as one opaque blob under a fixed key.
//! Backends only need load/save/clear semantics; everything else (layout,
//! serialization, write-through policy) lives in [`crate::store`].

/// In-memory storage implementation
pub mod memory;

/// File-backed storage implementation
pub mod file;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use fittrack_core::errors::AppResult;

/// Opaque key-value blob storage for persisted state
///
/// # Examples
///
/// ```rust,no_run
/// use fittrack::storage::{MemoryStorage, StorageBackend};
/// # async fn example() -> Result<(), fittrack::AppError> {
/// let storage = MemoryStorage::new();
/// storage.save("fittrack-health-state", b"{}").await?;
/// let blob = storage.load("fittrack-health-state").await?;
/// assert!(blob.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the blob stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns [`fittrack_core::errors::AppError::Storage`] if the backend
    /// cannot be read. A missing key is `Ok(None)`, not an error.
    async fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// Write `bytes` under `key`, replacing any previous blob
    ///
    /// # Errors
    ///
    /// Returns [`fittrack_core::errors::AppError::Storage`] if the write
    /// fails.
    async fn save(&self, key: &str, bytes: &[u8]) -> AppResult<()>;

    /// Remove the blob stored under `key`
    ///
    /// # Errors
    ///
    /// Returns [`fittrack_core::errors::AppError::Storage`] if the removal
    /// fails. Clearing a missing key is a no-op.
    async fn clear(&self, key: &str) -> AppResult<()>;
}
