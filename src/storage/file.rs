// ABOUTME: File-backed storage writing each key as a JSON file in a data directory
// ABOUTME: Writes go through a temp file and rename so a crash never truncates state
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitTrack Contributors

use std::path::{Path, PathBuf};

use tokio::fs;

use fittrack_core::errors::{AppError, AppResult};

/// File-backed blob storage
///
/// Each key maps to `<dir>/<key>.json`. The directory is created lazily on
/// first save.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at the platform data directory (`<data_dir>/fittrack`)
    ///
    /// Falls back to the current directory when the platform reports no data
    /// directory (some containerized environments).
    #[must_use]
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("fittrack"))
    }

    /// Directory this storage writes into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn storage_err(key: &str, source: std::io::Error) -> AppError {
        AppError::Storage {
            key: key.to_owned(),
            source,
        }
    }
}

#[async_trait::async_trait]
impl super::StorageBackend for FileStorage {
    async fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::storage_err(key, e)),
        }
    }

    async fn save(&self, key: &str, bytes: &[u8]) -> AppResult<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Self::storage_err(key, e))?;

        // Write-then-rename keeps the previous blob intact if the write dies
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, bytes)
            .await
            .map_err(|e| Self::storage_err(key, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| Self::storage_err(key, e))?;
        Ok(())
    }

    async fn clear(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::storage_err(key, e)),
        }
    }
}
