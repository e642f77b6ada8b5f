// Native filesystem store for desktop
//
// Uses platform-idiomatic directories:
// - macOS: ~/Library/Application Support/dev.rustysearch.RustySearch/
// - Linux: ~/.local/share/rustysearch/
// - Windows: C:\Users\<user>\AppData\Roaming\rustysearch\RustySearch\data\

use directories::ProjectDirs;
use rustysearch_core::error::StorageError;
use rustysearch_core::storage::KeyValueStore;
use std::{io::ErrorKind, path::PathBuf};

/// File-per-key store for desktop platforms.
///
/// Each key maps to a UTF-8 file named after the key inside the base directory.
pub struct NativeStore {
    base_path: PathBuf,
}

impl NativeStore {
    /// Creates a NativeStore in the platform-idiomatic data directory.
    pub fn new() -> Result<Self, StorageError> {
        let proj_dirs = ProjectDirs::from("dev", "rustysearch", "RustySearch")
            .ok_or_else(|| StorageError::Io("Data directory unavailable".into()))?;

        Self::with_path(proj_dirs.data_dir().to_path_buf())
    }

    /// Creates a NativeStore rooted at `base_path`.
    pub fn with_path(base_path: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| StorageError::Io(format!("Failed to create directory: {}", e)))?;

        Ok(Self { base_path })
    }

    fn get_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys are file names; refuse anything that could escape the base dir
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(StorageError::Io(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.base_path.join(key))
    }
}

#[async_trait::async_trait(?Send)]
impl KeyValueStore for NativeStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.get_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("Failed to read file: {}", e))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.get_path(key)?;
        tokio::fs::write(path, value)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to write file: {}", e)))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.get_path(key)?;
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("Failed to delete file: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustysearch_core::storage::WaitlistFlag;
    use tempfile::TempDir;

    fn create_test_store() -> (NativeStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = NativeStore::with_path(temp_dir.path().to_path_buf()).unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let (store, _temp) = create_test_store();

        assert_eq!(store.get("rustysearch_waitlist").await.unwrap(), None);
        store.set("rustysearch_waitlist", "true").await.unwrap();
        assert_eq!(
            store.get("rustysearch_waitlist").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_remove_missing_is_ok() {
        let (store, _temp) = create_test_store();
        store.remove("never-written").await.unwrap();

        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_flag_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let store = NativeStore::with_path(temp_dir.path().to_path_buf()).unwrap();
            WaitlistFlag::new(&store).set().await.unwrap();
        }

        let reopened = NativeStore::with_path(temp_dir.path().to_path_buf()).unwrap();
        assert!(WaitlistFlag::new(&reopened).is_set().await.unwrap());
    }

    #[tokio::test]
    async fn test_rejects_path_keys() {
        let (store, _temp) = create_test_store();
        assert!(store.set("../escape", "x").await.is_err());
        assert!(store.get("a/b").await.is_err());
        assert!(store.get("").await.is_err());
    }
}
