//! Directory-backed key-value store.
//!
//! Each key maps to `<dir>/<key>.json`. Writes land in a `.tmp` sibling first
//! and are renamed into place, so a reader never observes a half-written slot.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{KeyValueStore, Result, StoreError};

const SLOT_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "tmp";

/// Stores each slot as a file under a single directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the slot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the file path for `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidKey` for empty keys, keys starting with a
    /// dot, or keys outside `[A-Za-z0-9_.-]`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{SLOT_EXTENSION}")))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_owned()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.slot_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;

        let temp_path = path.with_extension(TEMP_EXTENSION);
        let mut file = File::create(&temp_path)?;
        file.write_all(value)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &path)?;
        tracing::trace!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_slot_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("cart").unwrap().is_none());
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("state"));
        store.set("cart", b"[1]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some(&b"[1]"[..]));
        assert!(store.dir().join("cart.json").exists());
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.set("cart", b"[]").unwrap();
        assert!(!dir.path().join("cart.tmp").exists());
    }

    #[test]
    fn test_remove_missing_slot() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.remove("cart").unwrap();
    }

    #[test]
    fn test_rejects_path_traversal() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.set("../escape", b"x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.get(".hidden"), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn test_accepts_camel_case_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.set("purchaseHistory", b"[]").unwrap();
        assert!(store.get("purchaseHistory").unwrap().is_some());
    }
}
