// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! File-backed session storage
//!
//! Each session is one JSON object (key -> text) at
//! `<sessions_dir>/<session_id>.json`, so separate terminal sessions keep
//! separate histories and successive CLI invocations in the same session
//! see each other's writes.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::SessionStorage;
use crate::error::{Result, WayfarerError};

/// Session storage persisted to a per-session JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Open the storage for `session_id` under `sessions_dir`.
    ///
    /// Nothing is created on disk until the first write.
    pub fn open(sessions_dir: impl AsRef<Path>, session_id: &str) -> Result<Self> {
        validate_session_id(session_id)?;
        Ok(Self {
            path: sessions_dir.as_ref().join(format!("{}.json", session_id)),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.is_file() {
            return Ok(BTreeMap::new());
        }

        // Raw bytes so that non-UTF-8 garbage takes the same path as bad JSON
        let content = fs::read(&self.path)?;
        match serde_json::from_slice(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Session file is corrupt, treating it as empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if values.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }

        let parent = self.path.parent().ok_or_else(|| {
            WayfarerError::Storage(format!(
                "Session path has no parent directory: {}",
                self.path.display()
            ))
        })?;
        fs::create_dir_all(parent)?;

        let content = serde_json::to_string_pretty(values)?;

        // Temp file in the same directory so the rename stays atomic
        let temp_path = self.path.with_file_name(format!(
            ".{}.tmp.{}",
            self.path.file_name().unwrap_or_default().to_string_lossy(),
            std::process::id()
        ));
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.remove(key);
        // Rewrite even when the key was absent so a corrupt file gets replaced
        self.write_all(&values)
    }
}

/// Session ids become file names, so keep them to a safe alphabet.
fn validate_session_id(session_id: &str) -> Result<()> {
    let valid = !session_id.is_empty()
        && session_id.len() <= 64
        && session_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(WayfarerError::InvalidInput(format!(
            "Invalid session id '{}': use letters, digits, '-' or '_'",
            session_id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_get_before_any_write() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path(), "default").unwrap();

        assert!(storage.get("travelAgentHistory").unwrap().is_none());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path(), "default").unwrap();

        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();

        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
        assert!(storage.path().exists());
    }

    #[test]
    fn test_file_storage_visible_to_second_handle() {
        let temp_dir = TempDir::new().unwrap();
        let mut first = FileStorage::open(temp_dir.path(), "trip").unwrap();
        first.set("k", "v").unwrap();

        let second = FileStorage::open(temp_dir.path(), "trip").unwrap();
        assert_eq!(second.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_storage_sessions_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let mut first = FileStorage::open(temp_dir.path(), "one").unwrap();
        first.set("k", "v").unwrap();

        let second = FileStorage::open(temp_dir.path(), "two").unwrap();
        assert!(second.get("k").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_remove_last_key_deletes_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path(), "default").unwrap();
        storage.set("k", "v").unwrap();

        storage.remove("k").unwrap();

        assert!(storage.get("k").unwrap().is_none());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_remove_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path(), "default").unwrap();
        storage.set("keep", "1").unwrap();
        storage.set("drop", "2").unwrap();

        storage.remove("drop").unwrap();

        assert_eq!(storage.get("keep").unwrap().as_deref(), Some("1"));
        assert!(storage.get("drop").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_remove_missing_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path(), "default").unwrap();
        assert!(storage.remove("missing").is_ok());
    }

    #[test]
    fn test_file_storage_corrupt_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path(), "default").unwrap();
        std::fs::write(storage.path(), "{{{ nope").unwrap();

        assert!(storage.get("k").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_non_utf8_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path(), "default").unwrap();
        std::fs::write(storage.path(), [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        assert!(storage.get("k").unwrap().is_none());

        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_storage_remove_replaces_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path(), "default").unwrap();
        std::fs::write(storage.path(), [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        storage.remove("k").unwrap();

        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_failed_rename_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(temp_dir.path(), "default").unwrap();
        // A non-empty directory at the target path makes the rename fail
        std::fs::create_dir_all(storage.path().join("blocker")).unwrap();

        assert!(storage.set("k", "v").is_err());

        let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_file_storage_rejects_path_like_session_ids() {
        let temp_dir = TempDir::new().unwrap();
        for bad in ["", "../escape", "a/b", "with space"] {
            let result = FileStorage::open(temp_dir.path(), bad);
            assert!(result.is_err(), "session id {:?} should be rejected", bad);
        }
    }
}
