// src/storage.rs
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::SavedEntry;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("no data directory available for saved passwords")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Append-only store for saved passwords, one JSON entry per line.
///
/// Generation never reads this file back; `list` exists only so the user
/// can review what they saved.
pub struct SavedStore {
    path: PathBuf,
}

impl SavedStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(SavedStore { path })
    }

    /// Open the store at the platform default location, honoring the
    /// configured override.
    pub fn open_default(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => Self::open(path),
            None => {
                let dir = crate::utils::get_app_data_dir().ok_or(StorageError::NoDataDir)?;
                Self::open(dir.join("saved.jsonl"))
            }
        }
    }

    pub fn append(&self, entry: &SavedEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(entry)?;
        writeln!(file, "{}", line)?;
        log::info!("Saved password entry {}", entry.id);
        Ok(())
    }

    // Display only. Lines that fail to parse are skipped with a warning so
    // one corrupt line cannot take the whole view down.
    pub fn list(&self) -> Result<Vec<SavedEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<SavedEntry>(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("Skipping unreadable saved entry: {}", e),
            }
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_then_list_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedStore::open(dir.path().join("saved.jsonl")).unwrap();

        store.append(&SavedEntry::new("Tr0ub4dor&3")).unwrap();
        store.append(&SavedEntry::new("hunter2hunter2")).unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].password, "Tr0ub4dor&3");
        assert_eq!(entries[1].password, "hunter2hunter2");
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn list_on_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedStore::open(dir.path().join("saved.jsonl")).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn corrupt_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.jsonl");
        let store = SavedStore::open(&path).unwrap();
        store.append(&SavedEntry::new("first")).unwrap();
        std::fs::write(
            &path,
            format!("{}\nnot json at all\n", std::fs::read_to_string(&path).unwrap().trim()),
        )
        .unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].password, "first");
    }
}
