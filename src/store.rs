//! Portfolio record storage.
//!
//! The filesystem is the store: one pretty-printed JSON file per user under
//! a single directory, named `<user_id>.json`. Saving is an upsert; loading
//! a missing record is `Ok(None)`, not an error.
//!
//! [`PortfolioStore`] is an explicit handle — opened once at process start
//! and passed by reference to whatever needs it. There is no module-level
//! client and no global state.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::PortfolioData;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),
}

/// Handle to a directory of portfolio records.
#[derive(Debug)]
pub struct PortfolioStore {
    root: PathBuf,
}

impl PortfolioStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Upsert the record keyed by its `user_id`.
    pub fn save(&self, data: &PortfolioData) -> Result<(), StoreError> {
        let path = self.record_path(&data.user_id)?;
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load the record for `user_id`, or `None` if there is no record.
    pub fn load(&self, user_id: &str) -> Result<Option<PortfolioData>, StoreError> {
        let path = self.record_path(user_id)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// User ids of all stored records, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Record path for a user id. Ids that would escape the store directory
    /// are rejected rather than resolved.
    fn record_path(&self, user_id: &str) -> Result<PathBuf, StoreError> {
        if user_id.is_empty()
            || user_id == "."
            || user_id == ".."
            || user_id.contains(['/', '\\'])
        {
            return Err(StoreError::InvalidUserId(user_id.to_string()));
        }
        Ok(self.root.join(format!("{user_id}.json")))
    }
}
