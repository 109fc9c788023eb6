//! Listing snapshot: the numbered rows of the most recent listing.
//!
//! `candidates` and `interviews` write their numbered rows here so `show <n>` can
//! resolve an index without re-running the filters. The snapshot carries only ids;
//! `show` re-reads the record from the dataset.
//!
//! # Cache Strategy
//! - **JSON serialization**: Human-readable cache file for debugging
//! - **Timestamping**: Track when the listing was taken
//! - **Single slot**: Each listing replaces the previous snapshot wholesale

use crate::core::dirs::get_cache_directory;
use crate::core::error::{Result, TalentDeckError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SNAPSHOT_FILE: &str = "last-list.json";

/// What kind of record a numbered row points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Candidate,
    Interview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub index: usize,
    pub id: String,
    pub kind: EntityKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub entries: Vec<SnapshotEntry>,
    /// Candidate list the rows were badged against; `None` for interview listings
    pub list_id: Option<String>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

impl ListSnapshot {
    /// Snapshot a fresh listing: ids in display order, numbered from 1
    pub fn new(
        kind: EntityKind,
        list_id: Option<String>,
        ids: impl IntoIterator<Item = String>,
    ) -> Self {
        let entries = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| SnapshotEntry {
                index: i + 1,
                id,
                kind,
            })
            .collect();
        Self {
            entries,
            list_id,
            last_updated: chrono::Utc::now(),
        }
    }

    fn file_path() -> Result<PathBuf> {
        Ok(get_cache_directory()?.join(SNAPSHOT_FILE))
    }

    /// Persist this snapshot, replacing any previous one
    pub fn save(&self) -> Result<()> {
        let dir = get_cache_directory()?;
        fs::create_dir_all(&dir)
            .map_err(|e| TalentDeckError::store_directory_creation_failed(&dir, e))?;
        let path = dir.join(SNAPSHOT_FILE);
        let json = serde_json::to_string_pretty(self)
            .map_err(TalentDeckError::store_serialization_failed)?;
        fs::write(&path, json).map_err(|e| TalentDeckError::store_write_failed(&path, e))?;
        log::debug!(
            "Snapshotted {} listing row(s) to '{}'",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Load the most recent snapshot
    pub fn load() -> Result<Self> {
        let path = Self::file_path()?;
        if !path.exists() {
            return Err(TalentDeckError::SnapshotNotFound);
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| TalentDeckError::snapshot_read_failed(&path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| TalentDeckError::snapshot_parse_failed(&path, e))
    }

    /// Resolve a 1-based display index to its entry
    pub fn entry(&self, index: usize) -> Result<&SnapshotEntry> {
        if index == 0 {
            return Err(TalentDeckError::ZeroIndex);
        }
        self.entries
            .get(index - 1)
            .ok_or_else(|| TalentDeckError::index_out_of_range(index, self.entries.len()))
    }
}
