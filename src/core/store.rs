//! Persisted id-to-decision mapping, one store per review context.
//!
//! The store is the durable side of a review session: every swipe writes through to
//! disk immediately, undo deletes the key, and listing views call [`DecisionStore::load_all`]
//! to pick up decisions made in another process (there is no push mechanism, refresh is
//! explicit). Writes are last-write-wins; exactly one session mutates a given store at
//! a time, so no locking is needed.
//!
//! # Storage layout
//! One JSON file per context under the talent-deck data directory:
//! - `interviews.json` for the fixed all-interviews context
//! - `candidates-<md5 of list id>.json` per candidate list
//!
//! Hashing the list id keeps file names safe for arbitrary list identifiers.

use crate::core::decision::{Decision, DecisionRecord};
use crate::core::dirs::get_store_directory;
use crate::core::error::{Result, TalentDeckError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of one decision store
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct StoreFile {
    decisions: HashMap<String, DecisionRecord>,
    last_updated: Option<chrono::DateTime<chrono::Utc>>,
}

/// Durable mapping from entity id to the decision recorded for it
#[derive(Debug)]
pub struct DecisionStore {
    path: PathBuf,
    decisions: HashMap<String, DecisionRecord>,
}

/// File name for the all-interviews review context
pub fn interviews_store_file() -> String {
    "interviews.json".to_string()
}

/// File name for a per-list candidate review context
pub fn candidate_list_store_file(list_id: &str) -> String {
    format!("candidates-{:x}.json", md5::compute(list_id.as_bytes()))
}

impl DecisionStore {
    /// Open the store for the all-interviews context
    pub fn open_interviews() -> Result<Self> {
        Self::open(&interviews_store_file())
    }

    /// Open the store for one candidate list
    pub fn open_candidate_list(list_id: &str) -> Result<Self> {
        Self::open(&candidate_list_store_file(list_id))
    }

    fn open(file_name: &str) -> Result<Self> {
        let dir = get_store_directory()?;
        if let Err(e) = fs::create_dir_all(&dir) {
            log::error!("Failed to create store directory '{}': {}", dir.display(), e);
            return Err(TalentDeckError::store_directory_creation_failed(&dir, e));
        }
        Self::open_at(dir.join(file_name))
    }

    /// Open a store at an explicit path. Missing files start as an empty mapping.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let decisions = read_store_file(&path)?;
        log::debug!(
            "Opened decision store '{}' with {} decision(s)",
            path.display(),
            decisions.len()
        );
        Ok(Self { path, decisions })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decision recorded for an entity, if any
    pub fn get(&self, id: &str) -> Option<&DecisionRecord> {
        self.decisions.get(id)
    }

    /// Record a decision, overwriting any prior one, and persist immediately
    pub fn set(&mut self, id: &str, decision: Decision) -> Result<()> {
        self.decisions
            .insert(id.to_string(), DecisionRecord::new(decision));
        self.persist()
    }

    /// Delete the key entirely, reverting the entity to "not reviewed".
    /// Used exclusively by undo.
    pub fn remove(&mut self, id: &str) -> Result<Option<DecisionRecord>> {
        let removed = self.decisions.remove(id);
        if removed.is_some() {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Reload the full mapping from disk, picking up decisions written by another
    /// process. This is the explicit "refresh" affordance of the listing views.
    pub fn load_all(&mut self) -> Result<&HashMap<String, DecisionRecord>> {
        self.decisions = read_store_file(&self.path)?;
        Ok(&self.decisions)
    }

    /// Number of recorded decisions
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Iterate over all recorded decisions
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DecisionRecord)> {
        self.decisions.iter()
    }

    /// Drop every decision in this context and persist the empty mapping
    pub fn clear(&mut self) -> Result<()> {
        self.decisions.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let file = StoreFile {
            decisions: self.decisions.clone(),
            last_updated: Some(chrono::Utc::now()),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| {
            log::error!("Failed to serialize decision store: {e}");
            TalentDeckError::store_serialization_failed(e)
        })?;
        fs::write(&self.path, json).map_err(|e| {
            log::error!(
                "Failed to write decision store '{}': {}",
                self.path.display(),
                e
            );
            TalentDeckError::store_write_failed(&self.path, e)
        })?;
        log::debug!(
            "Persisted {} decision(s) to '{}'",
            self.decisions.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn read_store_file(path: &Path) -> Result<HashMap<String, DecisionRecord>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content =
        fs::read_to_string(path).map_err(|e| TalentDeckError::store_read_failed(path, e))?;
    let file: StoreFile =
        serde_json::from_str(&content).map_err(|e| TalentDeckError::store_parse_failed(path, e))?;
    Ok(file.decisions)
}
