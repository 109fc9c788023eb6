//! Loading of the candidate and interview collections.
//!
//! The tool ships with an embedded mock dataset so it works out of the box; a
//! `--data-dir` pointing at a directory containing `candidates.json` and
//! `interviews.json` overrides it. Collections are read-only and keep their source
//! order, which is the order decks and listings present them in.

use crate::core::entity::{Candidate, Interview};
use crate::core::error::{Result, TalentDeckError};
use std::path::Path;

const EMBEDDED_CANDIDATES: &str = include_str!("../../data/candidates.json");
const EMBEDDED_INTERVIEWS: &str = include_str!("../../data/interviews.json");

/// The full read-only entity collections backing every command
#[derive(Debug, Clone)]
pub struct Dataset {
    pub candidates: Vec<Candidate>,
    pub interviews: Vec<Interview>,
}

impl Dataset {
    /// Load the dataset, preferring `data_dir` when given and falling back to the
    /// embedded mock data otherwise.
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        match data_dir {
            Some(dir) => Self::load_from_dir(dir),
            None => Self::load_embedded(),
        }
    }

    /// Parse the dataset bundled into the binary
    pub fn load_embedded() -> Result<Self> {
        log::debug!("Loading embedded mock dataset");
        let candidates = serde_json::from_str(EMBEDDED_CANDIDATES)
            .map_err(|e| TalentDeckError::dataset_parse_failed("embedded candidate", e))?;
        let interviews = serde_json::from_str(EMBEDDED_INTERVIEWS)
            .map_err(|e| TalentDeckError::dataset_parse_failed("embedded interview", e))?;
        Ok(Self {
            candidates,
            interviews,
        })
    }

    /// Load `candidates.json` and `interviews.json` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        log::debug!("Loading dataset from {}", dir.display());
        let candidates = read_collection(&dir.join("candidates.json"), "candidate")?;
        let interviews = read_collection(&dir.join("interviews.json"), "interview")?;
        Ok(Self {
            candidates,
            interviews,
        })
    }

    /// Look up a candidate by id
    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Look up an interview by id
    pub fn interview(&self, id: &str) -> Option<&Interview> {
        self.interviews.iter().find(|i| i.id == id)
    }
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(TalentDeckError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| TalentDeckError::dataset_read_failed(path, e))?;
    serde_json::from_str(&content).map_err(|e| TalentDeckError::dataset_parse_failed(what, e))
}
