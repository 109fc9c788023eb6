//! Review decision values and stored decision records.
//!
//! A [`Decision`] is the outcome recorded for one entity. Candidate sessions allow all
//! three values; interview sessions only offer good-fit/nope. Absence of a stored
//! decision means "not yet reviewed"; there is no explicit pending variant.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of reviewing one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    GoodFit,
    Maybe,
    Nope,
}

/// Decisions available in a candidate review session
pub const CANDIDATE_DECISIONS: &[Decision] = &[Decision::GoodFit, Decision::Maybe, Decision::Nope];

/// Decisions available in an interview review session (no maybe)
pub const INTERVIEW_DECISIONS: &[Decision] = &[Decision::GoodFit, Decision::Nope];

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::GoodFit => "good-fit",
            Decision::Maybe => "maybe",
            Decision::Nope => "nope",
        }
    }

    /// Human label used in summaries and badges
    pub fn label(&self) -> &'static str {
        match self {
            Decision::GoodFit => "Good fit",
            Decision::Maybe => "Maybe",
            Decision::Nope => "Pass",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decision as persisted in a store, with the moment it was made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub decision: Decision,
    pub decided_at: chrono::DateTime<chrono::Utc>,
}

impl DecisionRecord {
    pub fn new(decision: Decision) -> Self {
        Self {
            decision,
            decided_at: chrono::Utc::now(),
        }
    }
}
