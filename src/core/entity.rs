//! Core domain types for candidate and interview records.
//!
//! Records are immutable inputs: they are loaded once from the dataset and only ever
//! read by the listing, stats and review code paths. Review decisions live in the
//! decision store, never on the records themselves.
//!
//! # Public API
//! - [`Candidate`]: A job candidate with pipeline stage and overall score
//! - [`Interview`]: An interview record with sub-scores averaged into an overall score
//! - [`Reviewable`]: The seam the review session sees; an id plus display hooks

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hiring pipeline stage for a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Applied,
    Screening,
    Interviewing,
    Offer,
    Hired,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Applied => "applied",
            Stage::Screening => "screening",
            Stage::Interviewing => "interviewing",
            Stage::Offer => "offer",
            Stage::Hired => "hired",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub location: String,
    pub stage: Stage,
    pub experience_years: f32,
    pub starred: bool,
    /// Overall score on a 0-100 scale
    pub score: f32,
}

/// Scheduling status of an interview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Scheduled => "scheduled",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-scores recorded after an interview, each on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterviewScores {
    pub technical: f32,
    pub communication: f32,
    pub problem_solving: f32,
    pub culture_fit: f32,
}

impl InterviewScores {
    /// Overall score is the plain average of the four sub-scores
    pub fn overall(&self) -> f32 {
        (self.technical + self.communication + self.problem_solving + self.culture_fit) / 4.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    pub candidate_name: String,
    pub role: String,
    pub interviewer: String,
    pub date: chrono::NaiveDate,
    pub status: InterviewStatus,
    pub scores: InterviewScores,
    pub notes: String,
}

/// The seam between the review session and concrete record types.
///
/// The session only needs a stable id for decision bookkeeping and a few display
/// hooks for card rendering. Both record types implement this so one generic
/// session serves the candidate and interview review flows.
pub trait Reviewable: Clone {
    /// Stable unique identifier, used as the decision store key
    fn id(&self) -> &str;

    /// Primary card line (who is being reviewed)
    fn headline(&self) -> String;

    /// Secondary card line (role, stage, context)
    fn subline(&self) -> String;

    /// Overall score on a 0-100 scale
    fn overall_score(&self) -> f32;
}

impl Reviewable for Candidate {
    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> String {
        self.name.clone()
    }

    fn subline(&self) -> String {
        format!(
            "{} | {} | {:.0} yrs experience",
            self.role, self.location, self.experience_years
        )
    }

    fn overall_score(&self) -> f32 {
        self.score
    }
}

impl Reviewable for Interview {
    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> String {
        self.candidate_name.clone()
    }

    fn subline(&self) -> String {
        format!(
            "{} | {} with {} | {}",
            self.role, self.date, self.interviewer, self.status
        )
    }

    fn overall_score(&self) -> f32 {
        self.scores.overall()
    }
}
