//! Deck building: filter specifications applied to the entity collections.
//!
//! A filter is a conjunction of independent sub-predicates; each one defaults to
//! match-all when unset (a `min_score` of 0 matches everyone). Free-text search is a
//! case-insensitive substring match over a fixed field set. Filters are re-evaluated
//! synchronously and the result replaces the deck wholesale; deck sizes are tens of
//! entities, so there is no incremental diffing.

use crate::core::entity::{Candidate, Interview, InterviewStatus, Stage};
use crate::core::store::DecisionStore;
use clap::ValueEnum;

/// Review-status sub-predicate, resolved against the decision store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReviewStatus {
    Pending,
    Reviewed,
    #[default]
    All,
}

impl ReviewStatus {
    fn matches(&self, id: &str, store: &DecisionStore) -> bool {
        match self {
            ReviewStatus::Pending => store.get(id).is_none(),
            ReviewStatus::Reviewed => store.get(id).is_some(),
            ReviewStatus::All => true,
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Filter specification for candidate listings and decks
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    pub search: Option<String>,
    pub stage: Option<Stage>,
    pub min_score: f32,
    pub min_experience: f32,
    pub starred_only: bool,
    pub review_status: ReviewStatus,
}

impl CandidateFilter {
    /// Conjunction of all sub-predicates for one candidate
    pub fn matches(&self, candidate: &Candidate, store: &DecisionStore) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = contains_ci(&candidate.name, &needle)
                || contains_ci(&candidate.role, &needle)
                || contains_ci(&candidate.email, &needle)
                || contains_ci(&candidate.location, &needle);
            if !hit {
                return false;
            }
        }
        if let Some(stage) = self.stage {
            if candidate.stage != stage {
                return false;
            }
        }
        if candidate.score < self.min_score {
            return false;
        }
        if candidate.experience_years < self.min_experience {
            return false;
        }
        if self.starred_only && !candidate.starred {
            return false;
        }
        self.review_status.matches(&candidate.id, store)
    }

    /// Build the ordered deck: matching candidates in source-collection order
    pub fn build_deck(&self, candidates: &[Candidate], store: &DecisionStore) -> Vec<Candidate> {
        candidates
            .iter()
            .filter(|c| self.matches(c, store))
            .cloned()
            .collect()
    }
}

/// Filter specification for interview listings and decks
#[derive(Debug, Clone, Default)]
pub struct InterviewFilter {
    pub search: Option<String>,
    pub status: Option<InterviewStatus>,
    pub min_score: f32,
    pub review_status: ReviewStatus,
}

impl InterviewFilter {
    /// Conjunction of all sub-predicates for one interview
    pub fn matches(&self, interview: &Interview, store: &DecisionStore) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = contains_ci(&interview.candidate_name, &needle)
                || contains_ci(&interview.role, &needle)
                || contains_ci(&interview.interviewer, &needle);
            if !hit {
                return false;
            }
        }
        if let Some(status) = self.status {
            if interview.status != status {
                return false;
            }
        }
        if interview.scores.overall() < self.min_score {
            return false;
        }
        self.review_status.matches(&interview.id, store)
    }

    /// Build the ordered deck: matching interviews in source-collection order
    pub fn build_deck(&self, interviews: &[Interview], store: &DecisionStore) -> Vec<Interview> {
        interviews
            .iter()
            .filter(|i| self.matches(i, store))
            .cloned()
            .collect()
    }
}
