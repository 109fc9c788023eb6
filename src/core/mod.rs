//! Core functionality for the talent-deck tool.
//!
//! This module provides the fundamental building blocks for browsing and reviewing
//! candidate and interview records: the entity model, deck building, the decision
//! store, the swipe gesture interpreter, the review session state machine, and the
//! shared error handling and UI components.

pub mod colors;
pub mod dataset;
pub mod decision;
pub mod dirs;
pub mod entity;
pub mod error;
pub mod filter;
pub mod gate;
pub mod gesture;
pub mod output;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod templates;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, TalentDeckError};

// === Entity model ===
// Candidate and interview records plus the review seam
pub use entity::{Candidate, Interview, InterviewScores, InterviewStatus, Reviewable, Stage};

// === Dataset ===
// Read-only entity collections (embedded mock data or --data-dir)
pub use dataset::Dataset;

// === Decisions and persistence ===
// Review outcomes and the per-context persisted store
pub use decision::{Decision, DecisionRecord, CANDIDATE_DECISIONS, INTERVIEW_DECISIONS};
pub use store::DecisionStore;

// === Deck building ===
// Filter specifications applied to the collections
pub use filter::{CandidateFilter, InterviewFilter, ReviewStatus};

// === Swipe gesture interpretation ===
// Continuous transform during drag, discrete decision on release
pub use gesture::{
    classify_release, CardTransform, ReleaseOutcome, SwipeDirection, SETTLE_DELAY_MS,
    SWIPE_DISTANCE_THRESHOLD, SWIPE_VELOCITY_THRESHOLD,
};

// === Review session ===
// The state machine orchestrating deck, store and undo history
pub use session::{
    decision_for, CardPhase, DecisionTally, HistoryEntry, ReleaseResult, ReviewSession,
    SessionState,
};

// === Access gate ===
// Client-side code comparison preceding a session (UX friction, not security)
pub use gate::AccessGate;

// === Listing snapshot ===
// Numbered rows of the most recent listing, consumed by `show`
pub use snapshot::{EntityKind, ListSnapshot, SnapshotEntry};

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header, print_success, print_toast};
