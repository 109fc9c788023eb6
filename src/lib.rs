//! Talent Deck - A terminal tool for browsing and triaging candidate and interview records.
//!
//! This library provides the core functionality for talent-deck, including the entity
//! model, deck filtering, the persisted decision store, the swipe gesture interpreter
//! and the review session state machine, plus UI formatting.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Candidate and interview records and the dataset loader
//! - Deck building from filter specifications
//! - Per-context persisted decision stores
//! - Swipe gesture classification and card transforms
//! - The review session state machine
//! - Error handling and result types
//! - UI templates and color system

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    classify_release,
    decision_for,
    // UI and formatting
    render_template,
    render_template_plain,
    strip_ansi_codes,

    // Access gate
    AccessGate,

    // Entity model
    Candidate,
    CandidateFilter,
    CardPhase,
    CardTransform,

    // Dataset
    Dataset,
    // Decisions and persistence
    Decision,
    DecisionRecord,
    DecisionStore,
    DecisionTally,
    HistoryEntry,
    Interview,
    InterviewFilter,
    InterviewScores,
    InterviewStatus,
    ReleaseOutcome,
    ReleaseResult,
    Result,

    // Review session
    ReviewSession,
    ReviewStatus,
    Reviewable,
    SessionState,
    Stage,
    SwipeDirection,

    // Error handling
    TalentDeckError,
    TemplateContext,
    Templates,
    CANDIDATE_DECISIONS,
    INTERVIEW_DECISIONS,
    TEMPLATES,
};
