//! The review session state machine.
//!
//! One generic session drives both the candidate and the interview swipe flows,
//! parameterized over a [`Reviewable`] entity type, a decision store and the set of
//! decisions the context allows. States run `Authenticating -> Reviewing -> Completed`,
//! with a per-card sub-state of `Idle | Dragging | Committing`.
//!
//! Key semantics:
//! - `Completed` is derived, never stored: the session is complete exactly when
//!   `current_index == deck.len()` on a non-empty deck. Undo from `Completed` therefore
//!   re-enters `Reviewing` automatically.
//! - A swipe writes the decision store synchronously and pushes one history entry; the
//!   `Committing` sub-state rejects re-entrant swipes until [`ReviewSession::settle`]
//!   runs, so one card can never produce two writes in a round.
//! - Undo is a full reversal: it deletes the store key, not just the visual state.
//! - History is session-local and never persisted.

use crate::core::decision::Decision;
use crate::core::entity::Reviewable;
use crate::core::error::Result;
use crate::core::gate::AccessGate;
use crate::core::gesture::{classify_release, CardTransform, ReleaseOutcome, SwipeDirection};
use crate::core::store::DecisionStore;

/// Top-level session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticating,
    Reviewing,
    Completed,
}

/// Sub-state of the current card while reviewing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Idle,
    Dragging,
    Committing,
}

/// One applied decision, kept for undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub index: usize,
    pub decision: Decision,
}

/// Per-decision counts shown on the completion screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecisionTally {
    pub good_fit: usize,
    pub maybe: usize,
    pub nope: usize,
}

impl DecisionTally {
    pub fn total(&self) -> usize {
        self.good_fit + self.maybe + self.nope
    }
}

/// Result of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseResult {
    /// Threshold met: the decision was recorded and the card is committing
    Committed(Decision),
    /// Threshold not met: the card returned to neutral
    Returned,
}

/// The decision a committed swipe direction maps to
pub fn decision_for(direction: SwipeDirection) -> Decision {
    match direction {
        SwipeDirection::Right => Decision::GoodFit,
        SwipeDirection::Left => Decision::Nope,
    }
}

/// Generic swipe-review session over an ordered deck of entities
#[derive(Debug)]
pub struct ReviewSession<E: Reviewable> {
    deck: Vec<E>,
    store: DecisionStore,
    allowed: &'static [Decision],
    gate: Option<AccessGate>,
    auth_error: bool,
    current_index: usize,
    history: Vec<HistoryEntry>,
    phase: CardPhase,
    transform: CardTransform,
    last_dx: f32,
    last_vx: f32,
}

impl<E: Reviewable> ReviewSession<E> {
    /// Create a gated session; it starts in `Authenticating`
    pub fn new(deck: Vec<E>, store: DecisionStore, gate: AccessGate, allowed: &'static [Decision]) -> Self {
        Self {
            deck,
            store,
            allowed,
            gate: Some(gate),
            auth_error: false,
            current_index: 0,
            history: Vec::new(),
            phase: CardPhase::Idle,
            transform: CardTransform::NEUTRAL,
            last_dx: 0.0,
            last_vx: 0.0,
        }
    }

    /// Create a session with the gate already passed; it starts in `Reviewing`
    pub fn open(deck: Vec<E>, store: DecisionStore, allowed: &'static [Decision]) -> Self {
        let mut session = Self::new(deck, store, AccessGate::new(""), allowed);
        session.gate = None;
        session
    }

    /// Current top-level state, derived from gate presence and deck position
    pub fn state(&self) -> SessionState {
        if self.gate.is_some() {
            SessionState::Authenticating
        } else if !self.deck.is_empty() && self.current_index >= self.deck.len() {
            SessionState::Completed
        } else {
            SessionState::Reviewing
        }
    }

    /// Attempt the access gate. Returns true on success; on mismatch the transient
    /// error flag is raised and the session stays in `Authenticating`.
    pub fn authenticate(&mut self, input: &str) -> bool {
        match &self.gate {
            Some(gate) if gate.verify(input) => {
                log::debug!("Access code accepted, entering review");
                self.gate = None;
                true
            }
            Some(_) => {
                log::debug!("Access code mismatch");
                self.auth_error = true;
                false
            }
            // Already authenticated
            None => true,
        }
    }

    /// Consume the transient mismatch flag (drives the shake feedback once)
    pub fn take_auth_error(&mut self) -> bool {
        std::mem::take(&mut self.auth_error)
    }

    /// The entity under review, if any
    pub fn current(&self) -> Option<&E> {
        if self.state() == SessionState::Reviewing {
            self.deck.get(self.current_index)
        } else {
            None
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    pub fn transform(&self) -> CardTransform {
        self.transform
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Decisions this context allows (interview sessions exclude maybe)
    pub fn allowed(&self) -> &'static [Decision] {
        self.allowed
    }

    /// Decision currently stored for an id, if any
    pub fn stored_decision(&self, id: &str) -> Option<Decision> {
        self.store.get(id).map(|r| r.decision)
    }

    /// Update the live transform for an in-progress drag. Ignored while committing
    /// or outside `Reviewing`.
    pub fn drag(&mut self, dx: f32, vx: f32) {
        if self.current_index >= self.deck.len()
            || self.state() != SessionState::Reviewing
            || self.phase == CardPhase::Committing
        {
            return;
        }
        self.phase = CardPhase::Dragging;
        self.transform = CardTransform::from_drag(dx);
        self.last_dx = dx;
        self.last_vx = vx;
    }

    /// Release the drag: classify, and either record the mapped decision or spring
    /// the card back to neutral.
    pub fn release(&mut self) -> Result<ReleaseResult> {
        if self.phase != CardPhase::Dragging {
            return Ok(ReleaseResult::Returned);
        }
        let outcome = classify_release(self.last_dx, self.last_vx);
        self.last_dx = 0.0;
        self.last_vx = 0.0;
        match outcome {
            ReleaseOutcome::Commit(direction) => {
                let decision = decision_for(direction);
                self.phase = CardPhase::Idle;
                if self.swipe(decision)? {
                    Ok(ReleaseResult::Committed(decision))
                } else {
                    self.transform = CardTransform::NEUTRAL;
                    Ok(ReleaseResult::Returned)
                }
            }
            ReleaseOutcome::Return => {
                self.transform = CardTransform::NEUTRAL;
                self.phase = CardPhase::Idle;
                Ok(ReleaseResult::Returned)
            }
        }
    }

    /// Record a decision for the current card.
    ///
    /// Returns `Ok(false)` when the swipe is ignored: deck exhausted, still settling a
    /// previous commit, or the decision is not in this context's allowed set. On
    /// success the store write has already happened and the card is `Committing`
    /// until [`Self::settle`].
    pub fn swipe(&mut self, decision: Decision) -> Result<bool> {
        // Covers the exhausted deck and the empty deck; `state()` alone reports an
        // empty deck as `Reviewing`
        if self.current_index >= self.deck.len() || self.state() != SessionState::Reviewing {
            return Ok(false);
        }
        if self.phase == CardPhase::Committing {
            log::debug!("Ignoring re-entrant swipe while committing");
            return Ok(false);
        }
        if !self.allowed.contains(&decision) {
            log::debug!("Decision {decision} not allowed in this context");
            return Ok(false);
        }

        let id = self.deck[self.current_index].id().to_string();
        self.history.push(HistoryEntry {
            index: self.current_index,
            decision,
        });
        self.store.set(&id, decision)?;
        log::debug!(
            "Recorded {decision} for '{id}' ({}/{})",
            self.current_index + 1,
            self.deck.len()
        );
        self.phase = CardPhase::Committing;
        Ok(true)
    }

    /// Finish a commit after the exit animation: advance to the next card and reset
    /// the transform. No-op unless a commit is pending.
    pub fn settle(&mut self) {
        if self.phase != CardPhase::Committing {
            return;
        }
        self.current_index += 1;
        self.transform = CardTransform::NEUTRAL;
        self.phase = CardPhase::Idle;
    }

    /// Reverse the most recent decision: delete the store key, restore the deck
    /// position, reset the transform. No-op on empty history or mid-commit.
    pub fn undo(&mut self) -> Result<Option<HistoryEntry>> {
        if self.phase == CardPhase::Committing {
            return Ok(None);
        }
        let entry = match self.history.pop() {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let id = self.deck[entry.index].id().to_string();
        self.store.remove(&id)?;
        self.current_index = entry.index;
        self.transform = CardTransform::NEUTRAL;
        self.phase = CardPhase::Idle;
        log::debug!("Undid {} for '{id}'", entry.decision);
        Ok(Some(entry))
    }

    /// Filter change: replace the deck wholesale, clear history, reset position.
    pub fn rebuild(&mut self, deck: Vec<E>) {
        self.deck = deck;
        self.history.clear();
        self.current_index = 0;
        self.transform = CardTransform::NEUTRAL;
        self.phase = CardPhase::Idle;
        self.last_dx = 0.0;
        self.last_vx = 0.0;
    }

    /// Tally of this session's decisions, derived from history
    pub fn summary(&self) -> DecisionTally {
        let mut tally = DecisionTally::default();
        for entry in &self.history {
            match entry.decision {
                Decision::GoodFit => tally.good_fit += 1,
                Decision::Maybe => tally.maybe += 1,
                Decision::Nope => tally.nope += 1,
            }
        }
        tally
    }

    /// Give the store back, e.g. to reload it for a listing
    pub fn into_store(self) -> DecisionStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decision::{CANDIDATE_DECISIONS, INTERVIEW_DECISIONS};
    use crate::core::entity::{Candidate, Stage};
    use tempfile::TempDir;

    fn candidate(id: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Person {id}"),
            role: "Engineer".to_string(),
            email: format!("{id}@example.com"),
            location: "Remote".to_string(),
            stage: Stage::Screening,
            experience_years: 3.0,
            starred: false,
            score: 75.0,
        }
    }

    fn store(temp: &TempDir) -> DecisionStore {
        DecisionStore::open_at(temp.path().join("store.json")).unwrap()
    }

    fn session(temp: &TempDir, n: usize) -> ReviewSession<Candidate> {
        let deck: Vec<Candidate> = (0..n).map(|i| candidate(&format!("c{i}"))).collect();
        ReviewSession::open(deck, store(temp), CANDIDATE_DECISIONS)
    }

    fn swipe_and_settle(s: &mut ReviewSession<Candidate>, decision: Decision) {
        assert!(s.swipe(decision).unwrap());
        s.settle();
    }

    #[test]
    fn test_gated_session_starts_authenticating() {
        let temp = TempDir::new().unwrap();
        let mut s = ReviewSession::new(
            vec![candidate("c0")],
            store(&temp),
            AccessGate::new("123456"),
            CANDIDATE_DECISIONS,
        );
        assert_eq!(s.state(), SessionState::Authenticating);
        assert!(s.current().is_none());

        // Mismatch raises the transient flag and stays put
        assert!(!s.authenticate("654321"));
        assert_eq!(s.state(), SessionState::Authenticating);
        assert!(s.take_auth_error());
        assert!(!s.take_auth_error());

        assert!(s.authenticate("123456"));
        assert_eq!(s.state(), SessionState::Reviewing);
        assert!(s.current().is_some());
    }

    #[test]
    fn test_swipes_record_history_and_store() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 3);

        swipe_and_settle(&mut s, Decision::GoodFit);
        swipe_and_settle(&mut s, Decision::Nope);

        assert_eq!(s.history().len(), 2);
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.stored_decision("c0"), Some(Decision::GoodFit));
        assert_eq!(s.stored_decision("c1"), Some(Decision::Nope));
        assert_eq!(s.stored_decision("c2"), None);
    }

    #[test]
    fn test_committing_rejects_reentrant_swipe() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 2);

        assert!(s.swipe(Decision::GoodFit).unwrap());
        assert_eq!(s.phase(), CardPhase::Committing);
        // A second swipe before settle must not touch history or the store
        assert!(!s.swipe(Decision::Nope).unwrap());
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.stored_decision("c0"), Some(Decision::GoodFit));

        s.settle();
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.phase(), CardPhase::Idle);
    }

    #[test]
    fn test_undo_is_a_full_reversal() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 3);

        swipe_and_settle(&mut s, Decision::Maybe);
        assert_eq!(s.current_index(), 1);

        let entry = s.undo().unwrap().unwrap();
        assert_eq!(entry.index, 0);
        assert_eq!(entry.decision, Decision::Maybe);
        assert_eq!(s.current_index(), 0);
        assert!(s.history().is_empty());
        assert_eq!(s.stored_decision("c0"), None);
        assert_eq!(s.transform(), CardTransform::NEUTRAL);
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 2);
        assert!(s.undo().unwrap().is_none());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_completion_boundary_and_summary() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 3);

        swipe_and_settle(&mut s, Decision::GoodFit);
        swipe_and_settle(&mut s, Decision::Nope);
        assert_eq!(s.state(), SessionState::Reviewing);

        swipe_and_settle(&mut s, Decision::GoodFit);
        assert_eq!(s.state(), SessionState::Completed);
        assert!(s.current().is_none());

        let tally = s.summary();
        assert_eq!(tally.good_fit, 2);
        assert_eq!(tally.nope, 1);
        assert_eq!(tally.maybe, 0);
        assert_eq!(tally.total(), 3);

        // Further swipes on an exhausted deck are ignored
        assert!(!s.swipe(Decision::Maybe).unwrap());
        assert_eq!(s.history().len(), 3);
    }

    #[test]
    fn test_swipe_on_empty_deck_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 0);
        assert_eq!(s.state(), SessionState::Reviewing);
        assert!(s.current().is_none());

        assert!(!s.swipe(Decision::GoodFit).unwrap());
        assert!(s.history().is_empty());
        assert_eq!(s.phase(), CardPhase::Idle);
        assert!(s.into_store().is_empty());
    }

    #[test]
    fn test_drag_and_release_on_empty_deck_are_noops() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 0);

        s.drag(150.0, 0.5);
        assert_eq!(s.phase(), CardPhase::Idle);
        assert_eq!(s.transform(), CardTransform::NEUTRAL);

        assert_eq!(s.release().unwrap(), ReleaseResult::Returned);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_undo_from_completed_reenters_reviewing() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 2);

        swipe_and_settle(&mut s, Decision::GoodFit);
        swipe_and_settle(&mut s, Decision::Nope);
        assert_eq!(s.state(), SessionState::Completed);

        let entry = s.undo().unwrap().unwrap();
        assert_eq!(entry.index, 1);
        assert_eq!(s.state(), SessionState::Reviewing);
        assert_eq!(s.current().unwrap().id, "c1");
        assert_eq!(s.stored_decision("c1"), None);
    }

    #[test]
    fn test_drag_release_commit_path() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 2);

        s.drag(-40.0, 0.0);
        assert_eq!(s.phase(), CardPhase::Dragging);
        s.drag(-120.0, 0.05);
        assert_eq!(s.transform().offset, -120.0);

        let result = s.release().unwrap();
        assert_eq!(result, ReleaseResult::Committed(Decision::Nope));
        assert_eq!(s.phase(), CardPhase::Committing);
        assert_eq!(s.stored_decision("c0"), Some(Decision::Nope));

        s.settle();
        assert_eq!(s.current().unwrap().id, "c1");
    }

    #[test]
    fn test_drag_release_below_threshold_springs_back() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 2);

        s.drag(60.0, 0.1);
        let result = s.release().unwrap();
        assert_eq!(result, ReleaseResult::Returned);
        assert_eq!(s.transform(), CardTransform::NEUTRAL);
        assert_eq!(s.phase(), CardPhase::Idle);
        assert!(s.history().is_empty());
        assert_eq!(s.stored_decision("c0"), None);
    }

    #[test]
    fn test_release_without_drag_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 1);
        assert_eq!(s.release().unwrap(), ReleaseResult::Returned);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_rebuild_resets_position_and_history() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 5);

        swipe_and_settle(&mut s, Decision::GoodFit);
        swipe_and_settle(&mut s, Decision::Nope);
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.history().len(), 2);

        // New deck still contains the previously-current entity; position resets anyway
        let new_deck = vec![candidate("c2"), candidate("c4")];
        s.rebuild(new_deck);
        assert_eq!(s.current_index(), 0);
        assert!(s.history().is_empty());
        assert_eq!(s.state(), SessionState::Reviewing);
        assert_eq!(s.current().unwrap().id, "c2");
    }

    #[test]
    fn test_interview_context_rejects_maybe() {
        let temp = TempDir::new().unwrap();
        let deck = vec![candidate("c0")];
        let mut s = ReviewSession::open(deck, store(&temp), INTERVIEW_DECISIONS);

        assert!(!s.swipe(Decision::Maybe).unwrap());
        assert!(s.history().is_empty());
        assert!(s.swipe(Decision::GoodFit).unwrap());
    }

    #[test]
    fn test_later_decision_overwrites_after_undo_round() {
        let temp = TempDir::new().unwrap();
        let mut s = session(&temp, 2);

        swipe_and_settle(&mut s, Decision::Nope);
        s.undo().unwrap();
        swipe_and_settle(&mut s, Decision::GoodFit);

        assert_eq!(s.stored_decision("c0"), Some(Decision::GoodFit));
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.current_index(), 1);
    }
}
