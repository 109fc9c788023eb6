//! Access gate for review sessions.
//!
//! A review context carries an expected code (the equivalent of a query parameter on a
//! shared review link) and entry requires typing it back. This is UX friction to stop
//! casual misclicks, not a security boundary: the expected code travels in the same
//! invocation the user already has, and nothing here must ever be presented as
//! authentication.

/// Duration of the mismatch feedback ("shake") shown before re-prompting
pub const SHAKE_DURATION_MS: u64 = 500;

/// Expected-code holder gating entry into a review session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    expected: String,
}

impl AccessGate {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Exact string equality; no trimming beyond what the caller does
    pub fn verify(&self, input: &str) -> bool {
        input == self.expected
    }
}
