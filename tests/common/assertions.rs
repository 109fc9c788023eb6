//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating talent-deck command output, listing
//! rows, review cards and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for a numbered listing row
pub fn has_row_index(index: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}]"))
}

/// Creates a predicate that checks for a review badge on a listing row
pub fn has_badge(badge: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({badge})"))
}

/// Creates a predicate that checks for the review progress footer
pub fn has_card_progress(n: usize, total: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Card {n} of {total}"))
}

/// Creates a predicate that checks for the missing-access-code error
pub fn access_code_required() -> impl Predicate<str> {
    predicates::str::contains("requires an access code")
}

/// Creates a predicate that checks for the code mismatch feedback
pub fn wrong_code() -> impl Predicate<str> {
    predicates::str::contains("That code is not right")
}

/// Creates a predicate that checks for the completion summary header
pub fn review_complete() -> impl Predicate<str> {
    predicates::str::contains("Review complete")
}

/// Creates a predicate that checks for the missing-snapshot error
pub fn no_listing_yet() -> impl Predicate<str> {
    predicates::str::contains("No listing found")
}
