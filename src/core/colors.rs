//! Unified color system for decision, stage and score visualization.
//!
//! Centralizes the color mapping so listings, cards and summaries color the same
//! concept the same way everywhere.
//!
//! # Color Scheme
//! - **Good fit**: Green
//! - **Maybe**: Yellow
//! - **Pass/nope**: Red
//! - **Pending** (no decision yet): Muted bright_black
//! - **Scores**: Banded green / yellow / red at 80 and 60

use crate::core::decision::Decision;
use crate::core::entity::Stage;
use colored::*;

/// Color styling for a review decision; `None` means not yet reviewed
pub fn get_decision_color_style(decision: Option<Decision>) -> Box<dyn Fn(&str) -> ColoredString> {
    match decision {
        Some(Decision::GoodFit) => Box::new(|text: &str| text.green()),
        Some(Decision::Maybe) => Box::new(|text: &str| text.yellow()),
        Some(Decision::Nope) => Box::new(|text: &str| text.red()),
        None => Box::new(|text: &str| text.bright_black()),
    }
}

/// Review badge text for a listing row
pub fn badge_text(decision: Option<Decision>) -> &'static str {
    match decision {
        Some(d) => d.as_str(),
        None => "pending",
    }
}

/// Colored review badge for a listing row
pub fn get_colored_badge(decision: Option<Decision>) -> ColoredString {
    let color_fn = get_decision_color_style(decision);
    color_fn(badge_text(decision))
}

/// Score colored by band: green at 80+, yellow at 60+, red below
pub fn get_colored_score(score: f32) -> ColoredString {
    let text = format!("{score:>5.1}");
    if score >= 80.0 {
        text.green()
    } else if score >= 60.0 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Color styling for a pipeline stage
pub fn get_stage_color_style(stage: Stage) -> Box<dyn Fn(&str) -> ColoredString> {
    match stage {
        Stage::Applied => Box::new(|text: &str| text.cyan()),
        Stage::Screening => Box::new(|text: &str| text.blue()),
        Stage::Interviewing => Box::new(|text: &str| text.magenta()),
        Stage::Offer => Box::new(|text: &str| text.yellow()),
        Stage::Hired => Box::new(|text: &str| text.green()),
    }
}
