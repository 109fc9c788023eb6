//! Numbered candidate listing with filters.
//!
//! The terminal analog of the candidate table: every run re-reads the decision store
//! from disk (so decisions made in another session show up), applies the filter
//! conjunction, prints numbered rows and snapshots them for `show`.

use crate::core::{
    dataset::Dataset,
    entity::{Reviewable, Stage},
    error::Result,
    filter::{CandidateFilter, ReviewStatus},
    output::{print_info, print_section_header},
    snapshot::{EntityKind, ListSnapshot},
    store::DecisionStore,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use clap::Args;
use std::path::Path;

/// Filter flags shared by the listing and the review session
#[derive(Args, Debug, Clone, Default)]
pub struct CandidateFilterArgs {
    /// Case-insensitive substring match over name, role, email and location
    #[arg(long)]
    pub search: Option<String>,

    /// Only candidates in this pipeline stage
    #[arg(long, value_enum)]
    pub stage: Option<Stage>,

    /// Minimum overall score (0-100)
    #[arg(long, default_value_t = 0.0)]
    pub min_score: f32,

    /// Minimum years of experience
    #[arg(long, default_value_t = 0.0)]
    pub min_experience: f32,

    /// Only starred candidates
    #[arg(long)]
    pub starred: bool,

    /// Filter by review status in the selected list
    #[arg(long, value_enum, default_value_t = ReviewStatus::All)]
    pub status: ReviewStatus,
}

impl CandidateFilterArgs {
    pub fn to_filter(&self) -> CandidateFilter {
        CandidateFilter {
            search: self.search.clone(),
            stage: self.stage,
            min_score: self.min_score,
            min_experience: self.min_experience,
            starred_only: self.starred,
            review_status: self.status,
        }
    }
}

pub fn execute_candidates(
    args: &CandidateFilterArgs,
    list_id: &str,
    data_dir: Option<&Path>,
) -> Result<()> {
    let dataset = Dataset::load(data_dir)?;
    // Opening reads the store file fresh, which is the explicit refresh of the view
    let store = DecisionStore::open_candidate_list(list_id)?;

    let deck = args.to_filter().build_deck(&dataset.candidates, &store);

    print_section_header(&format!(
        "Candidates ({} of {})",
        deck.len(),
        dataset.candidates.len()
    ));

    if deck.is_empty() {
        print_info("No candidates match the current filters.");
        return Ok(());
    }

    for (i, candidate) in deck.iter().enumerate() {
        let detail = candidate.subline();
        let context = TemplateContext {
            n: Some(i + 1),
            name: Some(&candidate.name),
            detail: Some(&detail),
            score: Some(candidate.score),
            decision: store.get(&candidate.id).map(|r| r.decision),
            ..Default::default()
        };
        println!("{}", render_template(TEMPLATES.list_line, &context));
    }
    println!();

    let snapshot = ListSnapshot::new(
        EntityKind::Candidate,
        Some(list_id.to_string()),
        deck.iter().map(|c| c.id.clone()),
    );
    if let Err(e) = snapshot.save() {
        // The listing is still useful without the snapshot; only `show` degrades
        log::warn!("Snapshot save failed (listing will continue): {e}");
    }

    Ok(())
}
