//! Numbered interview listing with filters.

use crate::core::{
    dataset::Dataset,
    entity::{InterviewStatus, Reviewable},
    error::Result,
    filter::{InterviewFilter, ReviewStatus},
    output::{print_info, print_section_header},
    snapshot::{EntityKind, ListSnapshot},
    store::DecisionStore,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use clap::Args;
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct InterviewFilterArgs {
    /// Case-insensitive substring match over candidate, role and interviewer
    #[arg(long)]
    pub search: Option<String>,

    /// Only interviews with this scheduling status
    #[arg(long, value_enum)]
    pub interview_status: Option<InterviewStatus>,

    /// Minimum overall interview score (average of the four sub-scores)
    #[arg(long, default_value_t = 0.0)]
    pub min_score: f32,

    /// Filter by review status
    #[arg(long, value_enum, default_value_t = ReviewStatus::All)]
    pub status: ReviewStatus,
}

impl InterviewFilterArgs {
    pub fn to_filter(&self) -> InterviewFilter {
        InterviewFilter {
            search: self.search.clone(),
            status: self.interview_status,
            min_score: self.min_score,
            review_status: self.status,
        }
    }
}

pub fn execute_interviews(args: &InterviewFilterArgs, data_dir: Option<&Path>) -> Result<()> {
    let dataset = Dataset::load(data_dir)?;
    let store = DecisionStore::open_interviews()?;

    let deck = args.to_filter().build_deck(&dataset.interviews, &store);

    print_section_header(&format!(
        "Interviews ({} of {})",
        deck.len(),
        dataset.interviews.len()
    ));

    if deck.is_empty() {
        print_info("No interviews match the current filters.");
        return Ok(());
    }

    for (i, interview) in deck.iter().enumerate() {
        let detail = interview.subline();
        let context = TemplateContext {
            n: Some(i + 1),
            name: Some(&interview.candidate_name),
            detail: Some(&detail),
            score: Some(interview.scores.overall()),
            decision: store.get(&interview.id).map(|r| r.decision),
            ..Default::default()
        };
        println!("{}", render_template(TEMPLATES.list_line, &context));
    }
    println!();

    let snapshot = ListSnapshot::new(
        EntityKind::Interview,
        None,
        deck.iter().map(|i| i.id.clone()),
    );
    if let Err(e) = snapshot.save() {
        log::warn!("Snapshot save failed (listing will continue): {e}");
    }

    Ok(())
}
