//! Aggregate pipeline statistics.
//!
//! Text renditions of the dashboard widgets: headline counts, a stage distribution
//! bar chart, a score histogram and the decision tallies from the default review
//! contexts.

use crate::core::{
    colors::{get_decision_color_style, get_stage_color_style},
    dataset::Dataset,
    decision::Decision,
    entity::{InterviewStatus, Stage},
    error::Result,
    output::print_section_header,
    store::DecisionStore,
};
use colored::*;
use std::path::Path;

const ALL_STAGES: [Stage; 5] = [
    Stage::Applied,
    Stage::Screening,
    Stage::Interviewing,
    Stage::Offer,
    Stage::Hired,
];

const SCORE_BUCKETS: [(f32, f32, &str); 5] = [
    (90.0, 101.0, "90-100"),
    (80.0, 90.0, "80-89 "),
    (70.0, 80.0, "70-79 "),
    (60.0, 70.0, "60-69 "),
    (0.0, 60.0, " 0-59 "),
];

pub fn execute_stats(data_dir: Option<&Path>) -> Result<()> {
    let dataset = Dataset::load(data_dir)?;

    print_headline(&dataset);
    print_stage_distribution(&dataset);
    print_score_histogram(&dataset);
    print_decision_tallies()?;

    Ok(())
}

fn print_headline(dataset: &Dataset) {
    let candidates = &dataset.candidates;
    let starred = candidates.iter().filter(|c| c.starred).count();
    let avg_score = if candidates.is_empty() {
        0.0
    } else {
        candidates.iter().map(|c| c.score).sum::<f32>() / candidates.len() as f32
    };
    let completed = dataset
        .interviews
        .iter()
        .filter(|i| i.status == InterviewStatus::Completed)
        .count();

    print_section_header("Pipeline");
    println!("  {} {}", "Candidates:".bold(), candidates.len());
    println!("  {} {}", "Starred:".bold(), starred);
    println!("  {} {:.1}", "Average score:".bold(), avg_score);
    println!(
        "  {} {} ({} completed)",
        "Interviews:".bold(),
        dataset.interviews.len(),
        completed
    );
}

fn print_stage_distribution(dataset: &Dataset) {
    print_section_header("Candidates by stage");
    for stage in ALL_STAGES {
        let count = dataset
            .candidates
            .iter()
            .filter(|c| c.stage == stage)
            .count();
        let style = get_stage_color_style(stage);
        let bar = "█".repeat(count);
        println!("  {:<13} {} {}", stage.as_str(), style(&bar), count);
    }
}

fn print_score_histogram(dataset: &Dataset) {
    print_section_header("Candidate score distribution");
    for (lo, hi, label) in SCORE_BUCKETS {
        let count = dataset
            .candidates
            .iter()
            .filter(|c| c.score >= lo && c.score < hi)
            .count();
        println!("  {} {} {}", label, "▇".repeat(count).cyan(), count);
    }
}

/// Decision tallies from the interview store and the default candidate list.
/// Other candidate lists are reachable via `decisions --list <id>`.
fn print_decision_tallies() -> Result<()> {
    let candidate_store = DecisionStore::open_candidate_list("general")?;
    let interview_store = DecisionStore::open_interviews()?;

    print_section_header("Review decisions");
    print_tally_line("Candidates (general)", &candidate_store);
    print_tally_line("Interviews", &interview_store);
    println!();
    Ok(())
}

fn print_tally_line(label: &str, store: &DecisionStore) {
    let count_of = |decision: Decision| {
        store
            .iter()
            .filter(|(_, record)| record.decision == decision)
            .count()
    };
    let good_fit = count_of(Decision::GoodFit);
    let maybe = count_of(Decision::Maybe);
    let nope = count_of(Decision::Nope);

    let good_style = get_decision_color_style(Some(Decision::GoodFit));
    let maybe_style = get_decision_color_style(Some(Decision::Maybe));
    let nope_style = get_decision_color_style(Some(Decision::Nope));

    println!(
        "  {:<21} {} good fit  {} maybe  {} pass",
        label,
        good_style(&good_fit.to_string()),
        maybe_style(&maybe.to_string()),
        nope_style(&nope.to_string())
    );
}
