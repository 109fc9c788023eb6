//! Detail view for a numbered row from the last listing.

use crate::core::{
    colors::{get_colored_badge, get_colored_score, get_stage_color_style},
    dataset::Dataset,
    entity::{Candidate, Interview},
    error::{Result, TalentDeckError},
    output::print_section_header,
    snapshot::{EntityKind, ListSnapshot},
    store::DecisionStore,
};
use colored::*;
use std::path::Path;

pub fn execute_show(index: usize, data_dir: Option<&Path>) -> Result<()> {
    let snapshot = ListSnapshot::load()?;
    let entry = snapshot.entry(index)?;
    let dataset = Dataset::load(data_dir)?;

    match entry.kind {
        EntityKind::Candidate => {
            let candidate = dataset
                .candidate(&entry.id)
                .ok_or_else(|| TalentDeckError::entity_not_found(&entry.id))?;
            let list_id = snapshot.list_id.as_deref().unwrap_or("general");
            let store = DecisionStore::open_candidate_list(list_id)?;
            print_candidate(candidate, &store, list_id);
        }
        EntityKind::Interview => {
            let interview = dataset
                .interview(&entry.id)
                .ok_or_else(|| TalentDeckError::entity_not_found(&entry.id))?;
            let store = DecisionStore::open_interviews()?;
            print_interview(interview, &store);
        }
    }

    Ok(())
}

fn print_candidate(candidate: &Candidate, store: &DecisionStore, list_id: &str) {
    print_section_header(&candidate.name);
    let stage_style = get_stage_color_style(candidate.stage);

    println!("  {} {}", "Role:".bold(), candidate.role);
    println!("  {} {}", "Email:".bold(), candidate.email);
    println!("  {} {}", "Location:".bold(), candidate.location);
    println!(
        "  {} {}",
        "Stage:".bold(),
        stage_style(candidate.stage.as_str())
    );
    println!(
        "  {} {:.1} yrs",
        "Experience:".bold(),
        candidate.experience_years
    );
    println!(
        "  {} {}",
        "Score:".bold(),
        get_colored_score(candidate.score)
    );
    if candidate.starred {
        println!("  {} {}", "Starred:".bold(), "★".yellow());
    }

    let record = store.get(&candidate.id);
    println!(
        "  {} {} (list '{}')",
        "Review:".bold(),
        get_colored_badge(record.map(|r| r.decision)),
        list_id
    );
    if let Some(record) = record {
        println!(
            "  {} {}",
            "Decided:".bold(),
            record.decided_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
    println!();
}

fn print_interview(interview: &Interview, store: &DecisionStore) {
    print_section_header(&format!(
        "{} ({})",
        interview.candidate_name, interview.role
    ));

    println!("  {} {}", "Interviewer:".bold(), interview.interviewer);
    println!("  {} {}", "Date:".bold(), interview.date);
    println!("  {} {}", "Status:".bold(), interview.status);
    println!(
        "  {} {}",
        "Technical:".bold(),
        get_colored_score(interview.scores.technical)
    );
    println!(
        "  {} {}",
        "Communication:".bold(),
        get_colored_score(interview.scores.communication)
    );
    println!(
        "  {} {}",
        "Problem solving:".bold(),
        get_colored_score(interview.scores.problem_solving)
    );
    println!(
        "  {} {}",
        "Culture fit:".bold(),
        get_colored_score(interview.scores.culture_fit)
    );
    println!(
        "  {} {}",
        "Overall:".bold(),
        get_colored_score(interview.scores.overall())
    );
    if !interview.notes.is_empty() {
        println!("  {} {}", "Notes:".bold(), interview.notes);
    }

    let record = store.get(&interview.id);
    println!(
        "  {} {}",
        "Review:".bold(),
        get_colored_badge(record.map(|r| r.decision))
    );
    if let Some(record) = record {
        println!(
            "  {} {}",
            "Decided:".bold(),
            record.decided_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
    println!();
}
