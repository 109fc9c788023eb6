//! Inspect or clear a persisted decision store.

use crate::core::{
    colors::get_colored_badge,
    dataset::Dataset,
    error::Result,
    output::{print_info, print_section_header, print_success},
    store::DecisionStore,
};
use clap::ValueEnum;
use colored::*;
use std::path::Path;

/// Which review context's store to operate on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecisionContext {
    Candidates,
    Interviews,
}

pub fn execute_decisions(
    context: DecisionContext,
    list_id: &str,
    clear: bool,
    data_dir: Option<&Path>,
) -> Result<()> {
    let (mut store, label) = match context {
        DecisionContext::Candidates => (
            DecisionStore::open_candidate_list(list_id)?,
            format!("candidate list '{list_id}'"),
        ),
        DecisionContext::Interviews => (DecisionStore::open_interviews()?, "interviews".to_string()),
    };

    if clear {
        let count = store.len();
        store.clear()?;
        print_success(&format!("Cleared {count} decision(s) for {label}"));
        return Ok(());
    }

    if store.is_empty() {
        print_info(&format!("No decisions recorded for {label}."));
        return Ok(());
    }

    let dataset = Dataset::load(data_dir)?;
    print_section_header(&format!("Decisions for {label} ({})", store.len()));

    // Stable output: newest decisions first
    let mut records: Vec<_> = store.iter().collect();
    records.sort_by(|a, b| b.1.decided_at.cmp(&a.1.decided_at));

    for (id, record) in records {
        let name = match context {
            DecisionContext::Candidates => dataset.candidate(id).map(|c| c.name.as_str()),
            DecisionContext::Interviews => {
                dataset.interview(id).map(|i| i.candidate_name.as_str())
            }
        };
        println!(
            "  {:<10} {}  {}",
            get_colored_badge(Some(record.decision)),
            name.unwrap_or(id).white(),
            record
                .decided_at
                .format("%Y-%m-%d %H:%M UTC")
                .to_string()
                .bright_black()
        );
    }
    println!();

    Ok(())
}
