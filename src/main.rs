use clap::{Parser, Subcommand};
use talent_deck::commands::*;
use talent_deck::core::print_error;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "talent-deck")]
#[command(about = "Browse and triage candidate and interview records from the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Load the dataset from a directory instead of the embedded mock data
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidates as numbered rows (filterable)
    Candidates {
        #[command(flatten)]
        filters: CandidateFilterArgs,
        /// Candidate list (review context) the badges come from
        #[arg(long, default_value = "general")]
        list: String,
    },
    /// List interviews as numbered rows (filterable)
    Interviews {
        #[command(flatten)]
        filters: InterviewFilterArgs,
    },
    /// Show details for a numbered row from the last listing
    Show {
        /// 1-based row number from the last listing
        index: usize,
    },
    /// Aggregate pipeline statistics
    Stats,
    /// Inspect or clear a persisted decision store
    Decisions {
        /// Which review context's store to operate on
        #[arg(long, value_enum, default_value_t = DecisionContext::Candidates)]
        context: DecisionContext,
        /// Candidate list id (ignored for the interviews context)
        #[arg(long, default_value = "general")]
        list: String,
        /// Drop every decision in the context
        #[arg(long)]
        clear: bool,
    },
    /// Run a swipe review session
    Review {
        #[command(subcommand)]
        target: ReviewCommands,
    },
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// Review candidates in a list
    Candidates(ReviewCandidatesArgs),
    /// Review interviews
    Interviews(ReviewInterviewsArgs),
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Commands::Candidates { filters, list } => {
            if let Err(e) = execute_candidates(&filters, &list, data_dir) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Interviews { filters } => {
            if let Err(e) = execute_interviews(&filters, data_dir) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Show { index } => {
            if let Err(e) = execute_show(index, data_dir) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Stats => {
            if let Err(e) = execute_stats(data_dir) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Decisions {
            context,
            list,
            clear,
        } => {
            if let Err(e) = execute_decisions(context, &list, clear, data_dir) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Review { target } => {
            let result = match target {
                ReviewCommands::Candidates(args) => execute_review_candidates(&args, data_dir),
                ReviewCommands::Interviews(args) => execute_review_interviews(&args, data_dir),
            };
            if let Err(e) = result {
                print_error(&format!("{e:#}"));
                std::process::exit(1);
            }
        }
    }
}
