//! The swipe review command.
//!
//! Two frontends drive the same [`ReviewSession`]:
//!
//! - **Interactive** (default on a tty): raw-mode terminal where holding an arrow
//!   key drags the card sideways. Letting go of the key (a quiet poll window)
//!   releases the drag, and a committed card plays a short exit animation before
//!   the deck advances.
//! - **Plain** (`--plain` or piped stdin): newline commands `right`, `left`,
//!   `maybe`, `undo` and `quit`, with the access code read first. Left and right
//!   synthesize a full drag through the gesture path, so both frontends exercise
//!   the same release classification. This is the scriptable surface.

use crate::commands::candidates::CandidateFilterArgs;
use crate::commands::interviews::InterviewFilterArgs;
use crate::core::{
    colors::get_decision_color_style,
    dataset::Dataset,
    decision::{Decision, CANDIDATE_DECISIONS, INTERVIEW_DECISIONS},
    entity::Reviewable,
    error::TalentDeckError,
    gate::{AccessGate, SHAKE_DURATION_MS},
    gesture::{CardTransform, SwipeDirection, SETTLE_DELAY_MS, SWIPE_DISTANCE_THRESHOLD},
    output::{print_error, print_info, print_section_header, print_success, print_toast},
    session::{CardPhase, ReleaseResult, ReviewSession, SessionState},
    store::DecisionStore,
    templates::{render_template, render_template_plain, TemplateContext, TEMPLATES},
};
use anyhow::Context;
use clap::Args;
use colored::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

/// Displacement a synthesized plain-mode drag travels, comfortably past the
/// commit threshold
const COMMIT_DRAG_DX: f32 = SWIPE_DISTANCE_THRESHOLD + 40.0;

/// Pixels added per held arrow-key repeat in the interactive frontend
const DRAG_STEP: f32 = 24.0;

/// Quiet poll window that counts as letting go of the card
const RELEASE_POLL_MS: u64 = 150;

/// Frames sampled for the exit animation; together they span the settle delay
const EXIT_FRAMES: u32 = 5;

const WRONG_CODE_MSG: &str = "That code is not right. Check the review invitation and try again.";
const EMPTY_DECK_MSG: &str = "Nothing to review: no entries match the current filters.";

#[derive(Args, Debug)]
pub struct ReviewCandidatesArgs {
    #[command(flatten)]
    pub filters: CandidateFilterArgs,

    /// Candidate list (review context) to record decisions in
    #[arg(long, default_value = "general")]
    pub list: String,

    /// Access code for the review context
    #[arg(long)]
    pub code: Option<String>,

    /// Line-based frontend: read commands from stdin instead of key events
    #[arg(long)]
    pub plain: bool,
}

#[derive(Args, Debug)]
pub struct ReviewInterviewsArgs {
    #[command(flatten)]
    pub filters: InterviewFilterArgs,

    /// Access code for the review context
    #[arg(long)]
    pub code: Option<String>,

    /// Line-based frontend: read commands from stdin instead of key events
    #[arg(long)]
    pub plain: bool,
}

pub fn execute_review_candidates(
    args: &ReviewCandidatesArgs,
    data_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let code = args
        .code
        .as_deref()
        .ok_or(TalentDeckError::AccessCodeRequired)?;

    let dataset = Dataset::load(data_dir)?;
    let store = DecisionStore::open_candidate_list(&args.list)?;
    let deck = args
        .filters
        .to_filter()
        .build_deck(&dataset.candidates, &store);
    log::info!(
        "Starting candidate review for list '{}' with {} card(s)",
        args.list,
        deck.len()
    );

    let mut session = ReviewSession::new(deck, store, AccessGate::new(code), CANDIDATE_DECISIONS);
    run_session(
        &mut session,
        &format!("Reviewing candidates (list '{}')", args.list),
        args.plain,
    )
}

pub fn execute_review_interviews(
    args: &ReviewInterviewsArgs,
    data_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let code = args
        .code
        .as_deref()
        .ok_or(TalentDeckError::AccessCodeRequired)?;

    let dataset = Dataset::load(data_dir)?;
    let store = DecisionStore::open_interviews()?;
    let deck = args
        .filters
        .to_filter()
        .build_deck(&dataset.interviews, &store);
    log::info!("Starting interview review with {} card(s)", deck.len());

    let mut session = ReviewSession::new(deck, store, AccessGate::new(code), INTERVIEW_DECISIONS);
    run_session(&mut session, "Reviewing interviews", args.plain)
}

fn run_session<E: Reviewable>(
    session: &mut ReviewSession<E>,
    title: &str,
    plain: bool,
) -> anyhow::Result<()> {
    print_section_header(title);
    if plain || !io::stdin().is_terminal() {
        run_plain(session)
    } else {
        run_interactive(session)
    }
}

// === Plain frontend ===

fn run_plain<E: Reviewable>(session: &mut ReviewSession<E>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while session.state() == SessionState::Authenticating {
        println!("Enter access code:");
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                print_error("No access code entered");
                return Ok(());
            }
        };
        if session.authenticate(line.trim()) {
            print_success("Access code accepted");
        } else {
            session.take_auth_error();
            print_error(WRONG_CODE_MSG);
        }
    }

    if session.is_empty() {
        print_info(EMPTY_DECK_MSG);
        return Ok(());
    }

    print_plain_card(session);
    for line in lines {
        let line = line?;
        let input = line.trim().to_lowercase();
        if input.is_empty() {
            continue;
        }
        match input.as_str() {
            "right" | "r" => plain_swipe(session, SwipeDirection::Right)?,
            "left" | "l" => plain_swipe(session, SwipeDirection::Left)?,
            "maybe" | "m" => plain_maybe(session)?,
            "undo" | "u" => plain_undo(session)?,
            "quit" | "q" => break,
            other => print_error(&TalentDeckError::unknown_review_command(other).to_string()),
        }
        match session.state() {
            SessionState::Reviewing => print_plain_card(session),
            SessionState::Completed => {
                print_info("All cards reviewed. 'undo' revisits the last decision, 'quit' exits.")
            }
            SessionState::Authenticating => {}
        }
    }

    print_summary(session);
    Ok(())
}

/// Synthesize a full drag in the given direction and release it
fn plain_swipe<E: Reviewable>(
    session: &mut ReviewSession<E>,
    direction: SwipeDirection,
) -> anyhow::Result<()> {
    let headline = match session.current() {
        Some(entity) => entity.headline(),
        // Deck exhausted; the session ignores further swipes
        None => return Ok(()),
    };
    session.drag(direction.sign() * COMMIT_DRAG_DX, 0.0);
    if let ReleaseResult::Committed(decision) = session.release()? {
        session.settle();
        print_success(&format!("{}: {}", decision.label(), headline));
    }
    Ok(())
}

fn plain_maybe<E: Reviewable>(session: &mut ReviewSession<E>) -> anyhow::Result<()> {
    if !session.allowed().contains(&Decision::Maybe) {
        print_error("'maybe' is not available when reviewing interviews");
        return Ok(());
    }
    let headline = match session.current() {
        Some(entity) => entity.headline(),
        None => return Ok(()),
    };
    if session.swipe(Decision::Maybe)? {
        session.settle();
        print_success(&format!("{}: {}", Decision::Maybe.label(), headline));
    }
    Ok(())
}

fn plain_undo<E: Reviewable>(session: &mut ReviewSession<E>) -> anyhow::Result<()> {
    match session.undo()? {
        Some(entry) => {
            let name = session
                .current()
                .map(|e| e.headline())
                .unwrap_or_default();
            print_toast(&format!("Undid {} for {}", entry.decision.label(), name));
        }
        None => print_toast("Nothing to undo"),
    }
    Ok(())
}

fn print_plain_card<E: Reviewable>(session: &ReviewSession<E>) {
    let entity = match session.current() {
        Some(entity) => entity,
        None => return,
    };
    let headline = entity.headline();
    let detail = entity.subline();
    println!();
    println!(
        "{}",
        render_template_plain(
            TEMPLATES.card_headline,
            &TemplateContext {
                name: Some(&headline),
                score: Some(entity.overall_score()),
                ..Default::default()
            }
        )
    );
    println!(
        "{}",
        render_template_plain(
            TEMPLATES.card_detail,
            &TemplateContext {
                detail: Some(&detail),
                ..Default::default()
            }
        )
    );
    println!(
        "{}",
        render_template_plain(
            TEMPLATES.review_progress,
            &TemplateContext {
                n: Some(session.current_index() + 1),
                total: Some(session.deck_len()),
                ..Default::default()
            }
        )
    );
}

// === Interactive frontend ===

/// Restores cooked mode even when the loop errors out
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("failed to enter raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn run_interactive<E: Reviewable>(session: &mut ReviewSession<E>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    while session.state() == SessionState::Authenticating {
        print!("Enter access code: ");
        io::stdout().flush()?;
        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            print_error("No access code entered");
            return Ok(());
        }
        if !session.authenticate(input.trim()) {
            session.take_auth_error();
            print_error(WRONG_CODE_MSG);
            // The shake: hold the error on screen before re-prompting
            thread::sleep(Duration::from_millis(SHAKE_DURATION_MS));
        }
    }

    if session.is_empty() {
        print_info(EMPTY_DECK_MSG);
        return Ok(());
    }

    let guard = RawModeGuard::enter()?;
    let result = interactive_loop(session);
    drop(guard);
    result?;

    print_summary(session);
    Ok(())
}

fn interactive_loop<E: Reviewable>(session: &mut ReviewSession<E>) -> anyhow::Result<()> {
    let mut dx = 0.0_f32;
    let mut last_step: Option<Instant> = None;
    let mut toast: Option<String> = None;
    draw_frame(session, None)?;

    // Runs through `Completed` too: the completion screen still accepts `u`
    // (which re-enters reviewing via the derived state) and `q`/Esc.
    loop {
        if event::poll(Duration::from_millis(RELEASE_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Left | KeyCode::Right => {
                        let step = if key.code == KeyCode::Right {
                            DRAG_STEP
                        } else {
                            -DRAG_STEP
                        };
                        // Velocity estimated from the key-repeat cadence, px per ms
                        let vx = match last_step {
                            Some(prev) => DRAG_STEP / prev.elapsed().as_millis().max(1) as f32,
                            None => 0.0,
                        };
                        last_step = Some(Instant::now());
                        dx += step;
                        toast = None;
                        session.drag(dx, vx);
                        draw_frame(session, None)?;
                    }
                    KeyCode::Char('m') => {
                        dx = 0.0;
                        last_step = None;
                        if session.allowed().contains(&Decision::Maybe) {
                            toast = None;
                            if session.swipe(Decision::Maybe)? {
                                play_exit(session, SwipeDirection::Right)?;
                                session.settle();
                                draw_frame(session, None)?;
                            }
                        } else {
                            toast = Some("Maybe is not available here".to_string());
                            draw_frame(session, toast.as_deref())?;
                        }
                    }
                    KeyCode::Char('u') => {
                        dx = 0.0;
                        last_step = None;
                        toast = match session.undo()? {
                            Some(entry) => {
                                let name = session
                                    .current()
                                    .map(|e| e.headline())
                                    .unwrap_or_default();
                                Some(format!("Undid {} for {}", entry.decision.label(), name))
                            }
                            None => Some("Nothing to undo".to_string()),
                        };
                        draw_frame(session, toast.as_deref())?;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
                // Resize and other events just trigger a redraw
                _ => draw_frame(session, toast.as_deref())?,
            }
        } else if session.phase() == CardPhase::Dragging {
            // Quiet window with a drag in flight: the card was let go
            dx = 0.0;
            last_step = None;
            match session.release()? {
                ReleaseResult::Committed(decision) => {
                    let direction = if decision == Decision::Nope {
                        SwipeDirection::Left
                    } else {
                        SwipeDirection::Right
                    };
                    play_exit(session, direction)?;
                    session.settle();
                    draw_frame(session, None)?;
                }
                ReleaseResult::Returned => draw_frame(session, None)?,
            }
        }
    }

    Ok(())
}

/// Sample the exit animation across the settle delay
fn play_exit<E: Reviewable>(
    session: &ReviewSession<E>,
    direction: SwipeDirection,
) -> anyhow::Result<()> {
    let start = session.transform();
    let target = CardTransform::exit(direction);
    let frame_delay = SETTLE_DELAY_MS / u64::from(EXIT_FRAMES);
    for frame in 1..=EXIT_FRAMES {
        let t = frame as f32 / EXIT_FRAMES as f32;
        draw_card_frame(session, start.lerp(&target, t), None)?;
        thread::sleep(Duration::from_millis(frame_delay));
    }
    Ok(())
}

fn draw_frame<E: Reviewable>(
    session: &ReviewSession<E>,
    toast: Option<&str>,
) -> anyhow::Result<()> {
    draw_card_frame(session, session.transform(), toast)
}

fn draw_card_frame<E: Reviewable>(
    session: &ReviewSession<E>,
    transform: CardTransform,
    toast: Option<&str>,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .context("failed to redraw the review frame")?;

    let mut lines: Vec<String> = vec![String::new()];

    if let Some(entity) = session.current() {
        let headline = entity.headline();
        let detail = entity.subline();
        let indent = " ".repeat(((transform.offset / 12.0).max(0.0) as usize).min(60));

        let headline_ctx = TemplateContext {
            name: Some(&headline),
            score: Some(entity.overall_score()),
            ..Default::default()
        };
        let detail_ctx = TemplateContext {
            detail: Some(&detail),
            ..Default::default()
        };
        // Past half fade the card renders muted instead of alpha-blended
        let (headline_line, detail_line) = if transform.opacity < 0.5 {
            (
                render_template_plain(TEMPLATES.card_headline, &headline_ctx)
                    .bright_black()
                    .to_string(),
                render_template_plain(TEMPLATES.card_detail, &detail_ctx)
                    .bright_black()
                    .to_string(),
            )
        } else {
            (
                render_template(TEMPLATES.card_headline, &headline_ctx),
                render_template(TEMPLATES.card_detail, &detail_ctx),
            )
        };
        lines.push(format!("{indent}{headline_line}"));
        lines.push(format!("{indent}{detail_line}"));

        let marker_len = (transform.offset.abs() / 60.0) as usize;
        if marker_len > 0 && transform.offset > 0.0 {
            lines.push(format!("{indent}{}", "▶".repeat(marker_len).green()));
        } else if marker_len > 0 {
            lines.push(format!("{indent}{}", "◀".repeat(marker_len).red()));
        } else {
            lines.push(String::new());
        }

        lines.push(render_template(
            TEMPLATES.review_progress,
            &TemplateContext {
                n: Some(session.current_index() + 1),
                total: Some(session.deck_len()),
                ..Default::default()
            },
        ));
    } else if session.state() == SessionState::Completed {
        lines.push(format!(
            "All {} cards reviewed.",
            session.deck_len()
        ));
        lines.push(String::new());
    }

    match toast {
        Some(toast) => lines.push(format!(
            "{} {}",
            "↩".bright_black(),
            toast.bright_black()
        )),
        None => lines.push(String::new()),
    }

    lines.push(String::new());
    lines.push(help_line(session).bright_black().to_string());

    for line in &lines {
        write!(stdout, "{line}\r\n")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Key hints for the current screen; the completion screen only offers undo and quit
fn help_line<E: Reviewable>(session: &ReviewSession<E>) -> String {
    if session.state() == SessionState::Completed {
        return String::from("u undo   q quit");
    }
    let mut help = String::from("← pass   → good fit");
    if session.allowed().contains(&Decision::Maybe) {
        help.push_str("   m maybe");
    }
    help.push_str("   u undo   q quit");
    help
}

// === Shared summary ===

fn print_summary<E: Reviewable>(session: &ReviewSession<E>) {
    let tally = session.summary();
    if session.state() == SessionState::Completed {
        print_section_header("Review complete");
    } else {
        print_section_header("Review session");
    }

    let good_style = get_decision_color_style(Some(Decision::GoodFit));
    let maybe_style = get_decision_color_style(Some(Decision::Maybe));
    let nope_style = get_decision_color_style(Some(Decision::Nope));

    println!("  Selected: {}", good_style(&tally.good_fit.to_string()));
    if session.allowed().contains(&Decision::Maybe) {
        println!("  Maybe:    {}", maybe_style(&tally.maybe.to_string()));
    }
    println!("  Passed:   {}", nope_style(&tally.nope.to_string()));
    println!("  Total:    {}", tally.total());
    println!();
}
