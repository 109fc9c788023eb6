use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::TestHome};

#[cfg(test)]
mod review_command_tests {
    use super::*;

    #[test]
    fn test_missing_access_code_fails_before_prompting() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--plain"])
            .write_stdin("")
            .assert()
            .failure()
            .stdout(assertions::access_code_required());
    }

    #[test]
    fn test_wrong_code_reprompts_then_accepts() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .write_stdin("654321\n123456\nquit\n")
            .assert()
            .success()
            .stdout(assertions::wrong_code())
            .stdout(predicate::str::contains("Access code accepted"))
            .stdout(assertions::has_card_progress(1, 12));
    }

    #[test]
    fn test_eof_during_gate_exits_cleanly() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("No access code entered"));
    }

    #[test]
    fn test_swipes_advance_and_tally() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .write_stdin("123456\nright\nleft\nmaybe\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Good fit: Maya Okafor"))
            .stdout(predicate::str::contains("Pass: Jonas Lindqvist"))
            .stdout(predicate::str::contains("Maybe: Priya Raman"))
            .stdout(assertions::has_card_progress(4, 12))
            .stdout(predicate::str::contains("Selected: 1"))
            .stdout(predicate::str::contains("Maybe:    1"))
            .stdout(predicate::str::contains("Passed:   1"));
    }

    #[test]
    fn test_decisions_persist_into_listing_badges() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .write_stdin("123456\nright\nquit\n")
            .assert()
            .success();

        home.command()
            .arg("candidates")
            .assert()
            .success()
            .stdout(assertions::has_badge("good-fit"));

        home.command()
            .args(["candidates", "--status", "reviewed"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Candidates (1 of 12)"))
            .stdout(predicate::str::contains("Maya Okafor"));
    }

    #[test]
    fn test_undo_reverts_store_and_position() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .write_stdin("123456\nright\nundo\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Undid Good fit for Maya Okafor"));

        // The store key was deleted, not just hidden
        home.command()
            .args(["candidates", "--status", "reviewed"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No candidates match"));
    }

    #[test]
    fn test_undo_with_nothing_to_undo_is_a_noop() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .write_stdin("123456\nundo\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing to undo"))
            .stdout(assertions::has_card_progress(1, 12));
    }

    #[test]
    fn test_completing_the_deck_shows_summary() {
        let home = TestHome::new();
        let dataset = home.write_small_dataset();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .args(["--data-dir"])
            .arg(&dataset)
            .write_stdin("123456\nright\nleft\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("All cards reviewed"))
            .stdout(assertions::review_complete())
            .stdout(predicate::str::contains("Selected: 1"))
            .stdout(predicate::str::contains("Passed:   1"))
            .stdout(predicate::str::contains("Total:    2"));
    }

    #[test]
    fn test_undo_from_completed_reenters_review() {
        let home = TestHome::new();
        let dataset = home.write_small_dataset();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .args(["--data-dir"])
            .arg(&dataset)
            .write_stdin("123456\nright\nleft\nundo\nright\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Undid Pass for Ben Two"))
            .stdout(assertions::review_complete())
            .stdout(predicate::str::contains("Selected: 2"))
            .stdout(predicate::str::contains("Passed:   0"));
    }

    #[test]
    fn test_swipes_after_completion_are_ignored() {
        let home = TestHome::new();
        let dataset = home.write_small_dataset();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .args(["--data-dir"])
            .arg(&dataset)
            .write_stdin("123456\nright\nleft\nright\nright\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Total:    2"));
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .write_stdin("123456\nfoo\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Unknown review command: 'foo'"));
    }

    #[test]
    fn test_empty_deck_ends_before_any_card() {
        let home = TestHome::new();

        home.command()
            .args([
                "review",
                "candidates",
                "--code",
                "123456",
                "--plain",
                "--min-score",
                "1000",
            ])
            .write_stdin("123456\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing to review"))
            .stdout(assertions::review_complete().not());
    }

    #[test]
    fn test_interview_review_rejects_maybe() {
        let home = TestHome::new();

        home.command()
            .args(["review", "interviews", "--code", "123456", "--plain"])
            .write_stdin("123456\nmaybe\nright\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "'maybe' is not available when reviewing interviews",
            ))
            .stdout(predicate::str::contains("Good fit: Maya Okafor"))
            // The rejected maybe never advanced the deck
            .stdout(assertions::has_card_progress(2, 8));
    }

    #[test]
    fn test_candidate_lists_are_isolated_contexts() {
        let home = TestHome::new();

        home.command()
            .args([
                "review",
                "candidates",
                "--list",
                "team-a",
                "--code",
                "123456",
                "--plain",
            ])
            .write_stdin("123456\nright\nquit\n")
            .assert()
            .success();

        home.command()
            .args(["candidates", "--list", "team-a"])
            .assert()
            .success()
            .stdout(assertions::has_badge("good-fit"));

        home.command()
            .args(["candidates", "--list", "team-b"])
            .assert()
            .success()
            .stdout(assertions::has_badge("good-fit").not());
    }

    #[test]
    fn test_review_filters_shape_the_deck() {
        let home = TestHome::new();

        // Only the two offer-stage candidates make it into the deck
        home.command()
            .args([
                "review",
                "candidates",
                "--stage",
                "offer",
                "--code",
                "123456",
                "--plain",
            ])
            .write_stdin("123456\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Lucia Herrera"))
            .stdout(assertions::has_card_progress(1, 2));
    }

    #[test]
    fn test_reviewed_cards_are_excluded_from_pending_deck() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .write_stdin("123456\nright\nquit\n")
            .assert()
            .success();

        // A fresh pending-only session starts past the already-reviewed card
        home.command()
            .args([
                "review",
                "candidates",
                "--status",
                "pending",
                "--code",
                "123456",
                "--plain",
            ])
            .write_stdin("123456\nquit\n")
            .assert()
            .success()
            .stdout(assertions::has_card_progress(1, 11))
            .stdout(predicate::str::contains("Jonas Lindqvist"));
    }
}
