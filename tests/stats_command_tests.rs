use predicates::prelude::*;

mod common;
use common::fixtures::TestHome;

#[cfg(test)]
mod stats_command_tests {
    use super::*;

    #[test]
    fn test_stats_shows_headline_counts() {
        let home = TestHome::new();

        home.command()
            .arg("stats")
            .assert()
            .success()
            .stdout(predicate::str::contains("Pipeline:"))
            .stdout(predicate::str::contains("Candidates: 12"))
            .stdout(predicate::str::contains("Starred: 5"))
            .stdout(predicate::str::contains("Interviews: 8 (6 completed)"));
    }

    #[test]
    fn test_stats_shows_stage_distribution() {
        let home = TestHome::new();

        home.command()
            .arg("stats")
            .assert()
            .success()
            .stdout(predicate::str::contains("Candidates by stage:"))
            .stdout(predicate::str::contains("applied"))
            .stdout(predicate::str::contains("screening"))
            .stdout(predicate::str::contains("interviewing"))
            .stdout(predicate::str::contains("offer"))
            .stdout(predicate::str::contains("hired"));
    }

    #[test]
    fn test_stats_shows_score_histogram() {
        let home = TestHome::new();

        home.command()
            .arg("stats")
            .assert()
            .success()
            .stdout(predicate::str::contains("Candidate score distribution:"))
            .stdout(predicate::str::contains("90-100"))
            .stdout(predicate::str::contains("0-59"));
    }

    #[test]
    fn test_stats_reflect_recorded_decisions() {
        let home = TestHome::new();

        home.command()
            .args(["review", "candidates", "--code", "123456", "--plain"])
            .write_stdin("123456\nright\nleft\nquit\n")
            .assert()
            .success();

        home.command()
            .arg("stats")
            .assert()
            .success()
            .stdout(predicate::str::contains("Review decisions:"))
            .stdout(predicate::str::contains("1 good fit"))
            .stdout(predicate::str::contains("1 pass"));
    }

    #[test]
    fn test_stats_works_with_custom_dataset() {
        let home = TestHome::new();
        let dataset = home.write_small_dataset();

        home.command()
            .args(["stats", "--data-dir"])
            .arg(&dataset)
            .assert()
            .success()
            .stdout(predicate::str::contains("Candidates: 2"))
            .stdout(predicate::str::contains("Interviews: 2 (1 completed)"));
    }
}
