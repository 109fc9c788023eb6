//! Test environment and dataset fixtures
//!
//! Every test gets its own temp directory for decision stores and listing
//! snapshots, wired in through `XDG_DATA_HOME`/`XDG_CACHE_HOME` so parallel
//! tests never share state.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home for one test: decision stores and snapshots land in here
pub struct TestHome {
    temp: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn data_home(&self) -> PathBuf {
        self.temp.path().join("data")
    }

    pub fn cache_home(&self) -> PathBuf {
        self.temp.path().join("cache")
    }

    /// A talent-deck invocation with state isolated to this home
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("talent-deck").expect("binary builds");
        cmd.env("XDG_DATA_HOME", self.data_home())
            .env("XDG_CACHE_HOME", self.cache_home())
            .env("NO_COLOR", "1");
        cmd
    }

    /// Write a two-candidate, two-interview dataset and return its directory
    /// for `--data-dir`. Small decks make completion flows easy to drive.
    pub fn write_small_dataset(&self) -> PathBuf {
        let dir = self.temp.path().join("dataset");
        fs::create_dir_all(&dir).expect("failed to create dataset dir");

        let candidates = r#"[
  {
    "id": "small-1",
    "name": "Ada One",
    "role": "Backend Engineer",
    "email": "ada@example.com",
    "location": "London",
    "stage": "screening",
    "experience_years": 5.0,
    "starred": true,
    "score": 82.0
  },
  {
    "id": "small-2",
    "name": "Ben Two",
    "role": "Data Engineer",
    "email": "ben@example.com",
    "location": "Porto",
    "stage": "applied",
    "experience_years": 2.0,
    "starred": false,
    "score": 64.0
  }
]"#;
        let interviews = r#"[
  {
    "id": "small-int-1",
    "candidate_name": "Ada One",
    "role": "Backend Engineer",
    "interviewer": "Grace Hopper",
    "date": "2026-08-10",
    "status": "completed",
    "scores": { "technical": 85.0, "communication": 80.0, "problem_solving": 90.0, "culture_fit": 85.0 },
    "notes": "Strong round."
  },
  {
    "id": "small-int-2",
    "candidate_name": "Ben Two",
    "role": "Data Engineer",
    "interviewer": "Grace Hopper",
    "date": "2026-08-11",
    "status": "scheduled",
    "scores": { "technical": 0.0, "communication": 0.0, "problem_solving": 0.0, "culture_fit": 0.0 },
    "notes": ""
  }
]"#;

        fs::write(dir.join("candidates.json"), candidates).expect("failed to write candidates");
        fs::write(dir.join("interviews.json"), interviews).expect("failed to write interviews");
        dir
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}
