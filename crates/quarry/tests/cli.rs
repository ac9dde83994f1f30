//! CLI integration tests for quarry commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a quarry command.
fn quarry() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quarry").unwrap()
}

/// Helper to run `quarry` in `dir` with HOME isolated to it.
fn quarry_in(dir: &Path) -> Command {
    let mut cmd = quarry();
    cmd.env("HOME", dir);
    cmd.current_dir(dir);
    cmd
}

/// Writes a one-source project with a single searchable file.
fn write_project(dir: &Path) {
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::write(
        dir.join("src/notes.txt"),
        "line1\nneedle here\nline3\nline4",
    )
    .unwrap();
    fs::write(dir.join(".quarry.toml"), "[source.code]\npath = \"src\"\n").unwrap();
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();

        quarry_in(dir.path()).arg("init").assert().success();

        let config_path = dir.path().join(".quarry.toml");
        assert!(config_path.exists());

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# [source."));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".quarry.toml"), "existing").unwrap();

        quarry_in(dir.path()).arg("init").assert().failure();
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        fs::write(dir.path().join(".quarry.toml"), "old content").unwrap();

        quarry_in(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".quarry.toml")).unwrap();
        assert!(contents.contains("# [source."));
    }

    #[test]
    fn updates_gitignore_when_present() {
        let dir = temp_dir();
        fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();

        quarry_in(dir.path()).arg("init").assert().success();

        let gitignore = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(gitignore.contains(".quarry/"));
    }

    #[test]
    fn does_not_duplicate_gitignore_entry() {
        let dir = temp_dir();
        fs::write(dir.path().join(".gitignore"), "*.log\n.quarry/\n").unwrap();

        quarry_in(dir.path()).arg("init").assert().success();

        let gitignore = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore.matches(".quarry/").count(), 1);
    }
}

mod update {
    use super::*;

    #[test]
    fn fails_without_sources() {
        let dir = temp_dir();

        quarry_in(dir.path())
            .arg("update")
            .assert()
            .failure()
            .stderr(predicate::str::contains("no sources"));
    }

    #[test]
    fn indexes_configured_sources() {
        let dir = temp_dir();
        write_project(dir.path());

        quarry_in(dir.path())
            .arg("update")
            .assert()
            .success()
            .stdout(predicate::str::contains("Indexed 1 files"));

        assert!(dir.path().join(".quarry/index/meta.json").exists());
    }
}

mod search {
    use super::*;

    #[test]
    fn finds_and_highlights_indexed_text() {
        let dir = temp_dir();
        write_project(dir.path());

        quarry_in(dir.path()).arg("update").assert().success();

        quarry_in(dir.path())
            .args(["search", "needle"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<strong>needle</strong> here"))
            .stdout(predicate::str::contains("notes.txt"));
    }

    #[test]
    fn json_output_is_parseable() {
        let dir = temp_dir();
        write_project(dir.path());

        quarry_in(dir.path()).arg("update").assert().success();

        let output = quarry_in(dir.path())
            .args(["search", "needle", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["query"], "needle");
        assert_eq!(parsed["total_matches"], 1);
        assert_eq!(parsed["results"][0]["filename"], "notes.txt");
        assert!(
            parsed["results"][0]["context"]
                .as_str()
                .unwrap()
                .contains("<strong>needle</strong>")
        );
    }

    #[test]
    fn paging_beyond_results_reports_none() {
        let dir = temp_dir();
        write_project(dir.path());

        quarry_in(dir.path()).arg("update").assert().success();

        quarry_in(dir.path())
            .args(["search", "needle", "--page", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results found."));
    }

    #[test]
    fn fails_without_index() {
        let dir = temp_dir();
        write_project(dir.path());

        quarry_in(dir.path())
            .args(["search", "needle"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to open index"));
    }

    #[test]
    fn blank_query_fails() {
        let dir = temp_dir();
        write_project(dir.path());

        quarry_in(dir.path()).arg("update").assert().success();

        quarry_in(dir.path())
            .args(["search", ""])
            .assert()
            .failure()
            .stderr(predicate::str::contains("search failed"));
    }
}

mod status {
    use super::*;

    #[test]
    fn reports_missing_configuration() {
        let dir = temp_dir();

        quarry_in(dir.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration file found."));
    }

    #[test]
    fn reports_sources_and_index() {
        let dir = temp_dir();
        write_project(dir.path());

        quarry_in(dir.path()).arg("update").assert().success();

        quarry_in(dir.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("code"))
            .stdout(predicate::str::contains("1 documents"))
            .stdout(predicate::str::contains("stemmer = \"none\""));
    }
}
