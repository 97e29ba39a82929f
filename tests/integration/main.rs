//! Integration tests for the taskreport CLI
//!
//! Each test writes a config file and a task file into a temporary directory
//! and runs the binary against them.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const DAY: i64 = 86_400;

/// Helper function to create a taskreport command
fn taskreport() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("taskreport"))
}

fn now() -> i64 {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
    i64::try_from(elapsed.as_secs()).unwrap()
}

/// A temporary workspace holding a config file and a task file
struct Workspace {
    _temp: TempDir,
    config: PathBuf,
    data: PathBuf,
}

impl Workspace {
    fn new(config: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        let data_path = temp.path().join("tasks.toml");
        fs::write(&config_path, config).unwrap();
        fs::write(&data_path, tasks()).unwrap();
        Self {
            _temp: temp,
            config: config_path,
            data: data_path,
        }
    }

    /// A command pointed at this workspace
    fn command(&self) -> assert_cmd::Command {
        let mut cmd = taskreport();
        cmd.arg("--config").arg(&self.config).arg("--data").arg(&self.data);
        cmd
    }

    /// A report command pointed at this workspace, colors off
    fn report(&self, name: &str) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.args(["report", "--no-color", name]);
        cmd
    }

    fn lock_file(&self) -> PathBuf {
        self.data.with_extension("lock")
    }
}

/// Three pending tasks (one overdue) and one completed task
fn tasks() -> String {
    let now = now();
    format!(
        r#"[[task]]
uuid = "a1"
description = "Pay rent"
project = "Home"
priority = "H"
entry = {entry1}
due = {overdue}
tags = ["bills"]

[[task.annotation]]
entry = {entry1}
description = "called landlord"

[[task]]
uuid = "a2"
description = "Water plants"
project = "Garden"
priority = "L"
entry = {entry2}

[[task]]
uuid = "a3"
description = "Read book"

[[task]]
uuid = "a4"
status = "completed"
description = "Buy milk"
project = "Home"
end = {entry2}
"#,
        entry1 = now - 10 * DAY,
        entry2 = now - 2 * DAY,
        overdue = now - 3 * DAY,
    )
}

// =============================================================================
// REPORTS
// =============================================================================

#[test]
fn test_list_counts_pending_tasks() {
    let ws = Workspace::new("");
    ws.report("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay rent"))
        .stdout(predicate::str::contains("called landlord"))
        .stdout(predicate::str::contains("Buy milk").not())
        .stdout(predicate::str::contains("3 tasks"));
}

#[test]
fn test_filter_words_narrow_report() {
    let ws = Workspace::new("");
    ws.report("list")
        .arg("project:Garden")
        .assert()
        .success()
        .stdout(predicate::str::contains("Water plants"))
        .stdout(predicate::str::contains("1 task\n"));
}

#[test]
fn test_tag_exclusion_word() {
    let ws = Workspace::new("");
    ws.report("list")
        .arg("-bills")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay rent").not())
        .stdout(predicate::str::contains("2 tasks"));
}

#[test]
fn test_no_matches_exits_one() {
    let ws = Workspace::new("");
    ws.report("list")
        .arg("project:Nowhere")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No matches."));
}

#[test]
fn test_limit_shows_fewer_rows_but_full_count() {
    let ws = Workspace::new("");
    ws.report("list")
        .arg("limit:1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay rent"))
        .stdout(predicate::str::contains("Water plants").not())
        .stdout(predicate::str::contains("3 tasks"));
}

#[test]
fn test_custom_report_from_config() {
    let ws = Workspace::new(
        r##"
blanklines = false

[report.mine]
description = "Just descriptions"
columns = ["id", "description"]
labels = ["#", "What"]
sort = "description+"
filter = "status:pending"
"##,
    );
    let assert = ws.report("mine").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("# What"));
    assert_eq!(lines[2], "1 Pay rent");
    assert!(lines[3].ends_with("called landlord"));
    assert!(lines[4].ends_with("Read book"));
    assert!(lines[5].ends_with("Water plants"));
    assert!(stdout.contains("3 tasks"));
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_unknown_columns_reported() {
    let ws = Workspace::new(
        r#"
[report.bad]
columns = "id,foo,bar"
"#,
    );
    ws.report("bad")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized column name: foo, bar"));
}

#[test]
fn test_oversized_id_range_rejected() {
    let ws = Workspace::new("");
    ws.report("list")
        .arg("1-1000000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid id sequence: 1-1000000"));
}

#[test]
fn test_unknown_report_name() {
    let ws = Workspace::new("");
    ws.report("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized report name: nope"));
}

#[test]
fn test_malformed_config_is_error() {
    let ws = Workspace::new("this is = = not toml");
    ws.report("list").assert().failure().stderr(predicate::str::contains("Failed to parse"));
}

// =============================================================================
// LOCKING
// =============================================================================

#[test]
fn test_lock_released_after_run() {
    let ws = Workspace::new("");
    ws.report("list").assert().success();
    assert!(!ws.lock_file().exists());
}

#[test]
fn test_held_lock_fails_report() {
    let ws = Workspace::new("");
    fs::write(ws.lock_file(), "").unwrap();
    ws.report("list").assert().failure().stderr(predicate::str::contains("locked"));
    assert!(ws.lock_file().exists());
}

#[test]
fn test_locking_off_ignores_lock_file() {
    let ws = Workspace::new("locking = false\n");
    fs::write(ws.lock_file(), "").unwrap();
    ws.report("list").assert().success();
}

// =============================================================================
// JSON AND LISTINGS
// =============================================================================

#[test]
fn test_json_report() {
    let ws = Workspace::new("");
    let assert = ws.command().args(["--json", "report", "list"]).assert().success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["report"], "list");
    assert_eq!(json["count"], 3);
    assert_eq!(json["labels"][0], "ID");
    assert_eq!(json["rows"][0][0], "1");
}

#[test]
fn test_columns_listing() {
    taskreport()
        .arg("columns")
        .assert()
        .success()
        .stdout(predicate::str::contains("priority_long"))
        .stdout(predicate::str::contains("description_only"));
}

#[test]
fn test_reports_listing_includes_config() {
    let ws = Workspace::new(
        r#"
[report.mine]
description = "My own report"
columns = "id,description"
"#,
    );
    ws.command()
        .arg("reports")
        .assert()
        .success()
        .stdout(predicate::str::contains("My own report"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_env_paths() {
    let ws = Workspace::new("");
    taskreport()
        .env("TASKREPORT_CONFIG", &ws.config)
        .env("TASKREPORT_DATA", &ws.data)
        .args(["report", "--no-color", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 tasks"));
}

#[test]
fn test_version() {
    taskreport()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("taskreport v"));
}
