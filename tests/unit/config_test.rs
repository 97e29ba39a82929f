//! Tests for settings resolution and the TOML config source

use std::fs;

use taskreport::adapters::TomlConfig;
use taskreport::config::{DEFAULTS, Settings};
use taskreport::core::services::{AnnotationDetail, ReportLayout};
use tempfile::TempDir;

// =============================================================================
// BUILT-IN REPORTS
// =============================================================================

#[test]
fn test_builtin_reports_validate() {
    let settings = Settings::default();
    let names: Vec<&str> = settings.reports().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "active",
            "all",
            "completed",
            "list",
            "long",
            "ls",
            "minimal",
            "newest",
            "oldest",
            "recurring",
            "waiting"
        ]
    );
    for report in settings.reports() {
        assert!(ReportLayout::from_definition(report).is_ok(), "report {} is invalid", report.name);
    }
}

#[test]
fn test_defaults_table_has_unique_keys() {
    let mut keys: Vec<&str> = DEFAULTS.iter().map(|(k, _)| *k).collect();
    let count = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), count);
}

// =============================================================================
// FILE-BACKED SETTINGS
// =============================================================================

#[test]
fn test_settings_from_toml_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r##"
dateformat = "Y-M-D"
due = 3
annotations = "sparse"
locking = false

[color]
overdue = "bold red"
alternate = "on blue"

[report.today]
description = "Due soon"
columns = ["id", "due", "description"]
labels = ["#", "Due", "What"]
sort = "due+"
filter = "status:pending due.any:"
limit = 5
dateformat = "D.M"
annotations = "none"
"##,
    )
    .unwrap();

    let settings = Settings::from_source(&TomlConfig::load(&path).unwrap());
    assert_eq!(settings.date_format, "Y-M-D");
    assert_eq!(settings.due_horizon_days, 3);
    assert_eq!(settings.annotations, AnnotationDetail::Sparse);
    assert!(!settings.locking);
    assert!(settings.color_overdue.bold);
    assert!(settings.color_alternate.bg.is_some());

    let today = settings.report("today").unwrap();
    assert_eq!(today.description, "Due soon");
    assert_eq!(today.columns, "id,due,description");
    assert_eq!(today.labels, "#,Due,What");
    assert_eq!(today.limit, 5);
    assert_eq!(settings.due_date_format(today), "D.M");
    assert_eq!(settings.annotation_detail(today), AnnotationDetail::None);

    // Built-in reports survive alongside custom ones
    assert!(settings.report("list").is_ok());
}

#[test]
fn test_report_without_columns_is_unknown() {
    let settings = Settings::from_source(&TomlConfig::from_pairs([("report.half.sort", "id+")]));
    assert!(settings.report("half").is_err());
}

#[test]
fn test_invalid_values_fall_back() {
    let settings = Settings::from_source(&TomlConfig::from_pairs([
        ("defaultwidth", "wide"),
        ("annotations", "loud"),
        ("color.due", "chartreuse"),
    ]));
    assert_eq!(settings.default_width, 80);
    assert_eq!(settings.annotations, AnnotationDetail::Full);
    assert!(!settings.color_due.nontrivial());
}

#[test]
fn test_malformed_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[report\n").unwrap();
    let err = TomlConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}
