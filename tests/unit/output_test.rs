//! Tests for command result structures

use taskreport::config::Settings;
use taskreport::core::services::REGISTRY;
use taskreport::output::{ColumnInfo, ReportInfo, ReportResult};

use crate::common::{run, settings, tasks};

#[test]
fn test_report_result_rows_follow_sort_and_limit() {
    let settings = settings(&[
        ("report.r.columns", "id,priority"),
        ("report.r.sort", "priority-"),
        ("report.r.filter", "status:pending"),
    ]);
    let output = run(&settings, "r", &["limit:2"], tasks());
    let result = ReportResult::from_output("r", &output);
    assert_eq!(result.report, "r");
    assert_eq!(result.count, 4);
    assert_eq!(result.limit, 2);
    assert_eq!(result.labels, ["ID", "Pri"]);
    assert_eq!(result.rows, [["1", "H"], ["3", "M"]]);
}

#[test]
fn test_report_result_json_shape() {
    let output = run(&settings(&[]), "list", &["project:Garden"], tasks());
    let result = ReportResult::from_output("list", &output);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["report"], "list");
    assert_eq!(json["count"], 1);
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);
    assert!(json.get("text").is_none());
}

#[test]
fn test_empty_report_result() {
    let output = run(&settings(&[]), "list", &["project:Nowhere"], tasks());
    let result = ReportResult::from_output("list", &output);
    assert!(result.is_empty());
    assert!(result.rows.is_empty());
    assert_eq!(result.text, "No matches.");
}

#[test]
fn test_column_info() {
    let infos: Vec<ColumnInfo> = REGISTRY.iter().map(ColumnInfo::from).collect();
    let id = infos.iter().find(|c| c.name == "id").unwrap();
    assert_eq!(id.justify, "right");
    assert!(!id.flexible);
    let description = infos.iter().find(|c| c.name == "description").unwrap();
    assert!(description.flexible);
}

#[test]
fn test_report_info() {
    let settings = Settings::default();
    let list = ReportInfo::from(settings.report("list").unwrap());
    assert_eq!(list.name, "list");
    assert_eq!(list.filter, "status:pending");
}
