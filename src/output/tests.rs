//! Schema writer tests

use super::*;
use crate::scan::ScanReport;
use serde_json::json;

#[test]
fn test_write_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deep/schema.json");

    let writer = SchemaWriter::default();
    writer.write_json(&json!({"a": 1}), &path).unwrap();

    assert!(path.exists());
}

#[test]
fn test_written_file_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.json");

    let value = json!({
        "users": {"name": {"single_type": "str"}},
    });

    SchemaWriter::default().write_json(&value, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn test_compact_output_has_no_newlines() {
    let dir = tempfile::tempdir().unwrap();
    let pretty_path = dir.path().join("pretty.json");
    let compact_path = dir.path().join("compact.json");
    let value = json!({"a": {"single_type": "int"}});

    SchemaWriter::new(SchemaWriterConfig::new().with_pretty(true))
        .write_json(&value, &pretty_path)
        .unwrap();
    SchemaWriter::new(SchemaWriterConfig::new().with_pretty(false))
        .write_json(&value, &compact_path)
        .unwrap();

    let pretty = std::fs::read_to_string(&pretty_path).unwrap();
    let compact = std::fs::read_to_string(&compact_path).unwrap();
    assert!(pretty.contains('\n'));
    assert!(!compact.contains('\n'));
    assert!(pretty.len() > compact.len());
}

#[test]
fn test_write_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.json");

    let mut report = ScanReport::new("app");
    report
        .collections
        .insert("users".to_string(), json!({"name": {"single_type": "str"}}));

    SchemaWriter::default().write_report(&report, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    // The file holds the collection mapping only, not the report envelope.
    assert_eq!(
        parsed,
        json!({"users": {"name": {"single_type": "str"}}})
    );
}
