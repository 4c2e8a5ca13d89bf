use clap::Parser;
use docview_cli::{Args, Command, ValueKind, extract, load_status_log, run};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

fn run_to_string(command: &Command) -> String {
    let mut out = Vec::new();
    run(command, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ── Argument parsing ─────────────────────────────────────────────

#[test]
fn parse_get_with_kind_and_offset() {
    let args = Args::try_parse_from([
        "docview", "get", "doc.json", "a", "b", "--as", "date", "--tz-offset", "-3600",
    ])
    .unwrap();
    assert_eq!(
        args.command,
        Command::Get {
            file: PathBuf::from("doc.json"),
            path: path(&["a", "b"]),
            kind: ValueKind::Date,
            tz_offset: -3600,
            optional: false,
        }
    );
    assert!(!args.verbose);
}

#[test]
fn parse_get_requires_path() {
    assert!(Args::try_parse_from(["docview", "get", "doc.json"]).is_err());
}

#[test]
fn parse_verbose_merge() {
    let args = Args::try_parse_from(["docview", "-v", "merge", "a.json", "b.json"]).unwrap();
    assert!(args.verbose);
    assert!(matches!(args.command, Command::Merge { .. }));
}

// ── extract ──────────────────────────────────────────────────────

#[test]
fn extract_nested_integer_from_text() {
    let doc = json!({"properties": {"modbus": {"unit": "5"}}});
    let text = extract(&doc, &path(&["properties", "modbus", "unit"]), ValueKind::Integer, 0, false)
        .unwrap();
    assert_eq!(text, Some("5".to_string()));
}

#[test]
fn extract_date_with_offset() {
    let doc = json!({"from": "2024-03-05"});
    let text = extract(&doc, &path(&["from"]), ValueKind::Date, 7200, false).unwrap();
    assert_eq!(text, Some("2024-03-05T00:00:00+02:00".to_string()));
}

#[test]
fn extract_json_kind_renders_node() {
    let doc = json!({"channels": ["A", "B"]});
    let text = extract(&doc, &path(&["channels"]), ValueKind::Json, 0, false).unwrap();
    assert_eq!(text, Some(r#"["A","B"]"#.to_string()));
}

#[test]
fn extract_optional_absent_is_none() {
    let doc = json!({"a": {}});
    let text = extract(&doc, &path(&["a", "b"]), ValueKind::String, 0, true).unwrap();
    assert_eq!(text, None);
}

#[test]
fn extract_optional_still_fails_on_malformed() {
    let doc = json!({"port": "12a"});
    let err = extract(&doc, &path(&["port"]), ValueKind::Integer, 0, true).unwrap_err();
    assert!(format!("{err}").contains("is not an integer"));
}

#[test]
fn extract_missing_member_fails_without_optional() {
    let doc = json!({});
    assert!(extract(&doc, &path(&["a"]), ValueKind::String, 0, false).is_err());
}

#[test]
fn extract_rejects_out_of_range_offset() {
    let doc = json!({"from": "2024-03-05"});
    assert!(extract(&doc, &path(&["from"]), ValueKind::Date, 200_000, false).is_err());
}

// ── run ──────────────────────────────────────────────────────────

#[test]
fn run_get_prints_value() {
    let dir = TempDir::new().unwrap();
    let file = write_json(&dir, "doc.json", &json!({"alias": "Grid meter"}));
    let output = run_to_string(&Command::Get {
        file,
        path: path(&["alias"]),
        kind: ValueKind::String,
        tz_offset: 0,
        optional: false,
    });
    assert_eq!(output, "Grid meter\n");
}

#[test]
fn run_merge_prints_right_biased_object() {
    let dir = TempDir::new().unwrap();
    let first = write_json(&dir, "a.json", &json!({"a": 1, "b": 2}));
    let second = write_json(&dir, "b.json", &json!({"b": 3, "c": 4}));
    let output = run_to_string(&Command::Merge { first, second });
    let merged: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(merged, json!({"a": 1, "b": 3, "c": 4}));
}

#[test]
fn run_merge_rejects_array_document() {
    let dir = TempDir::new().unwrap();
    let first = write_json(&dir, "a.json", &json!({"a": 1}));
    let second = write_json(&dir, "b.json", &json!([1]));
    let mut out = Vec::new();
    assert!(run(&Command::Merge { first, second }, &mut out).is_err());
}

#[test]
fn run_reports_unreadable_file() {
    let mut out = Vec::new();
    let err = run(
        &Command::Status {
            file: PathBuf::from("/nonexistent/status.json"),
        },
        &mut out,
    )
    .unwrap_err();
    assert!(format!("{err}").contains("failed to read"));
}

#[test]
fn run_status_prints_sorted_line() {
    let dir = TempDir::new().unwrap();
    let file = write_json(
        &dir,
        "status.json",
        &json!({
            "config": {"id": "ctrlStatusLog0"},
            "sources": [
                {"id": "meter0", "document": {"power": 1200},
                 "fields": [{"label": "P", "path": ["power"], "kind": "integer", "unit": "W"}]},
                {"id": "ess0", "document": {"soc": "55"},
                 "fields": [{"label": "SoC", "path": ["soc"], "kind": "integer", "unit": "%"}]},
                {"id": "io0", "enabled": false, "document": {"state": "ON"},
                 "fields": [{"label": "S", "path": ["state"]}]}
            ]
        }),
    );
    let output = run_to_string(&Command::Status { file });
    assert_eq!(output, "ess0[SoC:55 %] meter0[P:1200 W]\n");
}

// ── load_status_log ──────────────────────────────────────────────

#[test]
fn load_status_log_without_sources() {
    let log = load_status_log(&json!({"config": {"id": "log0", "enabled": false}})).unwrap();
    assert!(log.is_empty());
    assert!(!log.config().enabled);
    assert_eq!(log.run(), None);
}

#[test]
fn load_status_log_requires_config() {
    assert!(load_status_log(&json!({"sources": []})).is_err());
}
