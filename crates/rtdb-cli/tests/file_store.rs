//! CLI integration tests against a local JSON export.

mod common;

use serde_json::{Value, json};
use tempfile::TempDir;

use common::{run_cli_failure, run_cli_success, write_export};

fn sample_export() -> Value {
    json!({
        "users": [
            null,
            { "first_name": "Ada", "last_name": "Lovelace" },
            { "first_name": "Grace" },
            { "first_name": 123 }
        ],
        "settings": { "theme": "dark" }
    })
}

#[test]
fn test_validate_fetches_document_one() {
    let temp_dir = TempDir::new().unwrap();
    let (_, url) = write_export(temp_dir.path(), &sample_export());

    let stdout = run_cli_success(&["validate"], &url);

    assert!(stdout.contains("Document decoded"));
    assert!(stdout.contains("Ada"));
    assert!(stdout.contains("Lovelace"));
}

#[test]
fn test_validate_reports_no_data() {
    let temp_dir = TempDir::new().unwrap();
    let (export, url) = write_export(temp_dir.path(), &sample_export());

    let stderr = run_cli_failure(&["validate", "--id", "9"], &url);

    assert!(stderr.contains("no data at 'users/9'"));
    assert!(stderr.contains(&export.display().to_string()));
}

#[test]
fn test_validate_reports_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let (_, url) = write_export(temp_dir.path(), &sample_export());

    let stderr = run_cli_failure(&["validate", "--id", "3"], &url);

    assert!(stderr.contains("failed to decode value at 'users/3'"));
}

#[test]
fn test_get_document_prints_json() {
    let temp_dir = TempDir::new().unwrap();
    let (_, url) = write_export(temp_dir.path(), &sample_export());

    let stdout = run_cli_success(&["get-document", "2"], &url);
    let value: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value, json!({ "first_name": "Grace" }));
}

#[test]
fn test_list_documents_skips_holes_and_fails_on_bad_entry() {
    let temp_dir = TempDir::new().unwrap();
    let (_, url) = write_export(temp_dir.path(), &sample_export());

    // users/3 does not decode, so the whole listing fails
    let stderr = run_cli_failure(&["list-documents"], &url);
    assert!(stderr.contains("Failed to list documents"));

    let mut export = sample_export();
    export["users"][3] = Value::Null;
    let (_, url) = write_export(temp_dir.path(), &export);

    let stdout = run_cli_success(&["list-documents"], &url);
    let ids: Vec<String> = stdout
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap())
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn test_list_documents_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    let (_, url) = write_export(temp_dir.path(), &json!({ "settings": {} }));

    let output = common::run_cli(&["list-documents"], &url);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No documents found."));
}

#[test]
fn test_get_path_raw_value() {
    let temp_dir = TempDir::new().unwrap();
    let (_, url) = write_export(temp_dir.path(), &sample_export());

    let stdout = run_cli_success(&["get-path", "settings/theme", "--compact"], &url);
    assert_eq!(stdout.trim(), "\"dark\"");
}

#[test]
fn test_get_path_rejects_invalid_path() {
    let temp_dir = TempDir::new().unwrap();
    let (_, url) = write_export(temp_dir.path(), &sample_export());

    let stderr = run_cli_failure(&["get-path", "users/a.b"], &url);
    assert!(stderr.contains("Invalid path"));
}

#[test]
fn test_invalid_database_url() {
    let stderr = run_cli_failure(&["validate"], "http://example.com");
    assert!(stderr.contains("Invalid database URL"));
}
