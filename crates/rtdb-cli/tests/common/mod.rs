use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use url::Url;

/// Write `value` as a JSON export and return its file:// URL.
#[allow(dead_code)]
pub fn write_export(dir: &Path, value: &Value) -> (PathBuf, String) {
    let path = dir.join("export.json");
    std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    let url = Url::from_file_path(&path)
        .expect("Failed to convert path to file URL")
        .to_string();
    (path, url)
}

/// Run the CLI binary against the given database URL.
pub fn run_cli(args: &[&str], database_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rtdb"));
    cmd.args(args);
    cmd.env("RTDB_DATABASE_URL", database_url);
    cmd.env_remove("RTDB_AUTH");
    cmd.env_remove("RTDB_NAMESPACE");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
#[allow(dead_code)]
pub fn run_cli_success(args: &[&str], database_url: &str) -> String {
    let output = run_cli(args, database_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
#[allow(dead_code)]
pub fn run_cli_failure(args: &[&str], database_url: &str) -> String {
    let output = run_cli(args, database_url);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
