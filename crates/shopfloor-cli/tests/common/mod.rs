#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary against a mock server with an isolated credential file.
pub fn run_cli(args: &[&str], store: &Path, base_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shopfloor"));
    cmd.args(args);
    cmd.env("SHOPFLOOR_STORE", store);
    cmd.env("SHOPFLOOR_BASE_URL", base_url);
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], store: &Path, base_url: &str) -> String {
    let output = run_cli(args, store, base_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(args: &[&str], store: &Path, base_url: &str) -> String {
    let output = run_cli(args, store, base_url);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
