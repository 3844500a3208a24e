//! End-to-end tests for the worker binary's output streams.

use std::path::Path;
use std::process::{Command, Output};

use resilience_core::config::resilience_config::{CONFIG_ENV_VAR, ENV_OVERRIDES};
use resilience_core::tracing::setup::LOG_ENV_VAR;

fn run_worker(dir: &Path, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_resilience-worker"));
    cmd.current_dir(dir).env_remove(CONFIG_ENV_VAR);
    for key in ENV_OVERRIDES {
        cmd.env_remove(key);
    }
    cmd.env(LOG_ENV_VAR, "resilience_worker=info");
    cmd.env("RESILIENCE_DATABASE_URL", dir.join("runs.db"));
    cmd.envs(envs.iter().copied());
    cmd.output().unwrap()
}

#[test]
fn stdout_carries_only_the_summary() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = run_worker(
        dir.path(),
        &[("RESILIENCE_GRID_ROWS", "4"), ("RESILIENCE_GRID_COLS", "8")],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "unexpected stdout: {stdout}");
    let summary: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(summary["cells"], 32);
    assert_eq!(summary["adapter"], "synthetic");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("run committed"), "logs missing from stderr: {stderr}");
}

#[test]
fn failed_run_leaves_stdout_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = run_worker(dir.path(), &[("RESILIENCE_ADAPTER", "satellite")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("satellite"));
}
