//! End-to-end tests for the `lifeos` binary.
//!
//! Each test gets its own workspace root via `LIFEOS_ROOT`, so tests
//! are isolated and never touch the user's real workspace. Stdout is
//! not a TTY here, which flips the CLI into JSON mode; the tests
//! parse the output instead of scraping human text.

use assert_cmd::Command;
use tempfile::TempDir;

fn lifeos(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lifeos").unwrap();
    cmd.env("LIFEOS_ROOT", root.path().join("workspace"));
    cmd.env_remove("LIFEOS_REMOTE_URL");
    // Keep stderr clean so error-path tests can parse it as JSON
    cmd.arg("--quiet");
    cmd
}

fn stdout_json(root: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = lifeos(root).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "command {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_init_creates_workspace() {
    let root = TempDir::new().unwrap();
    let json = stdout_json(&root, &["init"]);
    assert!(json["data_dir"].as_str().unwrap().ends_with("data"));
    assert!(root.path().join("workspace/memory").exists());
    assert!(root.path().join("workspace/MEMORY.md").exists());
}

#[test]
fn test_init_twice_fails_without_force() {
    let root = TempDir::new().unwrap();
    lifeos(&root).arg("init").assert().success();
    let output = lifeos(&root).arg("init").output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], "ALREADY_INITIALIZED");

    lifeos(&root).args(["init", "--force"]).assert().success();
}

#[test]
fn test_task_lifecycle() {
    let root = TempDir::new().unwrap();

    let created = stdout_json(&root, &["task", "add", "Ship spec", "--status", "todo"]);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("task-"));
    assert_eq!(created["status"], "todo");
    assert!(created["createdAt"].is_string());

    let listed = stdout_json(&root, &["task", "list"]);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());

    let done = stdout_json(&root, &["task", "done", id.as_str()]);
    assert_eq!(done["status"], "completed");
    assert!(done["updatedAt"].is_string());

    let deleted = stdout_json(&root, &["task", "delete", id.as_str()]);
    assert_eq!(deleted["deleted"], true);
    assert!(stdout_json(&root, &["task", "list"]).as_array().unwrap().is_empty());
}

#[test]
fn test_task_status_synonym_and_rejection() {
    let root = TempDir::new().unwrap();

    let created = stdout_json(&root, &["task", "add", "Quick one", "--status", "done"]);
    assert_eq!(created["status"], "completed");

    let output = lifeos(&root)
        .args(["task", "add", "Bad", "--status", "bananas"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_update_missing_task_exits_not_found() {
    let root = TempDir::new().unwrap();
    let output = lifeos(&root)
        .args(["task", "update", "task-missing", "--status", "completed"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], "RECORD_NOT_FOUND");
}

#[test]
fn test_ledger_totals_and_mrr() {
    let root = TempDir::new().unwrap();

    lifeos(&root)
        .args(["finance", "revenue", "500", "invoice", "--recurring"])
        .assert()
        .success();
    lifeos(&root)
        .args(["finance", "revenue", "300", "one-off"])
        .assert()
        .success();
    lifeos(&root)
        .args(["finance", "expense", "120", "hosting"])
        .assert()
        .success();

    let ledger = stdout_json(&root, &["finance", "show"]);
    assert_eq!(ledger["total"]["revenue"], 800.0);
    assert_eq!(ledger["total"]["expenses"], 120.0);
    assert_eq!(ledger["total"]["mrr"], 500.0);
    assert_eq!(ledger["revenue"].as_array().unwrap().len(), 2);
}

#[test]
fn test_activity_feed_and_memory_mirror() {
    let root = TempDir::new().unwrap();

    lifeos(&root)
        .args(["client", "add", "Acme"])
        .assert()
        .success();
    lifeos(&root)
        .args(["tokens", "log", "0.42", "--meta", "model=opus"])
        .assert()
        .success();

    // Token logging must not reach the activity feed
    let activity = stdout_json(&root, &["activity"]);
    let entries = activity.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["message"], "New Client: Acme");

    // But the client creation reaches the Markdown journal
    let memory = stdout_json(&root, &["memory", "today"]);
    let content = memory["content"].as_str().unwrap();
    assert!(content.contains("Daily Log"));
    assert!(content.contains("New Client: Acme"));
}

#[test]
fn test_snapshot_round_trip_between_workspaces() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    lifeos(&source)
        .args(["task", "add", "exported task"])
        .assert()
        .success();
    lifeos(&source)
        .args(["finance", "revenue", "250", "invoice", "--recurring"])
        .assert()
        .success();

    let snapshot_path = source.path().join("snapshot.json");
    lifeos(&source)
        .args(["snapshot", "export", "--output"])
        .arg(&snapshot_path)
        .assert()
        .success();

    lifeos(&target)
        .arg("snapshot")
        .arg("import")
        .arg(&snapshot_path)
        .assert()
        .success();

    let tasks = stdout_json(&target, &["task", "list"]);
    assert_eq!(tasks[0]["title"], "exported task");

    let ledger = stdout_json(&target, &["finance", "show"]);
    assert_eq!(ledger["total"]["mrr"], 250.0);

    // The activity feed does not travel with snapshots
    assert!(stdout_json(&target, &["activity"]).as_array().unwrap().is_empty());
}

#[test]
fn test_silent_mode_prints_only_the_id() {
    let root = TempDir::new().unwrap();
    let output = lifeos(&root)
        .args(["--silent", "task", "add", "quiet task"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let trimmed = stdout.trim();
    assert!(trimmed.starts_with("task-"));
    assert!(!trimmed.contains(' '));
}

#[test]
fn test_status_counts() {
    let root = TempDir::new().unwrap();
    lifeos(&root)
        .args(["idea", "add", "weekly digest"])
        .assert()
        .success();
    lifeos(&root)
        .args(["checkin", "log", "--energy", "7", "--focus", "8"])
        .assert()
        .success();

    let status = stdout_json(&root, &["status"]);
    assert_eq!(status["ideas"], 1);
    assert_eq!(status["checkins"], 1);
    assert_eq!(status["tasks"], 0);
}
