//! Integration tests for the `readitnow` CLI binary.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn write_note(path: &Path, content: &str, mtime_secs: u64) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(path, content)?;
    let file = fs::File::options().write(true).open(path)?;
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(mtime_secs))?;
    Ok(())
}

fn readitnow_cmd(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_readitnow"));
    cmd.env_remove("READITNOW_VAULT_PATH")
        .env_remove("RUST_LOG")
        .arg("--conf")
        .arg(tmp.path().join("conf").join("config.yaml"));
    cmd
}

#[test]
fn test_list_returns_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let vault = tmp.path().join("vault");
    fs::create_dir(&vault)?;
    write_note(&vault.join("old.md"), "# Old\n\n[[rust]]\nOlder note.", 100)?;
    write_note(
        &vault.join("new.md"),
        "# New\n\n[Video](https://youtube.com/watch?v=abc123)",
        200,
    )?;

    let output = readitnow_cmd(&tmp)
        .arg("--vault")
        .arg(&vault)
        .arg("list")
        .output()?;
    assert!(
        output.status.success(),
        "readitnow list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    let Some(rows) = payload.as_array() else {
        return Err("expected a JSON array".into());
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("title").and_then(Value::as_str), Some("new"));
    assert_eq!(
        rows[0].get("thumbnail_url").and_then(Value::as_str),
        Some("https://img.youtube.com/vi/abc123/mqdefault.jpg")
    );
    assert_eq!(rows[1].get("excerpt").and_then(Value::as_str), Some("Old Older note."));
    Ok(())
}

#[test]
fn test_toggle_then_stats() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let vault = tmp.path().join("vault");
    fs::create_dir(&vault)?;
    write_note(&vault.join("a.md"), "# A", 1)?;
    write_note(&vault.join("b.md"), "# B", 2)?;

    let output = readitnow_cmd(&tmp)
        .arg("--vault")
        .arg(&vault)
        .arg("toggle")
        .arg(vault.join("a.md"))
        .output()?;
    assert!(output.status.success());
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload.get("ok").and_then(Value::as_bool), Some(true));
    assert_eq!(payload.get("is_read").and_then(Value::as_bool), Some(true));

    let output = readitnow_cmd(&tmp)
        .arg("--vault")
        .arg(&vault)
        .arg("--max-notes")
        .arg("1")
        .arg("stats")
        .output()?;
    assert!(output.status.success());
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload.get("total_notes").and_then(Value::as_u64), Some(2));
    assert_eq!(payload.get("read_notes").and_then(Value::as_u64), Some(1));
    assert_eq!(payload.get("unread_notes").and_then(Value::as_u64), Some(1));
    assert_eq!(payload.get("showing_notes").and_then(Value::as_u64), Some(1));
    Ok(())
}

#[test]
fn test_missing_vault_exits_with_error() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let output = readitnow_cmd(&tmp)
        .arg("--vault")
        .arg(tmp.path().join("does-not-exist"))
        .arg("list")
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_read_missing_note_reports_failure() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let vault = tmp.path().join("vault");
    fs::create_dir(&vault)?;
    let output = readitnow_cmd(&tmp)
        .arg("--vault")
        .arg(&vault)
        .arg("read")
        .arg(vault.join("ghost.md"))
        .output()?;
    assert!(!output.status.success());
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload.get("ok").and_then(Value::as_bool), Some(false));
    Ok(())
}

#[test]
fn test_init_writes_config_once() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let output = readitnow_cmd(&tmp).arg("init").output()?;
    assert!(output.status.success());
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload.get("created").and_then(Value::as_bool), Some(true));
    assert!(tmp.path().join("conf").join("config.yaml").is_file());

    let output = readitnow_cmd(&tmp).arg("init").output()?;
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload.get("created").and_then(Value::as_bool), Some(false));
    Ok(())
}
