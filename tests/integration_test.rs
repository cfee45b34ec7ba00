// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use git2::Repository;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_git-commit-ai");

// Helper function to setup a temporary git repo for testing
fn setup_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    // Empty config keeps the user's own settings out of the run
    fs::write(temp_dir.path().join("gitcommit.toml"), "").expect("Could not write config");

    temp_dir
}

fn stage_file(dir: &TempDir, name: &str, contents: &str) {
    let repo = Repository::open(dir.path()).expect("Could not open repo");
    fs::write(dir.path().join(name), contents).expect("Could not write file");
    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new(name))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");
}

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir.path())
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_help_uses_long_flag_only() {
    let output = Command::new(BIN)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git-commit-ai"));
    assert!(stdout.contains("--no-scope"));
    assert!(stdout.contains("--no-ai"));
    assert!(stdout.contains("--header"));
}

#[test]
fn test_version() {
    let output = Command::new(BIN)
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = Command::new(BIN)
        .arg("--definitely-not-a-flag")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_nothing_staged_exits_with_error() {
    let dir = setup_test_repo();

    let output = run_in(&dir, &["-nai"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No staged changes"),
        "stderr should mention staged changes, got: {}",
        stderr
    );
    // No prompt was shown
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Select the type of change"));
}

#[test]
fn test_closed_input_is_a_clean_abort() {
    let dir = setup_test_repo();
    stage_file(&dir, "notes.txt", "hello\n");

    let output = run_in(&dir, &["-nai", "-ns", "-p"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nothing was committed"));

    let repo = Repository::open(dir.path()).unwrap();
    assert!(repo.head().is_err(), "no commit should have been created");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = setup_test_repo();
    fs::write(dir.path().join("gitcommit.toml"), "[ai\nmodel =").unwrap();

    let output = run_in(&dir, &["--no-ai"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error loading config"));
    assert!(stderr.contains("Caused by"));
}
