use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// a, b 두 디렉토리가 있는 임시 작업 공간
fn workspace() -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("a")).unwrap();
    fs::create_dir(tmp.path().join("b")).unwrap();
    let root = tmp.path().display().to_string();
    (tmp, root)
}

fn run_all(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("run-all").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--config")
        .arg(tmp.path().join("missing-config.toml"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("run-all").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Run a shell command in every directory"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("run-all").unwrap();
    cmd.arg("--version").assert().success();
}

#[test]
fn test_missing_command() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Command(s) must be provided using the --command flag.",
        ));
}

#[test]
fn test_no_matching_directories() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/nothing-*", root))
        .arg("--command")
        .arg("true")
        .assert()
        .success()
        .stdout(predicate::str::contains("No directories matched the pattern."));
}

#[test]
fn test_requirement_filters_everything() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .arg("--require")
        .arg("Cargo.toml")
        .arg("--command")
        .arg("true")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No directories with the required folder or file matched the pattern.",
        ));
}

#[test]
fn test_malformed_pattern() {
    let (tmp, _root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg("/tmp/[")
        .arg("--command")
        .arg("true")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid directory pattern"));
}

#[test]
fn test_sequential_run_with_exclude() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .arg("--exclude")
        .arg(format!("{}/a", root))
        .arg("--command")
        .arg("touch ran.txt")
        .arg("-y")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Directory: {}/b - Success", root)))
        .stdout(predicate::str::contains(format!("Directory: {}/a", root)).not());

    assert!(tmp.path().join("b/ran.txt").exists());
    assert!(!tmp.path().join("a/ran.txt").exists());
}

#[test]
fn test_sequential_failure_halts() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .arg("--command")
        .arg("exit 1")
        .arg("-y")
        .assert()
        .failure()
        .stdout(predicate::str::contains(format!("Directory: {}/a - Error:", root)))
        .stdout(predicate::str::contains("halted after failure"));
}

#[test]
fn test_parallel_continue_on_failure() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .arg("--command")
        .arg("echo hello-from-$(basename \"$(pwd)\"); exit 1")
        .arg("--parallel")
        .arg("--continue-on-failure")
        .arg("-y")
        .assert()
        .failure()
        .stdout(predicate::str::contains("hello-from-a"))
        .stdout(predicate::str::contains("hello-from-b"))
        .stdout(predicate::str::contains(format!("Directory: {}/a - Error:", root)))
        .stdout(predicate::str::contains(format!("Directory: {}/b - Error:", root)));
}

#[test]
fn test_dry_run_executes_nothing() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .arg("--command")
        .arg("touch ran.txt")
        .arg("--dry-run")
        .arg("--parallel")
        .arg("-y")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command to be run in directory"));

    assert!(!tmp.path().join("a/ran.txt").exists());
    assert!(!tmp.path().join("b/ran.txt").exists());
}

#[test]
fn test_shell_from_config_file() {
    let (tmp, root) = workspace();
    let config = tmp.path().join("config.toml");
    fs::write(&config, "shell = \"bash\"\ncontinue_on_failure = true\n").unwrap();

    let mut cmd = Command::cargo_bin("run-all").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .arg("--command")
        .arg("[[ -n \"$BASH_VERSION\" ]]")
        .arg("-y")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Directory: {}/a - Success", root)))
        .stdout(predicate::str::contains(format!("Directory: {}/b - Success", root)));
}

#[test]
fn test_confirmation_read_from_stdin() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .arg("--command")
        .arg("touch ran.txt")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Directory: {}/a - Success", root)))
        .stdout(predicate::str::contains(format!("Directory: {}/b - Success", root)));

    assert!(tmp.path().join("a/ran.txt").exists());
    assert!(tmp.path().join("b/ran.txt").exists());
}

#[test]
fn test_declined_confirmation_aborts_cleanly() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .arg("--command")
        .arg("touch ran.txt")
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation aborted."))
        .stdout(predicate::str::contains("Command execution summary:").not());

    assert!(!tmp.path().join("a/ran.txt").exists());
    assert!(!tmp.path().join("b/ran.txt").exists());
}

#[test]
fn test_closed_stdin_aborts_cleanly() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--dir-pattern")
        .arg(format!("{}/*", root))
        .arg("--command")
        .arg("touch ran.txt")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation aborted."));

    assert!(!tmp.path().join("a/ran.txt").exists());
}

#[test]
fn test_pattern_and_confirmation_read_from_stdin() {
    let (tmp, root) = workspace();
    run_all(&tmp)
        .arg("--command")
        .arg("touch ran.txt")
        .write_stdin(format!("{}/*\nyes\n", root))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the directory pattern"))
        .stdout(predicate::str::contains(format!("Directory: {}/a - Success", root)));

    assert!(tmp.path().join("b/ran.txt").exists());
}
