use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    first_dir: PathBuf,
    last_csv: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let first_dir = dir.path().join("first_names");
        fs::create_dir(&first_dir).unwrap();
        fs::write(
            first_dir.join("yob1990.txt"),
            "John,M,20000\nLiam,M,980000\n",
        )
        .unwrap();

        let last_csv = dir.path().join("last_names.csv");
        fs::write(&last_csv, "Smith,15000\nJones,985000\n").unwrap();

        Self {
            _dir: dir,
            first_dir,
            last_csv,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("namerank").unwrap();
        cmd.arg("--first-names")
            .arg(&self.first_dir)
            .arg("--last-names")
            .arg(&self.last_csv);
        cmd
    }
}

#[test]
fn scores_a_full_name() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args(["score", "--first", "John", "--last", "Smith"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("John Smith: 3.3/100"), "stdout: {}", stdout);
}

#[test]
fn scores_a_single_last_name() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args(["score", "--last", "Smith"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Smith: 8.2/100"), "stdout: {}", stdout);
}

#[test]
fn breakdown_prints_component_table() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args(["score", "--first", "John", "--breakdown"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Component scores for 'John'"));
    assert!(stdout.contains("Frequency"));
    assert!(stdout.contains("Letter distribution"));
}

#[test]
fn compare_ranks_and_exports_csv() {
    let ctx = TestContext::new();
    let csv_path = ctx._dir.path().join("ranking.csv");

    let output = ctx
        .cmd()
        .args(["compare", "John,Smith", "Zephyr"])
        .arg("--csv")
        .arg(&csv_path)
        .output()
        .unwrap();

    assert!(output.status.success());

    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Name,Uniqueness Score");
    // Zephyr is unseen and outranks the very common pair.
    assert!(lines[1].starts_with("Zephyr,"));
    assert!(lines[2].starts_with("John Smith,"));
}

#[test]
fn weight_flags_override_file_and_defaults() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args([
            "score",
            "--first",
            "John",
            "--frequency-weight",
            "0",
            "--structural-weight",
            "0",
            "--letter-dist-weight",
            "0",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("John: 0/100"), "stdout: {}", stdout);
}
