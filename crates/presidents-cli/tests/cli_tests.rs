//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FOUNDERS: &str = "../../rosters/founders.toml";
const MODERN: &str = "../../rosters/modern.toml";

fn presidents() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("presidents").unwrap();
    cmd.env("HOME", "/nonexistent-presidents-home")
        .env_remove("PRESIDENTS_ROSTER")
        .env_remove("RUST_LOG");
    cmd
}

const FOUNDERS_PERFECT: &str = "\
George Washington
1789
1797
none
John Adams
1797
1801
Federalist
Jefferson
1801
1809
Democratic-Republican
Madison
1809
1817
democratic republican party
Monroe
1817
1825
Democratic Republican
";

#[test]
fn help_lists_commands() {
    presidents()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("quiz"))
        .stdout(predicate::str::contains("flashcards"))
        .stdout(predicate::str::contains("timeline"))
        .stdout(predicate::str::contains("grade"));
}

#[test]
fn validate_valid_roster() {
    presidents()
        .arg("validate")
        .arg("--roster")
        .arg(FOUNDERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 presidents"))
        .stdout(predicate::str::contains("All rosters valid"));
}

#[test]
fn validate_directory() {
    presidents()
        .arg("validate")
        .arg("--roster")
        .arg("../../rosters")
        .assert()
        .success()
        .stdout(predicate::str::contains("founders.toml"))
        .stdout(predicate::str::contains("modern.toml"))
        .stdout(predicate::str::contains("All rosters valid"));
}

#[test]
fn validate_nonexistent_file() {
    presidents()
        .arg("validate")
        .arg("--roster")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("odd.toml");
    std::fs::write(
        &path,
        r#"
[[presidents]]
number = 9
full_name = "William Henry Harrison"
aliases = ["WHH", "whh"]
start_year = 1841
end_year = 1840
party = "Whig"
"#,
    )
    .unwrap();

    presidents()
        .arg("validate")
        .arg("--roster")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[#9] WARNING: start_year 1841 is after end_year 1840"))
        .stdout(predicate::str::contains("duplicate alias"))
        .stdout(predicate::str::contains("2 warning(s) found."));
}

#[test]
fn validate_rejects_out_of_order_roster() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    let founders = std::fs::read_to_string(FOUNDERS).unwrap();
    std::fs::write(&path, founders.replace("number = 5", "number = 2")).unwrap();

    presidents()
        .arg("validate")
        .arg("--roster")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ascending"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    presidents()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created presidents.toml"))
        .stdout(predicate::str::contains("Created rosters/presidents.toml"));

    assert!(dir.path().join("presidents.toml").exists());
    assert!(dir.path().join("rosters/presidents.toml").exists());

    // The written roster is loadable
    presidents()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--roster")
        .arg("rosters/presidents.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("42 presidents"))
        .stdout(predicate::str::contains("All rosters valid"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("presidents.toml"), "# existing").unwrap();

    presidents()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));

    let content = std::fs::read_to_string(dir.path().join("presidents.toml")).unwrap();
    assert_eq!(content, "# existing");
}

#[test]
fn timeline_builtin() {
    presidents()
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Abraham Lincoln"))
        .stdout(predicate::str::contains("Bill Clinton"));
}

#[test]
fn timeline_markdown_with_open_term() {
    presidents()
        .arg("timeline")
        .arg("--roster")
        .arg(MODERN)
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("| 47 | Donald Trump | 2025\u{2013}Present | Republican |"))
        .stdout(predicate::str::contains("Abraham Lincoln").not());
}

#[test]
fn timeline_json() {
    let output = presidents()
        .arg("timeline")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 42);
    assert_eq!(entries[2]["party"], "Democratic-Republican");
}

#[test]
fn roster_env_override() {
    presidents()
        .env("PRESIDENTS_ROSTER", FOUNDERS)
        .arg("timeline")
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("James Monroe"))
        .stdout(predicate::str::contains("John Quincy Adams").not());
}

#[test]
fn missing_config_fails() {
    presidents()
        .arg("timeline")
        .arg("--config")
        .arg("/nonexistent/presidents.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn config_sets_default_mode() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("presidents.toml");
    std::fs::write(&config, "default_mode = \"test\"\n").unwrap();

    presidents()
        .arg("quiz")
        .arg("--roster")
        .arg(FOUNDERS)
        .arg("--config")
        .arg(&config)
        .write_stdin(":done\ncheck\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Started test mode"))
        .stdout(predicate::str::contains("Attempt #1 recorded."));
}

#[test]
fn grade_toml_sheet() {
    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("answers.toml");
    std::fs::write(
        &sheet,
        r#"
[[answers]]
number = 1
name = "Washington"
start_year = 1789
end_year = 1800
party = "independent"
"#,
    )
    .unwrap();

    // Four blank records cost 3 points each, plus a wrong end year
    presidents()
        .arg("grade")
        .arg("--roster")
        .arg(FOUNDERS)
        .arg("--answers")
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 81.5 / 94 | Correct: 3 / 20"))
        .stdout(predicate::str::contains("#1 end year: 1800 -> 1797 [incorrect]"))
        .stdout(predicate::str::contains("#2 name: (blank) -> John Adams [incorrect]"));
}

#[test]
fn grade_json_and_saved_report() {
    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("answers.json");
    std::fs::write(
        &sheet,
        r#"{"answers": [
            {"number": 16, "name": "Abraham Lincon", "start_year": "1861", "end_year": "1865", "party": "Republican"}
        ]}"#,
    )
    .unwrap();
    let saved = dir.path().join("out").join("report.json");

    let output = presidents()
        .arg("grade")
        .arg("--answers")
        .arg(&sheet)
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&saved)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["score"], 0.0);
    assert_eq!(report["correct_count"], 3);
    assert_eq!(report["max_correct"], 168);
    assert!(saved.exists());
}

#[test]
fn grade_missing_sheet_fails() {
    presidents()
        .arg("grade")
        .arg("--answers")
        .arg("missing.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read answer sheet"));
}

#[test]
fn quiz_practice_perfect() {
    presidents()
        .arg("quiz")
        .arg("--roster")
        .arg(FOUNDERS)
        .write_stdin(format!("{FOUNDERS_PERFECT}check\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Started practice mode"))
        .stdout(predicate::str::contains("Score: 94 / 94 | Correct: 20 / 20"));
}

#[test]
fn quiz_test_locks_after_check() {
    presidents()
        .arg("quiz")
        .arg("--mode")
        .arg("test")
        .arg("--roster")
        .arg(FOUNDERS)
        .write_stdin(format!("{FOUNDERS_PERFECT}check\ncheck\nreveal\nhistory\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempt #1 recorded."))
        .stdout(predicate::str::contains("! the test is finished"))
        .stdout(predicate::str::contains("1 attempt(s). Best 94"));
}

#[test]
fn quiz_reveal_after_typo() {
    presidents()
        .arg("quiz")
        .arg("--roster")
        .arg(FOUNDERS)
        .write_stdin("George Washingtn\n1789\n:done\nreveal\nresume\nedit 1 name GW\ncheck\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("George Washingtn -> George Washington"))
        .stdout(predicate::str::contains("Answers are editable again."))
        .stdout(predicate::str::contains("Updated #1 name."));
}

#[test]
fn quiz_rejects_unknown_mode() {
    presidents()
        .arg("quiz")
        .arg("--mode")
        .arg("exam")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode"));
}

#[test]
fn flashcards_session() {
    presidents()
        .arg("flashcards")
        .arg("--roster")
        .arg(FOUNDERS)
        .arg("--front")
        .arg("name")
        .arg("--back")
        .arg("years,party")
        .arg("--seed")
        .arg("42")
        .write_stdin("flip\nknow\nnext\ndont-know\ntable\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Card 1/5 (Back) [know]"))
        .stdout(predicate::str::contains("  1789\u{2013}1797"))
        .stdout(predicate::str::contains("Political Party: None"))
        .stdout(predicate::str::contains("don't know"));
}

#[test]
fn flashcards_reject_unknown_field() {
    presidents()
        .arg("flashcards")
        .arg("--front")
        .arg("portrait")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown card field"));
}
