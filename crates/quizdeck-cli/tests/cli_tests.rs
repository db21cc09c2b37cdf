//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizdeck() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizdeck").unwrap();
    cmd.env_remove("QUIZDECK_QUESTIONS_URL");
    cmd
}

fn write_set(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

const CAPITAL: &str = r#"[{"question": "Capital of France?", "type": "fill_blank", "answer": "Paris"}]"#;

#[test]
fn play_all_correct() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "capital.json", CAPITAL);

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .arg("--count")
        .arg("1")
        .write_stdin("  paris \n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 1"))
        .stdout(predicate::str::contains("Correct ✅"))
        .stdout(predicate::str::contains("Final Score: 1 / 1 (100%)"))
        .stdout(predicate::str::contains("Excellent!"));
}

#[test]
fn play_miss_comes_back_for_retry() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "capital.json", CAPITAL);

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .arg("--count")
        .arg("1")
        .write_stdin("Lyon\n\nParis\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect ❌"))
        .stdout(predicate::str::contains("Correct answer: Paris"))
        .stdout(predicate::str::contains("will come back later"))
        .stdout(predicate::str::contains("Question 2 of 2"))
        .stdout(predicate::str::contains("Final Score: 1 / 2 (50%)"))
        .stdout(predicate::str::contains("Review your mistakes:"))
        .stdout(predicate::str::contains("Lyon"));
}

#[test]
fn play_prompts_for_count_until_valid() {
    let dir = TempDir::new().unwrap();
    let set = write_set(
        &dir,
        "pair.json",
        r#"[
            {"question": "Is water wet?", "answer": "yes"},
            {"question": "Is fire hot?", "answer": "yes"}
        ]"#,
    );

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .write_stdin("three\n5\n1\nyes\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How many questions? (1-2"))
        .stdout(predicate::str::contains("Please enter a whole number."))
        .stdout(predicate::str::contains(
            "question count must be between 1 and 2, got 5.",
        ))
        .stdout(predicate::str::contains("Final Score: 1 / 1 (100%)"));
}

#[test]
fn play_single_option_multiple_choice() {
    let dir = TempDir::new().unwrap();
    let set = write_set(
        &dir,
        "mc.json",
        r#"[{"question": "Pick the metal", "type": "multiple_choice", "options": [], "answer": "Iron"}]"#,
    );

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .arg("--count")
        .arg("1")
        .write_stdin("1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) Iron"))
        .stdout(predicate::str::contains("Final Score: 1 / 1 (100%)"));
}

#[test]
fn play_json_summary() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "capital.json", CAPITAL);

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .arg("--count")
        .arg("1")
        .arg("--format")
        .arg("json")
        .write_stdin("Paris\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 1"))
        .stdout(predicate::str::contains("\"percent\": 100"))
        .stdout(predicate::str::contains("\"wrong_log\": []"));
}

#[test]
fn play_quit_abandons_session() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "capital.json", CAPITAL);

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .arg("--count")
        .arg("1")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session ended"))
        .stdout(predicate::str::contains("Final Score").not());
}

#[test]
fn play_end_of_input_abandons_session() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "capital.json", CAPITAL);

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session ended"));
}

#[test]
fn play_empty_set_fails() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "empty.json", "[]");

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no questions available"));
}

#[test]
fn play_non_array_fails() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "object.json", r#"{"question": "q"}"#);

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed question data"));
}

#[test]
fn play_missing_file_fails() {
    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn play_count_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "capital.json", CAPITAL);

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .arg("--count")
        .arg("4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 1, got 4"));
}

#[test]
fn play_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "capital.json", CAPITAL);

    quizdeck()
        .arg("play")
        .arg("--questions")
        .arg(&set)
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn play_configured_topic() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("sets")).unwrap();
    write_set(&dir, "sets/capital.json", CAPITAL);
    let config = write_set(
        &dir,
        "quiz.toml",
        r#"
default_count = 1

[topics.geo]
type = "file"
path = "sets/capital.json"
"#,
    );

    quizdeck()
        .arg("play")
        .arg("--topic")
        .arg("geo")
        .arg("--config")
        .arg(&config)
        .write_stdin("Paris\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Score: 1 / 1 (100%)"));
}

#[test]
fn play_default_count_larger_than_topic() {
    let dir = TempDir::new().unwrap();
    write_set(&dir, "capital.json", CAPITAL);
    let config = write_set(
        &dir,
        "quiz.toml",
        r#"
default_count = 10
default_topic = "geo"

[topics.geo]
type = "file"
path = "capital.json"
"#,
    );

    quizdeck()
        .arg("play")
        .arg("--config")
        .arg(&config)
        .write_stdin("Paris\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 1"))
        .stdout(predicate::str::contains("Final Score: 1 / 1 (100%)"));
}

#[test]
fn play_unknown_topic_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_set(&dir, "quiz.toml", "");

    quizdeck()
        .arg("play")
        .arg("--topic")
        .arg("history")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("topic 'history' not found"));
}

#[test]
fn validate_clean_set() {
    let dir = TempDir::new().unwrap();
    let set = write_set(&dir, "capital.json", CAPITAL);

    quizdeck()
        .arg("validate")
        .arg("--questions")
        .arg(&set)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 questions"))
        .stdout(predicate::str::contains("All questions valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let set = write_set(
        &dir,
        "messy.json",
        r#"[
            {"question": "Pick one", "type": "multiple_choice", "options": ["a", "b"], "answer": "c"},
            {"question": "", "answer": "x"},
            "not an object"
        ]"#,
    );

    quizdeck()
        .arg("validate")
        .arg("--questions")
        .arg(&set)
        .assert()
        .success()
        .stdout(predicate::str::contains("[#1] WARNING"))
        .stdout(predicate::str::contains("[#2] WARNING"))
        .stdout(predicate::str::contains("[#3] WARNING"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    quizdeck()
        .arg("validate")
        .arg("--questions")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn topics_lists_configured_sets() {
    let dir = TempDir::new().unwrap();
    let config = write_set(
        &dir,
        "quiz.toml",
        r#"
default_topic = "geo"

[topics.geo]
type = "file"
path = "sets/capital.json"
title = "Capitals"

[topics.remote_set]
type = "http"
url = "https://example.org/set.json"
"#,
    );

    quizdeck()
        .arg("topics")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("geo (default): Capitals"))
        .stdout(predicate::str::contains("remote_set [https://example.org/set.json]"));
}

#[test]
fn topics_without_config() {
    let dir = TempDir::new().unwrap();

    quizdeck()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics configured"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizdeck.toml"))
        .stdout(predicate::str::contains("Created question-sets/example.json"));

    assert!(dir.path().join("quizdeck.toml").exists());
    assert!(dir.path().join("question-sets/example.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn init_output_validates_and_lists() {
    let dir = TempDir::new().unwrap();

    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizdeck()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg("question-sets/example.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 questions"))
        .stdout(predicate::str::contains("All questions valid."));

    quizdeck()
        .current_dir(dir.path())
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("example (default)"));
}

#[test]
fn help_output() {
    quizdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal quiz runner"));
}

#[test]
fn version_output() {
    quizdeck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizdeck"));
}
