use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn guess() -> Command {
    let mut cmd = Command::cargo_bin("guess").expect("binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_json(args: &[&str]) -> Value {
    let output = guess().args(args).output().expect("command run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn exhaustive_hints_for_twelve() {
    let body = run_json(&["hints", "12", "--exhaustive", "--json"]);
    assert_eq!(body["number"], 12);
    let hints = body["hints"].as_array().expect("hints array");
    assert_eq!(hints.len(), 17);
    assert_eq!(hints[0], "2 is a factor of the number.");
    assert_eq!(hints[16], "The sum of its digits is 3.");
}

#[test]
fn sampled_hints_follow_the_seed() {
    let first = run_json(&["hints", "360", "--seed", "4", "--json"]);
    let second = run_json(&["hints", "360", "--seed", "4", "--json"]);
    assert_eq!(first["hints"], second["hints"]);
    assert_eq!(first["seed"], 4);
}

#[test]
fn plain_hints_are_one_per_line() {
    guess()
        .args(["hints", "7", "--exhaustive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The number is a prime number.\n"))
        .stdout(predicate::str::contains("The number is an odd number.\n"));
}

#[test]
fn negative_numbers_are_accepted() {
    guess()
        .args(["evaluate", "-4", "The number is a perfect square."])
        .assert()
        .success()
        .stdout("bad\n");
}

#[test]
fn evaluate_reports_feedback() {
    guess()
        .args(["evaluate", "24", "The number of factors it has is 6."])
        .assert()
        .success()
        .stdout("bad\n");

    let body = run_json(&["evaluate", "7", "The number is a prime number.", "--json"]);
    assert_eq!(body["feedback"], "good");
    assert_eq!(body["concept"], "prime_number");
    assert_eq!(body["shape"], "main");
}

#[test]
fn unknown_hint_fails() {
    guess()
        .args(["evaluate", "3", "The number is purple."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The number is purple."));
}

#[test]
fn play_single_value_range() {
    guess()
        .args(["play", "--min", "5", "--max", "5", "--seed", "1"])
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct! You found it in 1 guess(es)."));
}

#[test]
fn play_reads_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game.toml");
    fs::write(&path, "min = -3\nmax = -3\nmax_guesses = 2\nseed = 8\n").unwrap();

    guess()
        .arg("play")
        .arg("--config")
        .arg(&path)
        .write_stdin("0\n-3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("between -3 and -3. You have 2 guesses."))
        .stdout(predicate::str::contains("Guess must be between -3 and -3."))
        .stdout(predicate::str::contains("Correct! You found it in 1 guess(es)."));
}

#[test]
fn play_rejects_inverted_range() {
    guess()
        .args(["play", "--min", "10", "--max", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid game configuration"));
}
