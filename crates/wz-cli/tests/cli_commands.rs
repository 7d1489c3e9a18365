//! Integration tests for the `wz` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn wz() -> Command {
    Command::cargo_bin("wz").unwrap()
}

// ---------------------------------------------------------------------------
// tell
// ---------------------------------------------------------------------------

#[test]
fn tell_prints_a_joke() {
    wz().args(["tell", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn tell_is_deterministic_for_a_seed() {
    let first = wz()
        .args(["tell", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    wz().args(["tell", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::eq(first));
}

#[test]
fn tell_chuck_names_chuck_norris() {
    wz().args(["tell", "-c", "chuck", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chuck Norris"));
}

#[test]
fn tell_json_output() {
    let output = wz()
        .args(["tell", "--json", "-c", "chuck", "--seed", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(json["category"], "chuck");
    assert_eq!(json["language"], "en");
    assert!(!json["text"].as_str().unwrap().is_empty());
}

#[test]
fn tell_german_joke() {
    wz().args(["tell", "-l", "de", "--seed", "5", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\": \"de\""));
}

#[test]
fn tell_unknown_category_fails() {
    wz().args(["tell", "-c", "dad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category 'dad'"));
}

#[test]
fn tell_unknown_language_fails() {
    wz().args(["tell", "-l", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language 'fr'"));
}

// ---------------------------------------------------------------------------
// categories
// ---------------------------------------------------------------------------

#[test]
fn categories_lists_the_closed_sets() {
    wz().arg("categories")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("neutral")
                .and(predicate::str::contains("chuck"))
                .and(predicate::str::contains("all"))
                .and(predicate::str::contains("English"))
                .and(predicate::str::contains("German")),
        );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quit_immediately() {
    wz().args(["play", "--seed", "1"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Witzbold Joke Session")
                .and(predicate::str::contains("Jokes told: 1"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_next_then_quit() {
    wz().args(["play", "--seed", "1"])
        .write_stdin("n\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Jokes told: 2").and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_invalid_command_reprompts() {
    wz().args(["play", "--seed", "1"])
        .write_stdin("x\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Unknown command. Use 'n', 'c', or 'q'.")
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_change_category_by_name() {
    wz().args(["play", "--seed", "1"])
        .write_stdin("c\nchuck\nn\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Available categories:")
                .and(predicate::str::contains("Category changed to CHUCK"))
                .and(predicate::str::contains("Category: CHUCK"))
                .and(predicate::str::contains("Chuck Norris"))
                .and(predicate::str::contains("2. [CHUCK]")),
        );
}

#[test]
fn play_change_category_by_index() {
    wz().args(["play", "--seed", "1"])
        .write_stdin("c\n1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category changed to CHUCK"));
}

#[test]
fn play_rejected_category_keeps_the_default() {
    wz().args(["play", "--seed", "1"])
        .write_stdin("c\nbogus\nn\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("invalid category: bogus")
                .and(predicate::str::contains("Category changed").not())
                .and(predicate::str::contains("Jokes told: 2"))
                .and(predicate::str::contains("Category: CHUCK").not()),
        );
}

#[test]
fn play_session_end_recap_lists_all_jokes() {
    wz().args(["play", "--seed", "1"])
        .write_stdin("n\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Here are all the jokes you received:")
                .and(predicate::str::contains("1. [NEUTRAL]"))
                .and(predicate::str::contains("2. [NEUTRAL]")),
        );
}

#[test]
fn play_eof_exits_gracefully_with_recap() {
    wz().args(["play", "--seed", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Here are all the jokes you received:")
                .and(predicate::str::contains("1. [NEUTRAL]")),
        );
}

#[test]
fn play_starts_in_the_requested_category() {
    wz().args(["play", "--seed", "1", "-c", "chuck"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Category: CHUCK")
                .and(predicate::str::contains("Chuck Norris")),
        );
}

#[test]
fn play_german_session() {
    wz().args(["play", "--seed", "1", "-l", "de"])
        .write_stdin("n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_unknown_category_flag_fails() {
    wz().args(["play", "-c", "dad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category 'dad'"));
}
