//! Integration tests for adding, listing, pinning and deleting entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_log, seed_scenario, stacks_cmd};

fn added_id(stdout: &[u8]) -> String {
    let stdout = String::from_utf8(stdout.to_vec()).unwrap();
    let start = stdout.rfind('(').unwrap() + 1;
    let end = stdout.rfind(')').unwrap();
    stdout[start..end].to_string()
}

#[test]
fn test_add_then_list() {
    let temp = TempDir::new().unwrap();
    let entries = init_log(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--title",
            "  Dune ",
            "--category",
            "book",
            "--creator",
            "Frank Herbert",
            "--date",
            "2023-05-01",
            "--rating",
            "4.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Dune\""));

    let raw = fs::read_to_string(&entries).unwrap();
    assert!(raw.contains("\"title\": \"Dune\""));
    assert!(raw.contains("\"dateFinished\": \"2023-05-01\""));

    stacks_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Book] Dune"))
        .stdout(predicate::str::contains("4.5 ★  ·  May 1, 2023"))
        .stdout(predicate::str::contains("Creator: Frank Herbert"))
        .stdout(predicate::str::contains("Total: 1  Screen: 0  Books: 1"));
}

#[test]
fn test_add_blank_title_is_rejected_without_writing() {
    let temp = TempDir::new().unwrap();
    let entries = init_log(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["add", "--title", "   "])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Title cannot be empty"));

    assert!(!entries.exists());
}

#[test]
fn test_add_rejects_bad_category_and_date() {
    let temp = TempDir::new().unwrap();
    let entries = init_log(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["add", "--title", "Serial", "--category", "podcast"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("movie, tv, book"));

    stacks_cmd()
        .current_dir(temp.path())
        .args(["add", "--title", "Arrival", "--date", "01/01/2023"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    assert!(!entries.exists());
}

#[test]
fn test_add_rejects_non_finite_rating() {
    let temp = TempDir::new().unwrap();
    let entries = init_log(temp.path());

    for rating in ["NaN", "inf"] {
        stacks_cmd()
            .current_dir(temp.path())
            .args(["add", "--title", "Dune", "--rating", rating])
            .assert()
            .failure()
            .code(4)
            .stderr(predicate::str::contains("Invalid rating"));
    }

    assert!(!entries.exists());
}

#[test]
fn test_add_uses_configured_default_category() {
    let temp = TempDir::new().unwrap();
    init_log(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["config", "default_category", "tv"])
        .assert()
        .success();

    stacks_cmd()
        .current_dir(temp.path())
        .args(["add", "--title", "Severance"])
        .assert()
        .success();

    stacks_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[TV Show] Severance"))
        .stdout(predicate::str::contains("Date unknown"))
        .stdout(predicate::str::contains("Years: [all] Unknown"));
}

#[test]
fn test_list_scenario_pinned_first() {
    let temp = TempDir::new().unwrap();
    seed_scenario(temp.path());

    let output = stacks_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let arrival = stdout.find("Arrival").unwrap();
    let dune = stdout.find("Dune").unwrap();
    assert!(arrival < dune);
    assert!(stdout.contains("* [Movie] Arrival"));
    assert!(stdout.contains("Total: 2  Screen: 1  Books: 1"));
    assert!(stdout.contains("Years: [all] 2023"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    seed_scenario(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "DUNE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Arrival").not())
        .stdout(predicate::str::contains("Total: 2"));
}

#[test]
fn test_list_category_filter() {
    let temp = TempDir::new().unwrap();
    seed_scenario(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["list", "--category", "movie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arrival"))
        .stdout(predicate::str::contains("Dune").not());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["list", "--category", "Movie"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_list_unknown_year_resets_selector() {
    let temp = TempDir::new().unwrap();
    seed_scenario(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["list", "--year", "1999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries match those filters yet."))
        .stdout(predicate::str::contains("Year 1999 is not in the log"))
        .stdout(predicate::str::contains("Years: [all] 2023"));

    stacks_cmd()
        .current_dir(temp.path())
        .args(["list", "--year", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Years: all [2023]"))
        .stdout(predicate::str::contains("not in the log").not());
}

#[test]
fn test_pin_toggles_and_persists() {
    let temp = TempDir::new().unwrap();
    let entries = seed_scenario(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["pin", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pinned \"Dune\""));

    let raw = fs::read_to_string(&entries).unwrap();
    assert!(!raw.contains("\"pinned\": false"));

    // Both pinned now: newest created first
    let output = stacks_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find("Dune").unwrap() < stdout.find("Arrival").unwrap());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["pin", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unpinned \"Dune\""));
}

#[test]
fn test_pin_unknown_id_is_noop() {
    let temp = TempDir::new().unwrap();
    let entries = seed_scenario(temp.path());
    let before = fs::read_to_string(&entries).unwrap();

    stacks_cmd()
        .current_dir(temp.path())
        .args(["pin", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing changed"));

    assert_eq!(fs::read_to_string(&entries).unwrap(), before);
}

#[test]
fn test_delete_with_confirmation() {
    let temp = TempDir::new().unwrap();
    let entries = seed_scenario(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["delete", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete \"Arrival\"? [y/N]"))
        .stdout(predicate::str::contains("Cancelled"));
    assert!(fs::read_to_string(&entries).unwrap().contains("Arrival"));

    stacks_cmd()
        .current_dir(temp.path())
        .args(["delete", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted \"Arrival\""));
    assert!(!fs::read_to_string(&entries).unwrap().contains("Arrival"));
}

#[test]
fn test_delete_yes_flag_and_unknown_id() {
    let temp = TempDir::new().unwrap();
    init_log(temp.path());

    let output = stacks_cmd()
        .current_dir(temp.path())
        .args(["add", "--title", "Alien"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = added_id(&output.stdout);

    stacks_cmd()
        .current_dir(temp.path())
        .args(["delete", "missing", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing changed"));

    stacks_cmd()
        .current_dir(temp.path())
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted \"Alien\""));

    stacks_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0  Screen: 0  Books: 0"));
}

#[test]
fn test_years_command() {
    let temp = TempDir::new().unwrap();
    seed_scenario(temp.path());

    stacks_cmd()
        .current_dir(temp.path())
        .args(["add", "--title", "Solaris", "--date", "2019-07-04"])
        .assert()
        .success();
    stacks_cmd()
        .current_dir(temp.path())
        .args(["add", "--title", "Stalker"])
        .assert()
        .success();

    stacks_cmd()
        .current_dir(temp.path())
        .arg("years")
        .assert()
        .success()
        .stdout("Unknown\n2023\n2019\n");
}
