#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn stacks_cmd() -> Command {
    let mut cmd = Command::cargo_bin("storystacks").unwrap();
    cmd.env_remove("STORYSTACKS_ROOT");
    cmd.env_remove("STORYSTACKS_LOG");
    cmd
}

/// Initialize a log and return the path of its entry file
pub fn init_log(root: &Path) -> std::path::PathBuf {
    stacks_cmd().arg("init").arg(root).assert().success();
    root.join(".storystacks").join("storyStacksEntries.json")
}

/// Two entries as the browser app would have stored them
pub const SCENARIO_JSON: &str = r#"[
  {"id":"1","category":"book","title":"Dune","creator":"Frank Herbert","dateFinished":"2023-05-01","rating":5,"format":"Paperback","thoughts":"","highlights":"","pinned":false,"createdAt":"2023-05-02T00:00:00Z"},
  {"id":"2","category":"movie","title":"Arrival","creator":"","dateFinished":"2023-01-01","rating":0,"format":"","thoughts":"","highlights":"","pinned":true,"createdAt":"2023-01-02T00:00:00Z"}
]"#;

pub fn seed_scenario(root: &Path) -> std::path::PathBuf {
    let entries = init_log(root);
    fs::write(&entries, SCENARIO_JSON).unwrap();
    entries
}
