// Binary-level checks for the cenario CLI.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const SUITE: &str = "\
*** Test Cases ***
Login Valido
    [Tags]    media    frontend    login
";

#[test]
fn missing_input_directory_fails_with_an_error() {
    let mut cmd = Command::cargo_bin("cenario").unwrap();
    cmd.args(["--testinput", "/definitely/not/here"]);
    cmd.assert()
        .failure()
        .stderr(contains("not found or is not a directory"));
}

#[test]
fn happy_path_writes_the_workbook_and_prints_a_summary() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("login.robot"), SUITE).unwrap();

    let mut cmd = Command::cargo_bin("cenario").unwrap();
    cmd.args([
        "--testinput",
        input.path().to_str().unwrap(),
        "--outputdir",
        output.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(contains("Scenarios found: 1").and(contains("Report saved to")));

    let base = input.path().file_name().unwrap().to_str().unwrap();
    let report = output.path().join(format!("cenarios_{}.xlsx", base));
    assert!(report.exists());
}

#[test]
fn empty_tree_exits_cleanly_without_a_report() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("cenario").unwrap();
    cmd.args([
        "--testinput",
        input.path().to_str().unwrap(),
        "--outputdir",
        output.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(contains("No test scenarios found"));

    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn broken_suite_file_warns_but_does_not_abort() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("login.robot"), SUITE).unwrap();
    fs::write(
        input.path().join("quebrado.robot"),
        "*** Test Cases ***\n    [Tags]    orfao\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("cenario").unwrap();
    cmd.args([
        "--testinput",
        input.path().to_str().unwrap(),
        "--outputdir",
        output.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stderr(contains("Warning").and(contains("quebrado.robot")))
        .stdout(contains("Scenarios found: 1"));
}
