use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn list_prints_every_scenario_without_running() {
    let mut cmd = Command::cargo_bin("confreg-tester").unwrap();
    cmd.arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("validation-happy-path"))
        .stdout(predicate::str::contains("browser-conflict-disable"));
}

#[test]
fn logic_mode_passes_against_the_embedded_catalog() {
    let mut cmd = Command::cargo_bin("confreg-tester").unwrap();
    cmd.args(["--mode", "logic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all scenarios passed"));
}

#[test]
fn filter_narrows_the_run() {
    let mut cmd = Command::cargo_bin("confreg-tester").unwrap();
    cmd.args(["--mode", "logic", "--filter", "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog-integrity"))
        .stdout(predicate::str::contains("validation-happy-path").not());
}
