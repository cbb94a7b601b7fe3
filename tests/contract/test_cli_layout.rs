// Contract test for `radep layout` command

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_radep_layout_defaults_to_release() {
    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.arg("layout");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("build/Release"))
        .stdout(predicate::str::contains("build/Release/generators"))
        .stdout(predicate::str::contains("build/Release/deploy"));
}

#[test]
fn test_radep_layout_json() {
    let mut cmd = Command::cargo_bin("radep").unwrap();
    let output = cmd
        .arg("layout")
        .arg("--build-type")
        .arg("Debug")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["status"], "success");
    assert_eq!(response["build_type"], "Debug");
    assert_eq!(response["build_folder"], "build/Debug");
    assert_eq!(response["deploy_folder"], "build/Debug/deploy");
}

#[test]
fn test_radep_layout_rejects_unknown_build_type() {
    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.arg("layout").arg("--build-type").arg("Turbo");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown build type"));
}
