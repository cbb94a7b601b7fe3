// Contract test for `radep init` command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_radep_init_creates_recipe() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("init")
        .arg("--name")
        .arg("paint-app");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created recipe.toml"))
        .stdout(predicate::str::contains("paint-app"));

    let recipe_path = temp_dir.path().join("recipe.toml");
    assert!(recipe_path.exists(), "recipe.toml should be created");

    let content = fs::read_to_string(&recipe_path).unwrap();
    assert!(content.contains("name = \"paint-app\""));
    assert!(content.contains("layout = \"standard\""));
}

#[test]
fn test_radep_init_refuses_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("recipe.toml"), "existing").unwrap();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("init")
        .arg("--name")
        .arg("paint-app");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // the existing file is untouched
    let content = fs::read_to_string(temp_dir.path().join("recipe.toml")).unwrap();
    assert_eq!(content, "existing");
}

#[test]
fn test_radep_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("recipe.toml"), "existing").unwrap();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("init")
        .arg("--name")
        .arg("paint-app")
        .arg("--force");

    cmd.assert().success();

    let content = fs::read_to_string(temp_dir.path().join("recipe.toml")).unwrap();
    assert!(content.contains("name = \"paint-app\""));
}

#[test]
fn test_radep_init_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    let output = cmd
        .current_dir(temp_dir.path())
        .arg("init")
        .arg("--name")
        .arg("paint-app")
        .arg("--version")
        .arg("2.0.0")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["status"], "success");
    assert_eq!(response["project_name"], "paint-app");
    assert_eq!(response["project_version"], "2.0.0");
}

#[test]
fn test_radep_init_rejects_invalid_name() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("init")
        .arg("--name")
        .arg("bad name!");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"));
}
