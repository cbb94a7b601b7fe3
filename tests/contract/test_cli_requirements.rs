// Contract test for `radep requirements` command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const RECIPE: &str = r#"
[recipe]
name = "paint-app"
version = "1.0.0"

[[requires]]
ref = "sdl@3.4.0"
except-os = ["emscripten"]

[requires.platform.linux]
x11 = true
wayland = false

[[requires]]
ref = "zstd@1.5.7"

[[tool-requires]]
ref = "cmake@3.27.0"
"#;

fn project_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("recipe.toml"), RECIPE).unwrap();
    temp_dir
}

#[test]
fn test_radep_requirements_linux() {
    let temp_dir = project_dir();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("requirements")
        .arg("--os")
        .arg("linux");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("paint-app@1.0.0"))
        .stdout(predicate::str::contains("sdl@3.4.0"))
        .stdout(predicate::str::contains("x11 = true"))
        .stdout(predicate::str::contains("zstd@1.5.7"))
        .stdout(predicate::str::contains("cmake@3.27.0"));
}

#[test]
fn test_radep_requirements_respects_exclusions() {
    let temp_dir = project_dir();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("requirements")
        .arg("--os")
        .arg("emscripten");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("zstd@1.5.7"))
        .stdout(predicate::str::contains("sdl@3.4.0").not());
}

#[test]
fn test_radep_requirements_json() {
    let temp_dir = project_dir();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    let output = cmd
        .current_dir(temp_dir.path())
        .arg("requirements")
        .arg("--os")
        .arg("linux")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["status"], "success");
    assert_eq!(response["os"], "linux");
    assert_eq!(response["project"], "paint-app@1.0.0");

    let requirements = response["requirements"].as_array().unwrap();
    assert_eq!(requirements.len(), 2);
    assert_eq!(requirements[0]["package"], "sdl@3.4.0");
    assert_eq!(requirements[0]["options"]["x11"], true);

    let tools = response["tool_requirements"].as_array().unwrap();
    assert_eq!(tools[0], "cmake@3.27.0");
}

#[test]
fn test_radep_requirements_unknown_os() {
    let temp_dir = project_dir();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("requirements")
        .arg("--os")
        .arg("plan9");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown target OS"));
}

#[test]
fn test_radep_requirements_without_recipe() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("radep").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("requirements")
        .arg("--os")
        .arg("linux");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Recipe file not found"));
}
