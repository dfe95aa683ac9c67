//! Startup behaviour of the `restaurant-finder` binary.

use std::process::{Command, Output};

use restaurant_finder::app::EXIT_NO_CREDENTIAL;
use restaurant_finder::config::API_KEY_VAR;

fn finder_binary(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_restaurant-finder"));
    cmd.current_dir(dir.path())
        .env_remove(API_KEY_VAR)
        .env("RUST_LOG", "off");
    cmd
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn missing_api_key_exits_with_config_status() {
    let dir = tempfile::tempdir().unwrap();

    let output = finder_binary(&dir)
        .args(["--zipcode", "10001", "--radius", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(i32::from(EXIT_NO_CREDENTIAL)));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("API key not found"), "stdout was: {stdout}");
    assert!(!stdout.contains("Searching for open restaurants"));
    assert!(!dir.path().join("results.json").exists());
}

#[test]
fn blank_api_key_counts_as_missing() {
    let dir = tempfile::tempdir().unwrap();

    let output = finder_binary(&dir)
        .env(API_KEY_VAR, "   ")
        .args(["--zipcode", "10001", "--radius", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(i32::from(EXIT_NO_CREDENTIAL)));
}

#[test]
fn missing_arguments_are_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = finder_binary(&dir).args(["--radius", "1"]).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}
