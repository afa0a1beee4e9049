//! Binary tests. None of them reach the network: each one stops before the
//! request is made.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `weather` with an empty home directory and no key in the environment.
fn weather(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("weather").unwrap();
    cmd.env_remove("OPENWEATHER_API_KEY").env("HOME", home.path());
    cmd
}

#[test]
fn no_arguments_prints_usage() {
    let home = tempfile::tempdir().unwrap();

    weather(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Weather App - Terminal weather information"));
}

#[test]
fn help_flags_print_usage() {
    let home = tempfile::tempdir().unwrap();

    let cases: [&[&str]; 7] = [
        &["--help"],
        &["-h"],
        &["San", "Francisco", "--help"],
        &["-h", "--help"],
        &["London", "-h", "-h"],
        &["--bogus", "--help"],
        &["--", "-h"],
    ];

    for args in cases {
        weather(&home)
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("Weather App - Terminal weather information"))
            .stdout(predicate::str::contains("Error").not());
    }
}

#[test]
fn help_wins_even_when_a_key_is_set() {
    let home = tempfile::tempdir().unwrap();

    weather(&home)
        .env("OPENWEATHER_API_KEY", "KEY")
        .args(["London", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Weather App"));
}

#[test]
fn missing_api_key_prints_two_line_error_and_exits_zero() {
    let home = tempfile::tempdir().unwrap();

    weather(&home).arg("London").assert().success().stdout(
        "Error: OpenWeather API key not found!\n\
         Please set OPENWEATHER_API_KEY environment variable or create a .weather_config file\n",
    );
}

#[test]
fn blank_key_file_counts_as_missing() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join(".weather_config"), "  \n").unwrap();

    weather(&home)
        .arg("London")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: OpenWeather API key not found!"));
}

#[test]
fn unknown_flag_is_reported_without_failing() {
    let home = tempfile::tempdir().unwrap();

    weather(&home)
        .arg("--bogus")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("--bogus"));
}

#[test]
fn logs_stay_off_stdout() {
    let home = tempfile::tempdir().unwrap();

    weather(&home)
        .env("RUST_LOG", "debug")
        .arg("London")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: OpenWeather API key not found!"));
}
