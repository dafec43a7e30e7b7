use assert_cmd::prelude::*;
use httpmock::{Method::POST, MockServer};
use predicates::prelude::*;
use std::process::Command;

fn bin() -> Command {
    Command::cargo_bin("check-face-rate").unwrap()
}

#[test]
fn missing_option_exits_warning_without_network_call() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(POST).path("/account/limits.json");
        then.status(200);
    });

    bin()
        .env("FACE_API_URL", server.base_url())
        .args(["--key", "k", "--crit", "10"])
        .assert()
        .code(1)
        .stdout("option \"secret\" not set or empty\n");
    m.assert_hits(0);
}

#[test]
fn no_arguments_at_all_exits_warning() {
    bin()
        .assert()
        .code(1)
        .stdout("option \"key\" not set or empty\n");
}

#[test]
fn empty_option_value_exits_warning() {
    bin()
        .args(["--key", "k", "--secret", "", "--crit", "10"])
        .assert()
        .code(1)
        .stdout("option \"secret\" not set or empty\n");
}

#[test]
fn non_numeric_crit_exits_warning() {
    bin()
        .args(["--key", "k", "--secret", "s", "--crit", "lots"])
        .assert()
        .code(1)
        .stdout("invalid value for option \"crit\"\n");
}

#[test]
fn version_flag_prints_and_exits_ok() {
    bin()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("check-face-rate "));
}
