use crate::common::{TempWorkspace, linetally};
use predicates::prelude::*;

#[test]
fn unknown_flag_is_usage_error() {
    linetally().arg("--bogus").assert().code(1);
}

#[test]
fn invalid_jobs_is_usage_error() {
    linetally().args(["--jobs", "0"]).assert().code(1);
}

#[test]
fn unsupported_language() {
    let ws = TempWorkspace::sample();
    ws.cmd()
        .args(["-l", "python"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported language 'python'"));
}

#[test]
fn unsupported_language_in_map_ext() {
    let ws = TempWorkspace::sample();
    ws.cmd().args(["--map-ext", "inl=go"]).assert().code(2);
}

#[test]
fn missing_path() {
    let ws = TempWorkspace::sample();
    ws.cmd()
        .arg("does-not-exist")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn strict_mode_fails_on_read_error() {
    let ws = TempWorkspace::sample();
    ws.write("lib/bad.rb", b"puts 1\n\xff\xfe\n");
    ws.cmd()
        .arg("--strict")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn malformed_settings_file() {
    let ws = TempWorkspace::sample();
    ws.write("bad.yml", "unknown_key: 1\n");
    ws.cmd()
        .args(["--config", "bad.yml"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("bad.yml"));
}

#[test]
fn missing_settings_file() {
    let ws = TempWorkspace::sample();
    ws.cmd().args(["--config", "nope.yml"]).assert().code(5);
}
