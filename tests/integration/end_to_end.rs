use crate::common::{TempWorkspace, json_report, linetally, table_row};
use predicates::prelude::*;

#[test]
fn shows_help() {
    linetally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("linetally"))
        .stdout(predicate::str::contains("--block-comment-policy"));
}

#[test]
fn shows_version() {
    linetally()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn counts_both_languages_in_table() {
    let ws = TempWorkspace::sample();
    ws.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains(table_row("C/C++", [1, 9, 5, 3, 1])))
        .stdout(predicate::str::contains(table_row("Ruby", [1, 10, 5, 4, 1])))
        .stdout(predicate::str::contains(table_row("SUM", [2, 19, 10, 7, 2])))
        .stderr(predicate::str::is_empty());
}

#[test]
fn language_filter_limits_output() {
    let ws = TempWorkspace::sample();
    ws.cmd()
        .args(["-l", "ruby"])
        .assert()
        .success()
        .stdout(predicate::str::contains(table_row("Ruby", [1, 10, 5, 4, 1])))
        .stdout(predicate::str::contains("C/C++").not())
        .stdout(predicate::str::contains("SUM").not());
}

#[test]
fn explicit_paths_are_combined() {
    let ws = TempWorkspace::sample();
    let report = json_report(ws.cmd().args(["src/main.c", "lib"]));
    assert_eq!(report["total"]["files"], 2);
    assert_eq!(report["total"]["code"], 10);
}

#[test]
fn no_matching_files() {
    let ws = TempWorkspace::new();
    ws.write("README.md", "# nothing to count\n");
    ws.cmd()
        .assert()
        .success()
        .stdout("No matching files found.\n");
}

#[test]
fn special_filenames_are_ruby() {
    let ws = TempWorkspace::new();
    ws.write("Rakefile", "# tasks\ntask :default\n");
    ws.write("Gemfile", "source \"https://rubygems.org\"\n");
    let report = json_report(&mut ws.cmd());
    assert_eq!(report["languages"][0]["language"], "Ruby");
    assert_eq!(report["languages"][0]["files"], 2);
    assert_eq!(report["languages"][0]["comment"], 1);
    assert_eq!(report["languages"][0]["code"], 2);
}

#[test]
fn map_ext_adds_extension() {
    let ws = TempWorkspace::new();
    ws.write("inline.inl", "// helpers\nstatic int x;\n");

    ws.cmd()
        .assert()
        .success()
        .stdout("No matching files found.\n");

    let report = json_report(ws.cmd().args(["--map-ext", "inl=c++"]));
    assert_eq!(report["languages"][0]["language"], "C/C++");
    assert_eq!(report["languages"][0]["comment"], 1);
    assert_eq!(report["languages"][0]["code"], 1);
}

#[test]
fn block_comment_policy_trailing_code() {
    let ws = TempWorkspace::new();
    ws.write("a.c", "/* start\nend */ int x;\n");

    let line_start = json_report(&mut ws.cmd());
    assert_eq!(line_start["total"]["comment"], 2);

    let trailing = json_report(ws.cmd().args(["--block-comment-policy", "trailing-code"]));
    assert_eq!(trailing["total"]["comment"], 1);
    assert_eq!(trailing["total"]["code"], 1);
}

#[test]
fn settings_file_is_applied() {
    let ws = TempWorkspace::sample();
    ws.write("Steepfile", "target :lib\n");
    ws.write("vendor/dep.rb", "puts 1\n");
    ws.write(
        "linetally.yml",
        "filenames:\n  ruby: [Steepfile]\nexclude: [vendor/]\n",
    );

    let report = json_report(ws.cmd().args(["--config", "linetally.yml", "-l", "ruby"]));
    assert_eq!(report["total"]["files"], 2);
    assert_eq!(report["total"]["code"], 6);
}

#[test]
fn exclude_glob() {
    let ws = TempWorkspace::sample();
    let report = json_report(ws.cmd().args(["--exclude", "lib/"]));
    assert_eq!(report["languages"].as_array().unwrap().len(), 1);
    assert_eq!(report["languages"][0]["language"], "C/C++");
}

#[test]
fn hidden_files_need_flag() {
    let ws = TempWorkspace::sample();
    ws.write(".hidden/gen.c", "int g;\n");

    let default = json_report(&mut ws.cmd());
    assert_eq!(default["total"]["files"], 2);

    let hidden = json_report(ws.cmd().arg("--hidden"));
    assert_eq!(hidden["total"]["files"], 3);
}

#[test]
fn read_errors_are_warnings() {
    let ws = TempWorkspace::sample();
    ws.write("lib/bad.rb", b"puts 1\n\xff\xfe\n");

    ws.cmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("bad.rb"))
        .stdout(predicate::str::contains(table_row("Ruby", [1, 10, 5, 4, 1])));
}

#[test]
fn binary_files_are_skipped() {
    let ws = TempWorkspace::sample();
    ws.write("src/blob.c", b"\0\0\0\x01binary");
    let report = json_report(&mut ws.cmd());
    assert_eq!(report["total"]["files"], 2);
}
