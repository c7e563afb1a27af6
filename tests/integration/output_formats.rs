use crate::common::{TempWorkspace, json_report};
use predicates::prelude::*;

#[test]
fn json_summary() {
    let ws = TempWorkspace::sample();
    let report = json_report(&mut ws.cmd());

    assert_eq!(report["languages"][0]["language"], "C/C++");
    assert_eq!(report["languages"][0]["code"], 5);
    assert_eq!(report["languages"][0]["comment"], 3);
    assert_eq!(report["languages"][0]["blank"], 1);
    assert_eq!(report["languages"][1]["language"], "Ruby");
    assert_eq!(report["languages"][1]["comment"], 4);
    assert_eq!(report["total"]["files"], 2);
    assert!(report.get("files").is_none());
}

#[test]
fn json_by_file() {
    let ws = TempWorkspace::sample();
    let report = json_report(ws.cmd().arg("--by-file"));
    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0]["path"].as_str().unwrap().ends_with("app.rb"));
    assert_eq!(files[0]["code"], 5);
    assert!(files[1]["path"].as_str().unwrap().ends_with("main.c"));
}

#[test]
fn csv_summary() {
    let ws = TempWorkspace::sample();
    ws.cmd()
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(
            "language,files,lines,code,comments,blanks\n\
             C/C++,1,9,5,3,1\n\
             Ruby,1,10,5,4,1\n",
        );
}

#[test]
fn tsv_by_file() {
    let ws = TempWorkspace::sample();
    ws.cmd()
        .args(["--format", "tsv", "--by-file"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "path\tlanguage\tfiles\tlines\tcode\tcomments\tblanks\n",
        ))
        .stdout(predicate::str::contains("main.c\tC/C++\t1\t9\t5\t3\t1"));
}

#[test]
fn yaml_summary() {
    let ws = TempWorkspace::sample();
    ws.cmd()
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("languages:"))
        .stdout(predicate::str::contains("language: Ruby"))
        .stdout(predicate::str::contains("total:"));
}

#[test]
fn table_by_file_lists_paths() {
    let ws = TempWorkspace::sample();
    ws.cmd()
        .arg("--by-file")
        .assert()
        .success()
        .stdout(predicate::str::contains("app.rb"))
        .stdout(predicate::str::contains("main.c"))
        .stdout(predicate::str::contains("SUM"));
}

#[test]
fn empty_json_report() {
    let ws = TempWorkspace::new();
    let report = json_report(&mut ws.cmd());
    assert_eq!(report["languages"], serde_json::json!([]));
    assert_eq!(report["total"]["code"], 0);
}
