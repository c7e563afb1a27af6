//! テストフィクスチャ管理

use assert_cmd::Command;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const MAIN_C: &str = r#"#include <stdio.h>
// entry point

/* block
   comment */
int main(void) {
    printf("// not a comment");
    return 0; /* trailing */
}
"#;

pub const APP_RB: &str = "#!/usr/bin/env ruby
# frozen_string_literal: true

=begin
docs
=end
text = <<~END
  # not a comment
END
puts text # trailing
";

/// 一時ディレクトリ管理
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// `src/main.c`, `lib/app.rb` と対象外の `README.md`
    pub fn sample() -> Self {
        let ws = Self::new();
        ws.write("src/main.c", MAIN_C);
        ws.write("lib/app.rb", APP_RB);
        ws.write("README.md", "# linetally\n");
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Command running in the workspace root.
    pub fn cmd(&self) -> Command {
        let mut cmd = linetally();
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }
}

pub fn linetally() -> Command {
    Command::new(env!("CARGO_BIN_EXE_linetally"))
}

/// Run with `--format json` and parse stdout.
#[allow(dead_code)]
pub fn json_report(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.args(["--format", "json"]).output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Table row as printed for a language or the SUM line.
#[allow(dead_code)]
pub fn table_row(label: &str, values: [usize; 5]) -> String {
    let [files, lines, code, comments, blanks] = values;
    format!("{label:<10} {files:>6} {lines:>12} {code:>12} {comments:>12} {blanks:>12}")
}
