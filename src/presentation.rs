// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use linetally_engine::error::EngineError;
use linetally_engine::options::OutputFormat;
use linetally_engine::stats::{FileStats, LanguageSummary, RunResult, Summary};
use linetally_core::LineTally;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

const SEPARATOR_WIDTH: usize = 70;
const SV_COLUMNS: [&str; 6] = ["language", "files", "lines", "code", "comments", "blanks"];

/// json / yaml 出力の最上位構造
#[derive(Serialize)]
struct Report<'a> {
    languages: &'a [LanguageSummary],
    total: LineTally,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [FileStats]>,
}

/// Print the report for `result` to stdout.
///
/// # Errors
/// Returns an error when stdout cannot be written or serialization fails.
pub fn print_results(result: &RunResult, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_results(&mut out, result, config)?;
    out.flush()?;
    Ok(())
}

/// Render the report for `result` in the configured format.
///
/// # Errors
/// Returns an error when `out` cannot be written or serialization fails.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let summary = result.summary();
    let files = config.by_file.then_some(result.stats.as_slice());

    match config.format {
        OutputFormat::Table => write_table(out, &summary, files)?,
        OutputFormat::Csv => write_sv(out, &summary, files, ',')?,
        OutputFormat::Tsv => write_sv(out, &summary, files, '\t')?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report(&summary, files))?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &report(&summary, files))?,
    }
    Ok(())
}

fn report<'a>(summary: &'a Summary, files: Option<&'a [FileStats]>) -> Report<'a> {
    Report {
        languages: &summary.languages,
        total: summary.total,
        files,
    }
}

/// Per-file failures, one `warning:` line each.
///
/// Errors that already name their file are printed as is.
///
/// # Errors
/// Returns an error when `err` cannot be written.
pub fn write_warnings<W: Write>(err: &mut W, errors: &[(PathBuf, EngineError)]) -> io::Result<()> {
    for (path, e) in errors {
        if e.path().is_some() {
            writeln!(err, "warning: {e}")?;
        } else {
            writeln!(err, "warning: {}: {e}", path.display())?;
        }
    }
    Ok(())
}

fn separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

fn write_table<W: Write>(
    out: &mut W,
    summary: &Summary,
    files: Option<&[FileStats]>,
) -> io::Result<()> {
    if summary.is_empty() {
        return writeln!(out, "No matching files found.");
    }

    if let Some(files) = files {
        write_file_table(out, files)?;
        writeln!(out)?;
    }

    separator(out)?;
    writeln!(
        out,
        "{:<10} {:>6} {:>12} {:>12} {:>12} {:>12}",
        "Language", "Files", "Lines", "Code", "Comments", "Blanks"
    )?;
    separator(out)?;
    for row in &summary.languages {
        table_row(out, row.language.name(), &row.tally)?;
    }
    if summary.languages.len() > 1 {
        separator(out)?;
        table_row(out, "SUM", &summary.total)?;
    }
    separator(out)
}

fn table_row<W: Write>(out: &mut W, label: &str, t: &LineTally) -> io::Result<()> {
    writeln!(
        out,
        "{label:<10} {:>6} {:>12} {:>12} {:>12} {:>12}",
        t.files,
        t.total_lines(),
        t.code,
        t.comment,
        t.blank
    )
}

fn write_file_table<W: Write>(out: &mut W, files: &[FileStats]) -> io::Result<()> {
    separator(out)?;
    writeln!(
        out,
        "{:<10} {:>12} {:>12} {:>12} {:>12}  File",
        "Language", "Lines", "Code", "Comments", "Blanks"
    )?;
    separator(out)?;
    for f in files {
        let t = &f.tally;
        writeln!(
            out,
            "{:<10} {:>12} {:>12} {:>12} {:>12}  {}",
            f.language.name(),
            t.total_lines(),
            t.code,
            t.comment,
            t.blank,
            f.path.display()
        )?;
    }
    separator(out)
}

fn write_sv<W: Write>(
    out: &mut W,
    summary: &Summary,
    files: Option<&[FileStats]>,
    delimiter: char,
) -> io::Result<()> {
    let sep = delimiter.to_string();

    if let Some(files) = files {
        writeln!(out, "path{sep}{}", SV_COLUMNS.join(&sep))?;
        for f in files {
            let path = f.path.display().to_string();
            writeln!(
                out,
                "{}{sep}{}",
                escape_field(&path, delimiter),
                sv_values(f.language.name(), &f.tally, &sep)
            )?;
        }
        return Ok(());
    }

    writeln!(out, "{}", SV_COLUMNS.join(&sep))?;
    for row in &summary.languages {
        writeln!(out, "{}", sv_values(row.language.name(), &row.tally, &sep))?;
    }
    Ok(())
}

fn sv_values(language: &str, t: &LineTally, sep: &str) -> String {
    [
        language.to_string(),
        t.files.to_string(),
        t.total_lines().to_string(),
        t.code.to_string(),
        t.comment.to_string(),
        t.blank.to_string(),
    ]
    .join(sep)
}

/// 区切り文字・引用符・改行を含むフィールドだけを引用する
fn escape_field(field: &str, delimiter: char) -> String {
    if field.contains([delimiter, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
