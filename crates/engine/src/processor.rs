// crates/engine/src/processor.rs
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::WalkItem;
use crate::stats::FileStats;
use linetally_core::counter::{BINARY_SNIFF_LEN, is_binary};
use linetally_core::{Language, LineTally, try_tally_lines};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

/// Process a single file and return its statistics.
///
/// Returns `Ok(None)` for binary files, which are skipped.
///
/// # Errors
/// Returns [`EngineError::FileRead`] when the file cannot be opened or read,
/// including when it is not valid UTF-8.
pub fn process_file((path, language): WalkItem, config: &Config) -> Result<Option<FileStats>> {
    let read_err = |source| EngineError::FileRead {
        path: path.clone(),
        source,
    };

    let file = File::open(&path).map_err(read_err)?;
    let mut reader = BufReader::with_capacity(BINARY_SNIFF_LEN, file);

    // Binary check (Initial buffer check)
    if sniff_binary(&mut reader).map_err(read_err)? {
        log::debug!("skipping binary file {}", path.display());
        return Ok(None);
    }

    let tally = count_reader(reader, language, config).map_err(read_err)?;
    log::debug!(
        "{}: {language} code={} comment={} blank={}",
        path.display(),
        tally.code,
        tally.comment,
        tally.blank
    );
    Ok(Some(FileStats::new(path, language, tally)))
}

/// 行単位で読み込み、言語ごとの分類器で集計する
///
/// # Errors
/// Propagates I/O errors from the reader; invalid UTF-8 surfaces as
/// `InvalidData`.
pub fn count_reader<R: BufRead>(
    reader: R,
    language: Language,
    config: &Config,
) -> std::io::Result<LineTally> {
    let mut classifier = language.classifier(config.classifier);
    try_tally_lines(reader.lines(), &mut classifier)
}

/// Looks at up to the first 8 KiB without consuming them.
fn sniff_binary<R: Read>(reader: &mut BufReader<R>) -> std::io::Result<bool> {
    let buffer = reader.fill_buf()?;
    Ok(is_binary(buffer))
}
