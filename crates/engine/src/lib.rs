// crates/engine/src/lib.rs
//! File walking and per-file tallying for linetally.
//!
//! [`run`] walks the configured roots on a background thread, dispatches
//! each file to a language, and scans the files in parallel. Every file is
//! handled by its own freshly built classifier.

use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{FileStats, RunResult};

/// Run the line tallying engine.
///
/// Returns a `RunResult` containing both successfully processed file statistics
/// and any errors encountered during processing. Results are sorted by path.
///
/// # Errors
///
/// Returns an error when a root does not exist, when the walk cannot be set
/// up, or (in strict mode) on the first file that fails.
pub fn run(config: &Config) -> Result<RunResult> {
    filesystem::check_roots(&config.walk)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.walk.threads)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))?;

    let (tx, rx) = crossbeam_channel::bounded(1024);
    let (err_tx, err_rx) = crossbeam_channel::unbounded();
    let (fatal_tx, fatal_rx) = crossbeam_channel::bounded(1);

    let walk_cfg = config.walk.clone();
    let filter_cfg = config.filter.clone();
    let registry = config.registry.clone();

    let walker = std::thread::spawn(move || {
        if let Err(e) =
            filesystem::walk_parallel(&walk_cfg, &filter_cfg, &registry, &tx, &err_tx)
        {
            let _ = fatal_tx.send(e);
        }
    });

    let outcome = pool.install(|| collect_results(rx, config));

    if walker.join().is_err() {
        return Err(EngineError::Config("walker thread panicked".to_string()));
    }
    if let Ok(walk_err) = fatal_rx.try_recv() {
        return Err(walk_err);
    }

    let mut result = outcome?;

    // Entry-level walk errors from the background thread
    for (path, err) in err_rx.try_iter() {
        if config.strict {
            return Err(err);
        }
        result.errors.push((path, err));
    }

    for (path, err) in &result.errors {
        log::debug!("{}: {err}", path.display());
    }

    result.stats.sort_by(|a, b| a.path.cmp(&b.path));
    result.errors.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(result)
}

fn collect_results(
    rx: crossbeam_channel::Receiver<filesystem::WalkItem>,
    config: &Config,
) -> Result<RunResult> {
    let iter = rx.into_iter().par_bridge();

    if config.strict {
        // Strict mode: fail on first error
        let stats = iter
            .map(|item| processor::process_file(item, config))
            .filter_map(Result::transpose)
            .collect::<Result<Vec<_>>>()?;
        return Ok(RunResult {
            stats,
            errors: Vec::new(),
        });
    }

    // Non-strict mode: collect errors alongside successful results
    let (stats, errors): (Vec<Option<FileStats>>, Vec<(PathBuf, EngineError)>) = iter
        .map(|item| {
            let path = item.0.clone();
            processor::process_file(item, config).map_err(|e| (path, e))
        })
        .partition_map(|r| match r {
            Ok(stats) => rayon::iter::Either::Left(stats),
            Err(e) => rayon::iter::Either::Right(e),
        });

    Ok(RunResult {
        stats: stats.into_iter().flatten().collect(),
        errors,
    })
}
