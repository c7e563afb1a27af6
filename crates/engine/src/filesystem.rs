// crates/engine/src/filesystem.rs
use crate::config::{FilterConfig, WalkOptions};
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use linetally_core::{Language, LanguageRegistry};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// A file selected for counting, with the language it was dispatched to.
pub type WalkItem = (PathBuf, Language);

/// 走査対象のルートがすべて存在するか確認する
///
/// # Errors
/// Returns [`EngineError::PathNotFound`] for the first missing root.
pub fn check_roots(options: &WalkOptions) -> Result<()> {
    match options.roots.iter().find(|root| !root.exists()) {
        Some(missing) => Err(EngineError::PathNotFound(missing.clone())),
        None => Ok(()),
    }
}

/// Parallel recursive directory walk.
///
/// Every regular file is dispatched through `registry`; files with a
/// supported (and selected) language are sent on `tx`. Entry-level walk
/// failures go to `err_tx` and the walk continues. Roots are walked one
/// after another, each with exclude globs anchored at that root.
///
/// # Errors
/// Returns an error if the exclude globs cannot be compiled.
pub fn walk_parallel(
    options: &WalkOptions,
    filters: &FilterConfig,
    registry: &LanguageRegistry,
    tx: &Sender<WalkItem>,
    err_tx: &Sender<(PathBuf, EngineError)>,
) -> Result<()> {
    let quit = AtomicBool::new(false);

    for root in &options.roots {
        if quit.load(Ordering::Relaxed) {
            break;
        }
        walk_root(root, options, filters, registry, tx, err_tx, &quit)?;
    }

    Ok(())
}

fn walk_root(
    root: &Path,
    options: &WalkOptions,
    filters: &FilterConfig,
    registry: &LanguageRegistry,
    tx: &Sender<WalkItem>,
    err_tx: &Sender<(PathBuf, EngineError)>,
    quit: &AtomicBool,
) -> Result<()> {
    let mut builder = WalkBuilder::new(root);
    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .git_global(options.git_ignore)
        .git_exclude(options.git_ignore)
        .ignore(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    // Overrides match paths relative to the builder's root, so each root gets its own.
    if !options.exclude.is_empty() {
        let mut ov_builder = OverrideBuilder::new(root);
        for glob in &options.exclude {
            ov_builder.add(&format!("!{glob}"))?;
        }
        builder.overrides(ov_builder.build()?);
    }

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        let err_tx = err_tx.clone();
        Box::new(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let err = EngineError::Walk(err);
                    let path = err.path().unwrap_or_else(|| PathBuf::from("<walk>"));
                    log::debug!("walk error: {err}");
                    return match err_tx.send((path, err)) {
                        Ok(()) => ignore::WalkState::Continue,
                        Err(_) => {
                            quit.store(true, Ordering::Relaxed);
                            ignore::WalkState::Quit
                        }
                    };
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return ignore::WalkState::Continue;
            }

            let path = entry.path();
            let Some(language) = registry.detect(path) else {
                log::debug!("skipping unsupported file {}", path.display());
                return ignore::WalkState::Continue;
            };
            if !filters.allows(language) {
                log::debug!("skipping {} ({language} not selected)", path.display());
                return ignore::WalkState::Continue;
            }

            // The receiver is gone once a strict run has failed.
            match tx.send((path.to_owned(), language)) {
                Ok(()) => ignore::WalkState::Continue,
                Err(_) => {
                    quit.store(true, Ordering::Relaxed);
                    ignore::WalkState::Quit
                }
            }
        })
    });

    Ok(())
}
