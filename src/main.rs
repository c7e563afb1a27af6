// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use linetally::args::Args;
use linetally::config::Config;
use linetally::error::AppError;
use linetally::presentation;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help / --version も clap のエラーとして返る
            let code = u8::from(e.use_stderr());
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logger(args.behavior.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(&e)
        }
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::try_from(args)?;
    log::debug!(
        "scanning {} root(s) with {} thread(s)",
        config.walk.roots.len(),
        config.walk.threads
    );

    let result = linetally_engine::run(&config)?;
    presentation::write_warnings(&mut io::stderr().lock(), &result.errors)?;
    presentation::print_results(&result, &config)
}
