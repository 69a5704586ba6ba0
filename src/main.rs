mod run;

use anyhow::Result;
use budgetplan::Config;
use clap::Parser;
use log::{debug, error, trace, LevelFilter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = run::Args::parse();
    let log_level = args.common.log_level;
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: &run::Args) -> Result<()> {
    trace!("{args:?}");
    let config = Config::load(args.common.config.as_deref())?;
    debug!("{config:?}");
    run::as_cli(args, &config)
}

/// RUST_LOG takes precedence over `--log-level` when it is set.
fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
