//! srt-configure Binary Entry Point
//!
//! Applies the options of an `srt://` URI to a fresh SRT socket and prints
//! what was applied. Without `--library` the run is a dry run.
//!
//! Exit status: 0 when every option was applied and the mode resolved,
//! 2 on usage errors (including a malformed URI), 1 otherwise.

use std::process;

mod args;

use anyhow::Context;
use args::ConfigureArgs;
use clap::Parser;
use frameworks_srt_configure::{run, Backend, RunConfig, RunError, EXIT_FAILURES};
use tracing_subscriber::EnvFilter;

/// Exit status for usage errors, matching clap's own
const EXIT_USAGE: i32 = 2;

fn main() {
    let args = ConfigureArgs::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        process::exit(EXIT_USAGE);
    }

    match execute(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = match e.downcast_ref::<RunError>() {
                Some(RunError::Uri(_)) => EXIT_USAGE,
                _ => EXIT_FAILURES,
            };
            process::exit(code);
        }
    }
}

fn execute(args: ConfigureArgs) -> anyhow::Result<i32> {
    let backend = match (args.library, args.system_library) {
        (Some(path), _) => Backend::Library(path),
        (None, true) => Backend::SystemLibrary,
        (None, false) => Backend::DryRun,
    };

    let config = RunConfig {
        uri: args.uri,
        overrides: args.options,
        passphrase_defaults: args.passphrase_defaults,
        backend,
    };

    let outcome = run(&config).with_context(|| format!("cannot configure `{}`", config.uri))?;
    println!("{}", outcome);
    Ok(outcome.exit_code())
}
