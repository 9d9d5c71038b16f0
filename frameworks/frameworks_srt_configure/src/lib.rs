//! Frameworks Layer: srt-configure
//!
//! Command-line front end for the SRT configuration engine. Reads an
//! `srt://` URI, runs both configuration phases against libsrt or a
//! recording setter, and reports the outcome.
//!
//! ## Overview
//!
//! A run goes through these steps:
//!
//! 1. Parse the URI into a host and option mapping ([`uri`])
//! 2. Merge `-o KEY=VALUE` overrides, optionally add passphrase defaults
//! 3. Run the pre-connection phase
//! 4. Run the post-connection phase, unless the pre phase failed. The
//!    handshake itself is left to the application using the socket.
//! 5. Build an [`Outcome`] for printing ([`report`])
//!
//! ## Modules
//!
//! - **[`uri`](uri/index.html)**: SRT URI parsing
//!
//! - **[`report`](report/index.html)**: Run outcome and its printed form
//!
//! ## See Also
//!
//! - [`usecases_srt_configure`](../usecases_srt_configure/index.html): Configuration phases
//! - [`adapters_socket`](../adapters_socket/index.html): libsrt and recording setters

pub mod report;
pub mod uri;

use std::collections::HashMap;
use std::path::PathBuf;

use adapters_socket::{LibSrt, LibSrtError, RecordingSetter, SocketOptionSetter};
use thiserror::Error;
use usecases_srt_configure::{
    configure_post, configure_pre, insert_passphrase_defaults, FailureList, SocketHandle,
};

pub use report::{applied_options, AppliedOption, Outcome, EXIT_FAILURES, EXIT_OK};
pub use uri::{parse_srt_uri, SrtTarget, UriError};

/// Socket handle used for dry runs
pub const DRY_RUN_SOCKET: SocketHandle = SocketHandle(0);

/// Where the options are sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Record the options without a transport library
    DryRun,
    /// libsrt found by its platform library name
    SystemLibrary,
    /// libsrt loaded from a path
    Library(PathBuf),
}

/// What to configure and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub uri: String,
    /// Applied over the URI query, later entries win
    pub overrides: Vec<(String, String)>,
    pub passphrase_defaults: bool,
    pub backend: Backend,
}

/// Errors that stop a run before any option is applied
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Uri(#[from] UriError),
    #[error(transparent)]
    Library(#[from] LibSrtError),
}

/// Build the option mapping for a run
pub fn collect_options(
    target: &mut SrtTarget,
    overrides: &[(String, String)],
    passphrase_defaults: bool,
) -> HashMap<String, String> {
    let mut options = std::mem::take(&mut target.options);
    options.extend(overrides.iter().cloned());

    if passphrase_defaults && insert_passphrase_defaults(&mut options) {
        tracing::debug!("pbkeylen defaulted for passphrase");
    }
    options
}

/// Run both configuration phases on one socket
///
/// # Arguments
///
/// * `setter` - Transport library capability
/// * `socket` - Socket to configure
/// * `backend` - Name shown in the report
/// * `target` - Destination; its options are ignored in favour of `options`
/// * `options` - Option mapping
///
/// # Returns
///
/// The outcome of the pass. Post-connection options are skipped when the
/// pre-connection phase returned `ConnectionMode::Failure`.
pub fn configure_socket<S>(
    setter: &S,
    socket: SocketHandle,
    backend: &'static str,
    target: &SrtTarget,
    options: &HashMap<String, String>,
) -> Outcome
where
    S: SocketOptionSetter + ?Sized,
{
    let mut failures = FailureList::new();

    let mode = configure_pre(setter, socket, &target.host, options, &mut failures);
    let post_ran = mode.is_usable();
    if post_ran {
        configure_post(setter, socket, options, &mut failures);
    } else {
        tracing::warn!(%socket, %failures, "pre-connection configuration failed; post-connection options skipped");
    }

    Outcome {
        backend,
        host: target.host.clone(),
        port: target.port,
        mode,
        applied: applied_options(options, &failures, post_ran),
        failures,
        post_ran,
    }
}

/// Parse the URI and configure a socket with the selected backend
pub fn run(config: &RunConfig) -> Result<Outcome, RunError> {
    let mut target = parse_srt_uri(&config.uri)?;
    let options = collect_options(&mut target, &config.overrides, config.passphrase_defaults);
    tracing::debug!(host = %target.host, port = ?target.port, count = options.len(), "options collected");

    let libsrt = match &config.backend {
        Backend::DryRun => {
            let setter = RecordingSetter::new();
            let outcome = configure_socket(&setter, DRY_RUN_SOCKET, "dry-run", &target, &options);
            tracing::debug!(calls = setter.len(), "dry run recorded");
            return Ok(outcome);
        }
        Backend::SystemLibrary => LibSrt::load_default()?,
        Backend::Library(path) => LibSrt::load(path)?,
    };

    let socket = libsrt.create_socket()?;
    let outcome = configure_socket(&libsrt, socket, "libsrt", &target, &options);
    if let Err(e) = libsrt.close(socket) {
        tracing::warn!(error = %e, "socket close failed");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use entities_srt_options::ConnectionMode;

    use super::*;

    fn dry_run(uri: &str) -> RunConfig {
        RunConfig {
            uri: uri.to_string(),
            overrides: Vec::new(),
            passphrase_defaults: false,
            backend: Backend::DryRun,
        }
    }

    #[test]
    fn test_collect_options_overrides_win() {
        let mut target = parse_srt_uri("srt://host:9000?latency=100&fc=25600").unwrap();
        let overrides = vec![("latency".to_string(), "300".to_string())];

        let options = collect_options(&mut target, &overrides, false);

        assert_eq!(options.get("latency").map(String::as_str), Some("300"));
        assert_eq!(options.get("fc").map(String::as_str), Some("25600"));
        assert!(target.options.is_empty());
    }

    #[test]
    fn test_collect_options_passphrase_defaults() {
        let mut target = parse_srt_uri("srt://:9000?passphrase=supersecretphrase").unwrap();

        let options = collect_options(&mut target, &[], true);

        assert_eq!(options.get("pbkeylen").map(String::as_str), Some("16"));
    }

    #[test]
    fn test_dry_run_listener() {
        let outcome = run(&dry_run("srt://:9000?latency=120&inputbw=0")).unwrap();

        assert_eq!(outcome.mode, ConnectionMode::Listener);
        assert_eq!(outcome.exit_code(), EXIT_OK);
        assert!(outcome.post_ran);
        assert_eq!(
            outcome.applied.iter().map(|a| a.name).collect::<Vec<_>>(),
            vec!["latency", "inputbw"]
        );
    }

    #[test]
    fn test_dry_run_failure_skips_post() {
        let outcome = run(&dry_run("srt://host:9000?mode=bogus&oheadbw=25")).unwrap();

        assert_eq!(outcome.mode, ConnectionMode::Failure);
        assert!(!outcome.post_ran);
        assert_eq!(outcome.failures.iter().collect::<Vec<_>>(), vec!["mode"]);
        assert_eq!(outcome.exit_code(), EXIT_FAILURES);
    }

    #[test]
    fn test_bad_uri() {
        let result = run(&dry_run("http://host"));
        assert!(matches!(result, Err(RunError::Uri(UriError::UnsupportedScheme(_)))));
    }

    #[test]
    fn test_missing_library() {
        let mut config = dry_run("srt://:9000");
        config.backend = Backend::Library(PathBuf::from("/nonexistent/libsrt.so"));

        let result = run(&config);
        assert!(matches!(
            result,
            Err(RunError::Library(LibSrtError::LibraryNotFound(_)))
        ));
    }
}
