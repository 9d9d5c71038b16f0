//! Mode Module
//!
//! Chooses how the socket establishes its connection from the `mode`
//! option, the destination host and the presence of an `adapter` option.
//!
//! | `mode`                | host      | `adapter` | result     |
//! |-----------------------|-----------|-----------|------------|
//! | `client` / `caller`   | any       | any       | caller     |
//! | `server` / `listener` | any       | any       | listener   |
//! | absent / `default`    | empty     | any       | listener   |
//! | absent / `default`    | non-empty | present   | rendezvous |
//! | absent / `default`    | non-empty | absent    | caller     |
//! | anything else         | any       | any       | failure    |

use entities_srt_options::ConnectionMode;
use thiserror::Error;

use crate::failures::FailureList;
use crate::source::OptionSource;

/// Option key selecting the mode
pub const MODE_KEY: &str = "mode";
/// Option key whose presence selects rendezvous by default
pub const ADAPTER_KEY: &str = "adapter";
/// Mode assumed when `mode` is absent
pub const DEFAULT_MODE: &str = "default";

/// The `mode` option holds an unrecognised token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised connection mode '{0}'")]
pub struct ModeError(pub String);

/// Resolve the connection mode
///
/// # Arguments
///
/// * `options` - User option mapping
/// * `host` - Destination host, empty when none was given
///
/// # Returns
///
/// * `Ok(ConnectionMode)` - Listener, caller or rendezvous
/// * `Err(ModeError)` - The `mode` value is not recognised
pub fn resolve_mode<O>(options: &O, host: &str) -> Result<ConnectionMode, ModeError>
where
    O: OptionSource + ?Sized,
{
    let requested = options.value(MODE_KEY).unwrap_or(DEFAULT_MODE.as_bytes());

    match requested {
        b"client" | b"caller" => Ok(ConnectionMode::Caller),
        b"server" | b"listener" => Ok(ConnectionMode::Listener),
        b"default" => {
            if host.is_empty() {
                Ok(ConnectionMode::Listener)
            } else if options.contains(ADAPTER_KEY) {
                Ok(ConnectionMode::Rendezvous)
            } else {
                Ok(ConnectionMode::Caller)
            }
        }
        other => Err(ModeError(String::from_utf8_lossy(other).into_owned())),
    }
}

/// Resolve the connection mode, recording a failure as `"mode"`
pub fn resolve_mode_into<O>(options: &O, host: &str, failures: &mut FailureList) -> ConnectionMode
where
    O: OptionSource + ?Sized,
{
    match resolve_mode(options, host) {
        Ok(mode) => mode,
        Err(err) => {
            tracing::warn!(error = %err, "connection mode resolution failed");
            failures.push(FailureList::MODE);
            ConnectionMode::Failure
        }
    }
}
