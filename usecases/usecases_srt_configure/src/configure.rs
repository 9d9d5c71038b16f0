//! Configure Module
//!
//! The two configuration phases around the transport handshake. Each phase
//! walks the option table in declaration order, applies the options of its
//! binding that appear in the user mapping, and appends the names of those
//! that fail. Keys that match no descriptor are ignored.

use std::collections::HashMap;
use std::hash::BuildHasher;

use entities_srt_options::{options_with_binding, ConnectionMode, OptionBinding};

use crate::apply::try_apply_option;
use crate::failures::FailureList;
use crate::mode::resolve_mode_into;
use crate::setter::{SocketHandle, SocketOptionSetter};
use crate::source::OptionSource;

/// Key length used when a passphrase is given without one
pub const DEFAULT_PBKEYLEN: &str = "16";

/// Apply every option of `binding`; returns true if none failed
fn apply_phase<S, O>(
    setter: &S,
    socket: SocketHandle,
    binding: OptionBinding,
    options: &O,
    failures: &mut FailureList,
) -> bool
where
    S: SocketOptionSetter + ?Sized,
    O: OptionSource + ?Sized,
{
    let mut all_clear = true;
    let mut applied = 0usize;

    for descriptor in options_with_binding(binding) {
        let Some(raw) = options.value(descriptor.name) else {
            continue;
        };
        if try_apply_option(setter, socket, descriptor, raw) {
            applied += 1;
        } else {
            failures.push(descriptor.name);
            all_clear = false;
        }
    }

    tracing::debug!(%socket, phase = %binding, applied, all_clear, "configuration phase finished");
    all_clear
}

/// Resolve the connection mode and apply pre-connection options
///
/// Mode resolution failing does not stop option application, so the
/// failure list is complete either way.
///
/// # Arguments
///
/// * `setter` - Transport library capability
/// * `socket` - Socket to configure
/// * `host` - Destination host, empty when none was given
/// * `options` - User option mapping
/// * `failures` - List the names of failed options are appended to
///
/// # Returns
///
/// The resolved mode, or `ConnectionMode::Failure` if the mode could not be
/// resolved or any pre-connection option failed. The caller must not
/// attempt the handshake on `Failure`.
pub fn configure_pre<S, O>(
    setter: &S,
    socket: SocketHandle,
    host: &str,
    options: &O,
    failures: &mut FailureList,
) -> ConnectionMode
where
    S: SocketOptionSetter + ?Sized,
    O: OptionSource + ?Sized,
{
    let mode = resolve_mode_into(options, host, failures);
    let all_clear = apply_phase(setter, socket, OptionBinding::Pre, options, failures);

    if all_clear {
        tracing::debug!(%socket, %mode, "pre-connection configuration complete");
        mode
    } else {
        ConnectionMode::Failure
    }
}

/// Apply post-connection options
///
/// Failures are recorded but never abort the caller's flow.
pub fn configure_post<S, O>(
    setter: &S,
    socket: SocketHandle,
    options: &O,
    failures: &mut FailureList,
) where
    S: SocketOptionSetter + ?Sized,
    O: OptionSource + ?Sized,
{
    apply_phase(setter, socket, OptionBinding::Post, options, failures);
}

/// Insert `pbkeylen=16` when a passphrase is set without a key length
///
/// Opt-in: the configuration phases never modify the mapping themselves.
///
/// # Returns
///
/// `true` if a default was inserted
pub fn insert_passphrase_defaults<H: BuildHasher>(options: &mut HashMap<String, String, H>) -> bool {
    if options.contains_key("passphrase") && !options.contains_key("pbkeylen") {
        options.insert("pbkeylen".to_string(), DEFAULT_PBKEYLEN.to_string());
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setter::SetOptionError;
    use entities_srt_options::SocketOptionId;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Capture {
        calls: RefCell<Vec<SocketOptionId>>,
    }

    impl SocketOptionSetter for Capture {
        fn set_option(
            &self,
            _socket: SocketHandle,
            option: SocketOptionId,
            _value: &[u8],
        ) -> Result<(), SetOptionError> {
            self.calls.borrow_mut().push(option);
            Ok(())
        }
    }

    fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_pre_applies_only_pre_options_in_table_order() {
        let setter = Capture::default();
        let opts = options(&[
            ("streamid", "abc"),
            ("inputbw", "1000"),
            ("latency", "120"),
            ("maxbw", "-1"),
        ]);
        let mut failures = FailureList::new();

        let mode = configure_pre(&setter, SocketHandle(1), "host", &opts, &mut failures);

        assert_eq!(mode, ConnectionMode::Caller);
        assert!(failures.is_empty());
        assert_eq!(
            *setter.calls.borrow(),
            vec![SocketOptionId::MAXBW, SocketOptionId::LATENCY, SocketOptionId::STREAMID]
        );
    }

    #[test]
    fn test_post_applies_only_post_options() {
        let setter = Capture::default();
        let opts = options(&[("latency", "120"), ("oheadbw", "25"), ("inputbw", "1000")]);
        let mut failures = FailureList::new();

        configure_post(&setter, SocketHandle(1), &opts, &mut failures);

        assert_eq!(
            *setter.calls.borrow(),
            vec![SocketOptionId::INPUTBW, SocketOptionId::OHEADBW]
        );
    }

    #[test]
    fn test_pre_failures_follow_table_order() {
        let setter = Capture::default();
        let opts = options(&[("transtype", "both"), ("tlpktdrop", "maybe"), ("mss", "x")]);
        let mut failures = FailureList::new();

        let mode = configure_pre(&setter, SocketHandle(1), "", &opts, &mut failures);

        assert_eq!(mode, ConnectionMode::Failure);
        assert_eq!(
            failures.iter().collect::<Vec<_>>(),
            vec!["mss", "tlpktdrop", "transtype"]
        );
        assert!(setter.calls.borrow().is_empty());
    }

    #[test]
    fn test_mode_failure_still_applies_options() {
        let setter = Capture::default();
        let opts = options(&[("mode", "bogus"), ("latency", "80")]);
        let mut failures = FailureList::new();

        let mode = configure_pre(&setter, SocketHandle(1), "host", &opts, &mut failures);

        assert_eq!(mode, ConnectionMode::Failure);
        assert_eq!(failures.iter().collect::<Vec<_>>(), vec!["mode"]);
        assert_eq!(*setter.calls.borrow(), vec![SocketOptionId::LATENCY]);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let setter = Capture::default();
        let opts = options(&[("adapter", "0.0.0.0"), ("port", "9000"), ("LATENCY", "x")]);
        let mut failures = FailureList::new();

        let mode = configure_pre(&setter, SocketHandle(1), "host", &opts, &mut failures);

        assert_eq!(mode, ConnectionMode::Rendezvous);
        assert!(failures.is_empty());
        assert!(setter.calls.borrow().is_empty());
    }

    #[test]
    fn test_insert_passphrase_defaults() {
        let mut opts = options(&[("passphrase", "0123456789")]);
        assert!(insert_passphrase_defaults(&mut opts));
        assert_eq!(opts.get("pbkeylen").map(String::as_str), Some("16"));

        let mut explicit = options(&[("passphrase", "0123456789"), ("pbkeylen", "32")]);
        assert!(!insert_passphrase_defaults(&mut explicit));
        assert_eq!(explicit.get("pbkeylen").map(String::as_str), Some("32"));

        let mut none = options(&[]);
        assert!(!insert_passphrase_defaults(&mut none));
        assert!(none.is_empty());
    }
}
