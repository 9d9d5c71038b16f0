//! Report Module
//!
//! Summary of a configuration pass, printed by `srt-configure`.

use std::fmt;

use entities_srt_options::{options_with_binding, ConnectionMode, OptionBinding, OptionDescriptor, OptionValue};
use usecases_srt_configure::{FailureList, OptionSource};

/// Shown in place of secret values
pub const REDACTED: &str = "<redacted>";

/// Exit status for a clean pass
pub const EXIT_OK: i32 = 0;
/// Exit status when the mode failed or any option was rejected
pub const EXIT_FAILURES: i32 = 1;

/// One option that was applied successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOption {
    pub name: &'static str,
    pub binding: OptionBinding,
    /// Display form of the value, redacted for secret options
    pub value: String,
}

impl AppliedOption {
    fn describe(descriptor: &'static OptionDescriptor, raw: &[u8]) -> Option<Self> {
        let value = OptionValue::encode(descriptor.option_type, raw, descriptor.symbols).ok()?;
        let value = if descriptor.secret {
            REDACTED.to_string()
        } else {
            match (value, descriptor.symbols) {
                (OptionValue::Enum(code), Some(symbols)) => match symbols.name_of(code) {
                    Some(symbol) => format!("{} ({})", symbol, code),
                    None => code.to_string(),
                },
                (value, _) => value.to_string(),
            }
        };

        Some(Self {
            name: descriptor.name,
            binding: descriptor.binding,
            value,
        })
    }
}

/// Collect the options of a pass that were applied without failure
///
/// Pre-connection options come first. Post-connection options are only
/// listed when `post_ran` is set.
pub fn applied_options<O>(options_in: &O, failures: &FailureList, post_ran: bool) -> Vec<AppliedOption>
where
    O: OptionSource + ?Sized,
{
    let post = options_with_binding(OptionBinding::Post).filter(|_| post_ran);

    options_with_binding(OptionBinding::Pre)
        .chain(post)
        .filter(|descriptor| !failures.contains(descriptor.name))
        .filter_map(|descriptor| {
            let raw = options_in.value(descriptor.name)?;
            AppliedOption::describe(descriptor, raw)
        })
        .collect()
}

/// Result of one `srt-configure` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Which setter received the options ("libsrt" or "dry-run")
    pub backend: &'static str,
    pub host: String,
    pub port: Option<u16>,
    pub mode: ConnectionMode,
    pub applied: Vec<AppliedOption>,
    pub failures: FailureList,
    /// False when the pre-connection phase failed and post options were skipped
    pub post_ran: bool,
}

impl Outcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.mode.is_usable() && self.failures.is_empty() {
            EXIT_OK
        } else {
            EXIT_FAILURES
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = if self.host.is_empty() { "*" } else { &self.host };
        match self.port {
            Some(port) => writeln!(f, "target:   {}:{} ({})", host, port, self.backend)?,
            None => writeln!(f, "target:   {} ({})", host, self.backend)?,
        }
        writeln!(f, "mode:     {}", self.mode)?;

        writeln!(f, "applied:")?;
        if self.applied.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for option in &self.applied {
            writeln!(f, "  {:<14} {:<5} {}", option.name, option.binding.to_string(), option.value)?;
        }
        if !self.post_ran {
            writeln!(f, "  (post-connection options skipped)")?;
        }

        if self.failures.is_empty() {
            write!(f, "failures: none")
        } else {
            write!(f, "failures: {}", self.failures)
        }
    }
}
