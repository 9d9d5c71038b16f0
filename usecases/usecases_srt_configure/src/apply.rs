//! Apply Module
//!
//! Applies a single option: encode the raw value with the descriptor's type,
//! then hand the flattened bytes to the setter. Encoding failures never reach
//! the setter.

use entities_srt_options::{EncodeError, OptionDescriptor, OptionValue};
use thiserror::Error;

use crate::setter::{SetOptionError, SocketHandle, SocketOptionSetter};

/// Why an option could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// The value could not be coerced to the option's type
    #[error("cannot encode value: {0}")]
    Encode(#[from] EncodeError),
    /// The transport library rejected the encoded value
    #[error(transparent)]
    Rejected(#[from] SetOptionError),
}

/// Apply one option to a socket
///
/// # Arguments
///
/// * `setter` - Transport library capability
/// * `socket` - Target socket
/// * `descriptor` - Descriptor of the option
/// * `raw` - Raw user value
///
/// # Returns
///
/// * `Ok(OptionValue)` - The value that was set
/// * `Err(ApplyError)` - Encoding failed or the library refused the value
pub fn apply_option<S>(
    setter: &S,
    socket: SocketHandle,
    descriptor: &OptionDescriptor,
    raw: &[u8],
) -> Result<OptionValue, ApplyError>
where
    S: SocketOptionSetter + ?Sized,
{
    let value = OptionValue::encode(descriptor.option_type, raw, descriptor.symbols)?;
    setter.set_option(socket, descriptor.id, &value.to_bytes())?;

    if descriptor.secret {
        tracing::debug!(option = descriptor.name, %socket, "applied socket option");
    } else {
        tracing::debug!(option = descriptor.name, %socket, %value, "applied socket option");
    }
    Ok(value)
}

/// Apply one option, reporting only success or failure
///
/// The cause of a failure is logged and then discarded.
pub fn try_apply_option<S>(
    setter: &S,
    socket: SocketHandle,
    descriptor: &OptionDescriptor,
    raw: &[u8],
) -> bool
where
    S: SocketOptionSetter + ?Sized,
{
    match apply_option(setter, socket, descriptor, raw) {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(option = descriptor.name, %socket, error = %err, "failed to apply socket option");
            false
        }
    }
}
