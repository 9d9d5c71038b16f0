//! Setter Module
//!
//! The capability this crate needs from the transport library: setting one
//! option on one socket from a raw byte buffer. Adapters implement
//! [`SocketOptionSetter`] for libsrt and for in-memory recording.

use std::fmt;

use entities_srt_options::SocketOptionId;
use thiserror::Error;

/// libsrt socket handle (`SRTSOCKET`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SocketHandle(pub i32);

impl SocketHandle {
    /// `SRT_INVALID_SOCK`
    pub const INVALID: Self = Self(-1);

    pub fn as_raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SocketHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// The transport library refused an option
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{option} rejected on socket {socket}: {reason}")]
pub struct SetOptionError {
    pub socket: SocketHandle,
    pub option: SocketOptionId,
    /// Library error text, if the library reported one
    pub reason: String,
}

impl SetOptionError {
    pub fn new(socket: SocketHandle, option: SocketOptionId, reason: impl Into<String>) -> Self {
        Self {
            socket,
            option,
            reason: reason.into(),
        }
    }
}

/// Sets a socket option from its flattened byte representation
pub trait SocketOptionSetter {
    /// Set `option` on `socket`
    ///
    /// # Arguments
    ///
    /// * `socket` - Target socket
    /// * `option` - libsrt option identifier
    /// * `value` - Value bytes in the layout the library expects
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The library accepted the value
    /// * `Err(SetOptionError)` - The library rejected the value
    fn set_option(
        &self,
        socket: SocketHandle,
        option: SocketOptionId,
        value: &[u8],
    ) -> Result<(), SetOptionError>;
}

impl<T: SocketOptionSetter + ?Sized> SocketOptionSetter for &T {
    fn set_option(
        &self,
        socket: SocketHandle,
        option: SocketOptionId,
        value: &[u8],
    ) -> Result<(), SetOptionError> {
        (**self).set_option(socket, option, value)
    }
}

impl<T: SocketOptionSetter + ?Sized> SocketOptionSetter for Box<T> {
    fn set_option(
        &self,
        socket: SocketHandle,
        option: SocketOptionId,
        value: &[u8],
    ) -> Result<(), SetOptionError> {
        (**self).set_option(socket, option, value)
    }
}
