//! Option Type Module
//!
//! Small closed enumerations shared by the descriptor table, the value
//! encoder and the configuration use cases.

use std::fmt;

/// How a textual option value is coerced before it reaches libsrt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// UTF-8 text, passed without a terminator
    String,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// Boolean token, passed as a 32-bit 0/1
    Bool,
    /// Symbolic token with an integer fallback, passed as a 32-bit integer
    Enum,
}

impl OptionType {
    /// Name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::String => "string",
            OptionType::Int32 => "int",
            OptionType::Int64 => "int64",
            OptionType::Bool => "bool",
            OptionType::Enum => "enum",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection phase in which an option is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionBinding {
    /// Applied before the transport handshake
    Pre,
    /// Applied after the transport handshake
    Post,
}

impl fmt::Display for OptionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionBinding::Pre => f.write_str("pre"),
            OptionBinding::Post => f.write_str("post"),
        }
    }
}

/// Connection-establishment mode of a socket
///
/// `Failure` is a sentinel: it is never a usable state and tells the caller
/// not to attempt the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionMode {
    /// Mode inference or option application did not fully succeed
    Failure,
    /// Accepts incoming connections
    Listener,
    /// Initiates the connection
    Caller,
    /// Both peers connect to each other simultaneously
    Rendezvous,
}

impl ConnectionMode {
    /// Raw value used by libsrt wrappers (-1 for failure)
    pub fn as_raw(&self) -> i32 {
        match self {
            ConnectionMode::Failure => -1,
            ConnectionMode::Listener => 0,
            ConnectionMode::Caller => 1,
            ConnectionMode::Rendezvous => 2,
        }
    }

    /// Whether the caller may proceed to the handshake
    pub fn is_usable(&self) -> bool {
        *self != ConnectionMode::Failure
    }
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionMode::Failure => "failure",
            ConnectionMode::Listener => "listener",
            ConnectionMode::Caller => "caller",
            ConnectionMode::Rendezvous => "rendezvous",
        };
        f.write_str(name)
    }
}
