//! Descriptor Module
//!
//! Option descriptors bind a user-facing option name to a libsrt option
//! identifier, a connection phase and a value type.

use std::fmt;

use crate::option_type::{OptionBinding, OptionType};

/// libsrt option identifier (`SRT_SOCKOPT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SocketOptionId(pub i32);

impl SocketOptionId {
    pub const MSS: Self = Self(0);
    pub const FC: Self = Self(4);
    pub const SNDBUF: Self = Self(5);
    pub const RCVBUF: Self = Self(6);
    pub const MAXBW: Self = Self(16);
    pub const LATENCY: Self = Self(23);
    /// Alias of `LATENCY` in libsrt
    pub const TSBPDDELAY: Self = Self(23);
    pub const INPUTBW: Self = Self(24);
    pub const OHEADBW: Self = Self(25);
    pub const PASSPHRASE: Self = Self(26);
    pub const PBKEYLEN: Self = Self(27);
    pub const IPTTL: Self = Self(29);
    pub const IPTOS: Self = Self(30);
    pub const TLPKTDROP: Self = Self(31);
    pub const NAKREPORT: Self = Self(33);
    pub const CONNTIMEO: Self = Self(36);
    pub const LOSSMAXTTL: Self = Self(42);
    pub const RCVLATENCY: Self = Self(43);
    pub const PEERLATENCY: Self = Self(44);
    pub const MINVERSION: Self = Self(45);
    pub const STREAMID: Self = Self(46);
    /// Renamed `CONGESTION` in libsrt 1.4
    pub const SMOOTHER: Self = Self(47);
    pub const MESSAGEAPI: Self = Self(48);
    pub const PAYLOADSIZE: Self = Self(49);
    pub const TRANSTYPE: Self = Self(50);
    pub const KMREFRESHRATE: Self = Self(51);
    pub const KMPREANNOUNCE: Self = Self(52);

    /// Raw value passed to `srt_setsockopt`
    pub fn as_raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SocketOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SRTO#{}", self.0)
    }
}

/// Static mapping from symbolic tokens to integer codes
///
/// Entries are integers only; lookups are exact and case-sensitive.
#[derive(Debug, PartialEq, Eq)]
pub struct SymbolMap {
    entries: &'static [(&'static str, i32)],
}

impl SymbolMap {
    /// Create a symbol map over static entries
    pub const fn new(entries: &'static [(&'static str, i32)]) -> Self {
        Self { entries }
    }

    /// Look up the integer code for a token
    pub fn get(&self, token: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, code)| code)
    }

    /// Reverse lookup, used when reporting applied values
    pub fn name_of(&self, code: i32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(_, value)| value == code)
            .map(|&(name, _)| name)
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &'static [(&'static str, i32)] {
        self.entries
    }
}

/// `SRTT_LIVE` / `SRTT_FILE`
pub static TRANSTYPE_SYMBOLS: SymbolMap = SymbolMap::new(&[("live", 0), ("file", 1)]);

/// Describes one recognised option
#[derive(Debug, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Option name as it appears in the user mapping (case-sensitive)
    pub name: &'static str,
    /// libsrt option targeted by this name
    pub id: SocketOptionId,
    /// Phase in which the option is applied
    pub binding: OptionBinding,
    /// How the textual value is coerced
    pub option_type: OptionType,
    /// Symbolic values, only meaningful for `OptionType::Enum`
    pub symbols: Option<&'static SymbolMap>,
    /// Value must never appear in logs or reports
    pub secret: bool,
}

impl OptionDescriptor {
    pub const fn new(
        name: &'static str,
        id: SocketOptionId,
        binding: OptionBinding,
        option_type: OptionType,
    ) -> Self {
        Self {
            name,
            id,
            binding,
            option_type,
            symbols: None,
            secret: false,
        }
    }

    /// Attach a symbol map
    pub const fn with_symbols(mut self, symbols: &'static SymbolMap) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// Mark the value as secret
    pub const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_map_lookup() {
        assert_eq!(TRANSTYPE_SYMBOLS.get("live"), Some(0));
        assert_eq!(TRANSTYPE_SYMBOLS.get("file"), Some(1));
        assert_eq!(TRANSTYPE_SYMBOLS.get("Live"), None);
        assert_eq!(TRANSTYPE_SYMBOLS.get("0"), None);
    }

    #[test]
    fn test_symbol_map_reverse_lookup() {
        assert_eq!(TRANSTYPE_SYMBOLS.name_of(1), Some("file"));
        assert_eq!(TRANSTYPE_SYMBOLS.name_of(7), None);
    }

    #[test]
    fn test_descriptor_with_symbols() {
        let descriptor = OptionDescriptor::new(
            "transtype",
            SocketOptionId::TRANSTYPE,
            OptionBinding::Pre,
            OptionType::Enum,
        )
        .with_symbols(&TRANSTYPE_SYMBOLS);

        assert_eq!(descriptor.symbols, Some(&TRANSTYPE_SYMBOLS));
        assert_eq!(descriptor.id.as_raw(), 50);
    }

    #[test]
    fn test_latency_alias() {
        assert_eq!(SocketOptionId::LATENCY, SocketOptionId::TSBPDDELAY);
    }
}
