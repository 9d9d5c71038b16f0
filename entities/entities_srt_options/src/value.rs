//! Value Module
//!
//! Typed option values and the encoder that produces them from raw user
//! input. A value stays typed until the external-call boundary, where
//! [`OptionValue::to_bytes`] flattens it to the layout libsrt reads.

use std::fmt;

use thiserror::Error;

use crate::descriptor::SymbolMap;
use crate::option_type::OptionType;

const TRUE_TOKENS: [&str; 4] = ["1", "yes", "on", "true"];
const FALSE_TOKENS: [&str; 4] = ["0", "no", "off", "false"];

/// Reasons a raw value could not be encoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Input is not valid UTF-8
    #[error("value is not valid UTF-8")]
    InvalidUtf8,
    /// Input is not an integer of the required width
    #[error("'{raw}' is not a valid {width}-bit integer")]
    InvalidInteger { raw: String, width: u32 },
    /// Input is not one of the recognised boolean tokens
    #[error("'{0}' is not a boolean token (1/yes/on/true, 0/no/off/false)")]
    InvalidBool(String),
    /// Input matches no symbol and is not an integer
    #[error("'{0}' is neither a known symbol nor an integer")]
    UnknownSymbol(String),
}

/// An encoded option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Int32(i32),
    Int64(i64),
    Bool(bool),
    /// Integer code resolved from a symbol or parsed directly
    Enum(i32),
}

impl OptionValue {
    /// Encode a raw user value according to its option type
    ///
    /// # Arguments
    ///
    /// * `option_type` - Target type of the option
    /// * `raw` - Raw value bytes as supplied by the user
    /// * `symbols` - Symbol map for enum options
    ///
    /// # Returns
    ///
    /// * `Ok(OptionValue)` - Encoded value
    /// * `Err(EncodeError)` - The value cannot be coerced
    pub fn encode(
        option_type: OptionType,
        raw: &[u8],
        symbols: Option<&SymbolMap>,
    ) -> Result<Self, EncodeError> {
        let text = std::str::from_utf8(raw).map_err(|_| EncodeError::InvalidUtf8)?;

        match option_type {
            OptionType::String => Ok(OptionValue::Str(text.to_owned())),
            OptionType::Int32 => parse_i32(text).map(OptionValue::Int32),
            OptionType::Int64 => text
                .parse::<i64>()
                .map(OptionValue::Int64)
                .map_err(|_| EncodeError::InvalidInteger {
                    raw: text.to_owned(),
                    width: 64,
                }),
            OptionType::Bool => {
                if FALSE_TOKENS.contains(&text) {
                    Ok(OptionValue::Bool(false))
                } else if TRUE_TOKENS.contains(&text) {
                    Ok(OptionValue::Bool(true))
                } else {
                    Err(EncodeError::InvalidBool(text.to_owned()))
                }
            }
            OptionType::Enum => {
                if let Some(code) = symbols.and_then(|map| map.get(text)) {
                    return Ok(OptionValue::Enum(code));
                }
                parse_i32(text)
                    .map(OptionValue::Enum)
                    .map_err(|_| EncodeError::UnknownSymbol(text.to_owned()))
            }
        }
    }

    /// Encode a textual value
    pub fn encode_str(
        option_type: OptionType,
        raw: &str,
        symbols: Option<&SymbolMap>,
    ) -> Result<Self, EncodeError> {
        Self::encode(option_type, raw.as_bytes(), symbols)
    }

    /// Type this value was encoded as
    pub fn option_type(&self) -> OptionType {
        match self {
            OptionValue::Str(_) => OptionType::String,
            OptionValue::Int32(_) => OptionType::Int32,
            OptionValue::Int64(_) => OptionType::Int64,
            OptionValue::Bool(_) => OptionType::Bool,
            OptionValue::Enum(_) => OptionType::Enum,
        }
    }

    /// Flatten to the byte layout passed to `srt_setsockopt`
    ///
    /// Integers use native endianness; booleans are a 32-bit 0 or 1; strings
    /// carry no terminator.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            OptionValue::Str(text) => text.as_bytes().to_vec(),
            OptionValue::Int32(v) | OptionValue::Enum(v) => v.to_ne_bytes().to_vec(),
            OptionValue::Int64(v) => v.to_ne_bytes().to_vec(),
            OptionValue::Bool(v) => i32::from(*v).to_ne_bytes().to_vec(),
        }
    }

    /// Rebuild a value from the bytes produced by [`to_bytes`](Self::to_bytes)
    ///
    /// Returns `None` when the length does not match the type's layout.
    pub fn decode(option_type: OptionType, bytes: &[u8]) -> Option<Self> {
        match option_type {
            OptionType::String => String::from_utf8(bytes.to_vec()).ok().map(OptionValue::Str),
            OptionType::Int32 => read_i32(bytes).map(OptionValue::Int32),
            OptionType::Enum => read_i32(bytes).map(OptionValue::Enum),
            OptionType::Bool => read_i32(bytes).map(|v| OptionValue::Bool(v != 0)),
            OptionType::Int64 => {
                let arr: [u8; 8] = bytes.try_into().ok()?;
                Some(OptionValue::Int64(i64::from_ne_bytes(arr)))
            }
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(text) => write!(f, "\"{}\"", text),
            OptionValue::Int32(v) | OptionValue::Enum(v) => write!(f, "{}", v),
            OptionValue::Int64(v) => write!(f, "{}", v),
            OptionValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

fn parse_i32(text: &str) -> Result<i32, EncodeError> {
    text.parse::<i32>().map_err(|_| EncodeError::InvalidInteger {
        raw: text.to_owned(),
        width: 32,
    })
}

fn read_i32(bytes: &[u8]) -> Option<i32> {
    let arr: [u8; 4] = bytes.try_into().ok()?;
    Some(i32::from_ne_bytes(arr))
}
