//! Entities Layer: SRT Socket Options
//!
//! Provides the static knowledge needed to configure an SRT socket from a
//! flat mapping of option names to string values.
//!
//! ## Overview
//!
//! The `entities_srt_options` crate is the innermost layer of the SRT
//! configuration engine. It knows which option names exist, which libsrt
//! option each one targets, whether it must be set before or after the
//! connection handshake, and how its textual value is coerced into the
//! binary layout libsrt expects.
//!
//! ## Modules
//!
//! - **[`option_type`](option_type/index.html)**: Value types, connection-phase
//!   bindings and connection modes
//!
//! - **[`descriptor`](descriptor/index.html)**: Option descriptors, symbol maps
//!   and libsrt option identifiers
//!
//! - **[`table`](table/index.html)**: The immutable option descriptor table
//!
//! - **[`value`](value/index.html)**: Typed option values and the value encoder
//!
//! ## Usage
//!
//! ```rust
//! use entities_srt_options::{lookup, OptionValue, OptionBinding};
//!
//! let latency = lookup("latency").unwrap();
//! assert_eq!(latency.binding, OptionBinding::Pre);
//!
//! let value = OptionValue::encode(latency.option_type, b"120", latency.symbols).unwrap();
//! assert_eq!(value, OptionValue::Int32(120));
//! ```
//!
//! ## See Also
//!
//! - [`usecases_srt_configure`](../usecases_srt_configure/index.html): Applies
//!   descriptors to a socket and resolves the connection mode

pub mod descriptor;
pub mod option_type;
pub mod table;
pub mod value;

pub use descriptor::{OptionDescriptor, SocketOptionId, SymbolMap, TRANSTYPE_SYMBOLS};
pub use option_type::{ConnectionMode, OptionBinding, OptionType};
pub use table::{lookup, options, options_with_binding, SRT_OPTIONS};
pub use value::{EncodeError, OptionValue};
