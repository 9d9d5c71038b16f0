//! Use Cases Layer: SRT Socket Configuration
//!
//! Applies a user option mapping to an SRT socket in two phases around the
//! transport handshake, and decides which connection mode the socket uses.
//!
//! ## Overview
//!
//! A configuration pass looks like this:
//!
//! 1. [`configure_pre`] resolves the connection mode and applies every
//!    pre-connection option. A returned [`ConnectionMode::Failure`] means the
//!    caller must not attempt the handshake.
//! 2. The caller performs the handshake with the transport library.
//! 3. [`configure_post`] applies post-connection options on a best-effort
//!    basis.
//!
//! Both phases append the names of failed options to a caller-owned
//! [`FailureList`]; an unresolvable mode is recorded as `"mode"`.
//!
//! ## Modules
//!
//! - **[`setter`](setter/index.html)**: The transport library capability
//!   ([`SocketOptionSetter`]) and socket handles
//!
//! - **[`source`](source/index.html)**: Read access to the user option mapping
//!
//! - **[`apply`](apply/index.html)**: Applying a single option
//!
//! - **[`mode`](mode/index.html)**: Connection mode resolution
//!
//! - **[`configure`](configure/index.html)**: The pre- and post-connection phases
//!
//! - **[`failures`](failures/index.html)**: The failure list
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use usecases_srt_configure::*;
//! use entities_srt_options::{ConnectionMode, SocketOptionId};
//!
//! struct AcceptAll;
//!
//! impl SocketOptionSetter for AcceptAll {
//!     fn set_option(&self, _: SocketHandle, _: SocketOptionId, _: &[u8]) -> Result<(), SetOptionError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut options = HashMap::new();
//! options.insert("latency".to_string(), "200".to_string());
//!
//! let mut failures = FailureList::new();
//! let mode = configure_pre(&AcceptAll, SocketHandle(1), "example.com", &options, &mut failures);
//! assert_eq!(mode, ConnectionMode::Caller);
//! assert!(failures.is_empty());
//! ```
//!
//! ## See Also
//!
//! - [`entities_srt_options`](../entities_srt_options/index.html): Option table and value encoding
//! - [`adapters_socket`](../adapters_socket/index.html): libsrt and recording setters

pub mod apply;
pub mod configure;
pub mod failures;
pub mod mode;
pub mod setter;
pub mod source;

pub use apply::{apply_option, try_apply_option, ApplyError};
pub use configure::{configure_post, configure_pre, insert_passphrase_defaults, DEFAULT_PBKEYLEN};
pub use entities_srt_options::ConnectionMode;
pub use failures::FailureList;
pub use mode::{resolve_mode, resolve_mode_into, ModeError, ADAPTER_KEY, DEFAULT_MODE, MODE_KEY};
pub use setter::{SetOptionError, SocketHandle, SocketOptionSetter};
pub use source::OptionSource;
