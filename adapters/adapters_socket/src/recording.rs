//! Recording Module
//!
//! An in-memory [`SocketOptionSetter`] that accepts options without a
//! transport library. Used for dry runs and for checking what a
//! configuration pass would hand to libsrt.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use entities_srt_options::{OptionType, OptionValue, SocketOptionId};
use usecases_srt_configure::{SetOptionError, SocketHandle, SocketOptionSetter};

/// One accepted `set_option` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedOption {
    pub socket: SocketHandle,
    pub option: SocketOptionId,
    pub value: Vec<u8>,
}

/// Setter that records accepted calls in order
#[derive(Debug, Default)]
pub struct RecordingSetter {
    calls: Mutex<Vec<RecordedOption>>,
    rejected: HashSet<SocketOptionId>,
}

impl RecordingSetter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every call for the given options
    pub fn rejecting(options: impl IntoIterator<Item = SocketOptionId>) -> Self {
        Self {
            calls: Mutex::default(),
            rejected: options.into_iter().collect(),
        }
    }

    /// Accepted calls, oldest first
    pub fn calls(&self) -> Vec<RecordedOption> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Value most recently accepted for `option`, decoded as `option_type`
    pub fn last_value(&self, option: SocketOptionId, option_type: OptionType) -> Option<OptionValue> {
        let calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        calls
            .iter()
            .rev()
            .find(|call| call.option == option)
            .and_then(|call| OptionValue::decode(option_type, &call.value))
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all recorded calls
    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl SocketOptionSetter for RecordingSetter {
    fn set_option(
        &self,
        socket: SocketHandle,
        option: SocketOptionId,
        value: &[u8],
    ) -> Result<(), SetOptionError> {
        if self.rejected.contains(&option) {
            return Err(SetOptionError::new(socket, option, "rejected by recording setter"));
        }

        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedOption {
                socket,
                option,
                value: value.to_vec(),
            });
        Ok(())
    }
}
