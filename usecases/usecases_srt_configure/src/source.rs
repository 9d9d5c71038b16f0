//! Option Source Module
//!
//! Read-only access to the caller's option mapping. Values are exposed as
//! raw bytes so that input which is not valid UTF-8 reaches the encoder and
//! is reported there instead of being lost upstream.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A mapping from option names to raw values
pub trait OptionSource {
    /// Raw value for `name`, if present
    fn value(&self, name: &str) -> Option<&[u8]>;

    /// Whether `name` is present, whatever its value
    fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }
}

impl<K, V, S> OptionSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<[u8]>,
    S: BuildHasher,
{
    fn value(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(|v| v.as_ref())
    }
}

impl<K, V> OptionSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<[u8]>,
{
    fn value(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(|v| v.as_ref())
    }
}

impl<T: OptionSource + ?Sized> OptionSource for &T {
    fn value(&self, name: &str) -> Option<&[u8]> {
        (**self).value(name)
    }
}
