//! Failure List Module
//!
//! Ordered, append-only record of option names that failed to apply. One
//! list may be shared across both configuration phases.

use std::fmt;

/// Names of options that failed to apply, in the order they failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureList {
    names: Vec<String>,
}

impl FailureList {
    /// Entry recorded when the connection mode cannot be resolved
    pub const MODE: &'static str = "mode";

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed option
    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl fmt::Display for FailureList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(", "))
    }
}

impl<'a> IntoIterator for &'a FailureList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let mut failures = FailureList::new();
        failures.push("latency");
        failures.push(FailureList::MODE);
        failures.push("latency");

        assert_eq!(failures.len(), 3);
        assert_eq!(
            failures.iter().collect::<Vec<_>>(),
            vec!["latency", "mode", "latency"]
        );
        assert_eq!(failures.to_string(), "latency, mode, latency");
    }

    #[test]
    fn test_contains() {
        let mut failures = FailureList::new();
        assert!(failures.is_empty());
        failures.push("fc");
        assert!(failures.contains("fc"));
        assert!(!failures.contains("mode"));
        assert_eq!(failures.into_vec(), vec!["fc".to_string()]);
    }
}
