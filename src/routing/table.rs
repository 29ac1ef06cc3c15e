//! Path lookup table.
//!
//! # Responsibilities
//! - Fold an ordered rule sequence into a path-keyed map
//! - Answer exact-path lookups for the dispatcher
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) exact lookup via HashMap
//! - Duplicate paths resolve to the last rule in input order
//! - Construction cannot fail; malformed input is a decoding concern

use std::collections::HashMap;

use crate::routing::rules::{decode_rules, decode_rules_json, DecodeError, RedirectRule};

/// Mapping from request path to redirect target URL.
///
/// Built once at startup and shared read-only across request contexts,
/// usually behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTable {
    entries: HashMap<String, String>,
}

impl RedirectTable {
    /// Build a table from rules in input order.
    ///
    /// When several rules share a path, the last one wins.
    pub fn from_rules(rules: impl IntoIterator<Item = RedirectRule>) -> Self {
        let mut entries = HashMap::new();
        for rule in rules {
            entries.insert(rule.path, rule.url);
        }
        Self { entries }
    }

    /// Decode YAML rule data and build the table from it.
    pub fn from_yaml(raw: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self::from_rules(decode_rules(raw)?))
    }

    /// Decode JSON rule data and build the table from it.
    pub fn from_json(raw: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self::from_rules(decode_rules_json(raw)?))
    }

    /// Look up the redirect target for a request path.
    ///
    /// The path is matched exactly: no trimming, no case folding, no
    /// trailing-slash handling. Absence is an expected outcome, not an
    /// error.
    pub fn target(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for RedirectTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}
