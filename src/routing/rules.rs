//! Redirect rule records and decoding.
//!
//! # Responsibilities
//! - Define the on-disk rule shape (`path` + `url` string pairs)
//! - Decode raw YAML or JSON bytes into an ordered rule sequence
//!
//! # Design Decisions
//! - Decoding checks syntax and shape only; `path` and `url` are opaque
//!   strings and their content is never validated
//! - Input order is preserved so the table builder can apply
//!   last-write-wins deterministically

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single path-to-URL mapping entry.
///
/// The expected YAML shape is:
///
/// ```yaml
/// - path: /some-path
///   url: https://example.com/demo
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedirectRule {
    /// Request path to match exactly (e.g. `/foo`).
    pub path: String,

    /// Redirect target sent back in the `Location` header.
    pub url: String,
}

/// Error type for rule decoding.
///
/// Raised only when the raw bytes are not well-formed or do not match the
/// expected sequence-of-rules shape. There is no partial recovery: decoding
/// either yields the full rule sequence or fails.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid YAML rule data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON rule data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a YAML sequence of rules, preserving input order.
pub fn decode_rules(raw: &[u8]) -> Result<Vec<RedirectRule>, DecodeError> {
    Ok(serde_yaml::from_slice(raw)?)
}

/// Decode a JSON array of rules, preserving input order.
pub fn decode_rules_json(raw: &[u8]) -> Result<Vec<RedirectRule>, DecodeError> {
    Ok(serde_json::from_slice(raw)?)
}
