//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Rule data (YAML/JSON bytes)
//!     → rules.rs (decode into ordered RedirectRule records)
//!     → table.rs (fold into path-keyed RedirectTable)
//!     → Return: immutable table shared with the dispatcher
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime
//! - Exact-path lookup only (no prefixes, no patterns, no normalization)
//! - Later duplicate paths overwrite earlier ones (last-write-wins)
//! - Paths and URLs are opaque strings; decoding checks shape, not content

pub mod rules;
pub mod table;

pub use rules::{decode_rules, decode_rules_json, DecodeError, RedirectRule};
pub use table::RedirectTable;
