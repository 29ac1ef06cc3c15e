//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → RedirectorConfig (immutable)
//!     → inline rules + optional YAML rules file
//!     → routing::RedirectTable (built once at startup)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults so a minimal (or absent) config works
//! - A decode failure aborts startup before any handler is constructed;
//!   the process never silently serves an empty table in its place

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_rules, parse_config, ConfigError};
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RedirectorConfig;
