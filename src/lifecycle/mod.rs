//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup: logging → config → rules → table → bind → serve
//! Shutdown: Ctrl+C or Shutdown::trigger → stop accepting → drain → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shutdown is cooperative via a broadcast channel

pub mod shutdown;

pub use shutdown::Shutdown;
