//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, trace middleware, graceful shutdown)
//!     → redirect.rs (exact-path lookup, 302 or fallback)
//!     → Send response to client
//! ```

pub mod redirect;
pub mod server;

pub use redirect::RedirectHandler;
pub use server::{default_fallback, HttpServer};
