//! Path-to-URL redirect service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::RedirectorConfig;
pub use http::{HttpServer, RedirectHandler};
pub use lifecycle::Shutdown;
pub use routing::{DecodeError, RedirectRule, RedirectTable};
