//! Cooperative shutdown for embedded servers.

use tokio::sync::broadcast;

/// Stop signal for a serving loop started with `HttpServer::run_until`.
///
/// A standalone redirector process stops on Ctrl+C. Embedders and tests own
/// the server's lifetime instead: they subscribe a receiver before spawning
/// it and call [`trigger`](Self::trigger) once they are done with it.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
