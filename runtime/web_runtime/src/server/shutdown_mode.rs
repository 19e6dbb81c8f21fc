use std::time::Duration;

#[derive(Debug, Clone)]
#[non_exhaustive]
/// Configure how the server should shut down.
///
/// Check out [`ServerHandle::shutdown`](super::ServerHandle::shutdown) for more details.
pub enum ShutdownMode {
    /// Stop accepting new connections and let in-flight requests complete.
    ///
    /// Connections that are still open when the timeout expires are closed.
    Graceful {
        /// How long to wait for in-flight requests before closing their connections.
        timeout: Duration,
    },
    /// Stop accepting new connections and close all open connections right away.
    Forced,
}

impl ShutdownMode {
    /// Returns `true` if the shutdown mode is [`ShutdownMode::Graceful`].
    pub fn is_graceful(&self) -> bool {
        matches!(self, Self::Graceful { .. })
    }

    /// Returns `true` if the shutdown mode is [`ShutdownMode::Forced`].
    pub fn is_forced(&self) -> bool {
        matches!(self, Self::Forced)
    }
}
