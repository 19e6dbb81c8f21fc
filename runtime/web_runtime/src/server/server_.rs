use std::future::Future;
use std::net::SocketAddr;

use crate::response::Response;

use super::{IncomingStream, ServerHandle};

/// An HTTP server that hands incoming requests over to a handler.
///
/// Register one or more sockets with [`Server::bind`] or [`Server::listen`],
/// then start serving with [`Server::serve`].
#[must_use = "You must call `serve` on a `Server` to start listening for incoming connections"]
#[derive(Default)]
pub struct Server {
    incoming: Vec<IncomingStream>,
}

impl Server {
    /// Create a new [`Server`] with no sockets attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the server to `addr`.
    ///
    /// It can be called multiple times to listen on several addresses.
    pub async fn bind(mut self, addr: SocketAddr) -> std::io::Result<Self> {
        let incoming = IncomingStream::bind(addr).await?;
        self.incoming.push(incoming);
        Ok(self)
    }

    /// Listen for connections on an [`IncomingStream`] you created yourself.
    pub fn listen(mut self, incoming: IncomingStream) -> Self {
        self.incoming.push(incoming);
        self
    }

    /// Start accepting connections.
    ///
    /// Each request is processed by `handler`, which receives a clone of
    /// `application_state`. It must be invoked from within a Tokio runtime.
    ///
    /// The returned [`ServerHandle`] can be used to shut the server down.
    pub fn serve<HandlerFuture, ApplicationState>(
        self,
        handler: fn(http::Request<hyper::body::Incoming>, ApplicationState) -> HandlerFuture,
        application_state: ApplicationState,
    ) -> ServerHandle
    where
        HandlerFuture: Future<Output = Response> + Send + 'static,
        ApplicationState: Clone + Send + Sync + 'static,
    {
        ServerHandle::new(self.incoming, handler, application_state)
    }
}
