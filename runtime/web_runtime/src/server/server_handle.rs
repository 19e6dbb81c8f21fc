use std::convert::Infallible;
use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::net::SocketAddr;
use std::pin::Pin;

use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::{JoinError, JoinSet};
use tracing_log_error::log_error;

use crate::response::Response;

use super::{IncomingStream, ShutdownMode};

/// A handle to a running [`Server`](super::Server).
///
/// Use [`ServerHandle::shutdown`] to stop the server.
/// Awaiting the handle waits until the server has stopped.
///
/// ```rust,no_run
/// use web_runtime::server::{ServerHandle, ShutdownMode};
/// use std::time::Duration;
///
/// # async fn run(handle: ServerHandle) {
/// let handle2 = handle.clone();
/// tokio::spawn(async move {
///     handle2.shutdown(ShutdownMode::Graceful { timeout: Duration::from_secs(5) }).await;
/// });
/// // Returns once the server has shut down.
/// handle.await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ServerHandle {
    command_outbox: mpsc::Sender<ServerCommand>,
}

impl ServerHandle {
    pub(super) fn new<HandlerFuture, ApplicationState>(
        incoming: Vec<IncomingStream>,
        handler: fn(http::Request<hyper::body::Incoming>, ApplicationState) -> HandlerFuture,
        application_state: ApplicationState,
    ) -> Self
    where
        HandlerFuture: Future<Output = Response> + Send + 'static,
        ApplicationState: Clone + Send + Sync + 'static,
    {
        let (command_outbox, command_inbox) = mpsc::channel(32);
        let acceptor = Acceptor {
            command_inbox,
            incoming,
            handler,
            application_state,
            handler_output_future: PhantomData,
        };
        tokio::spawn(acceptor.run());
        Self { command_outbox }
    }

    /// Instruct the server to stop accepting new connections and shut down.
    ///
    /// The returned future completes once the shutdown is complete, according to the
    /// chosen [`ShutdownMode`].
    /// Shutting down a server that has already stopped is a no-op.
    #[doc(alias("stop"))]
    pub async fn shutdown(self, mode: ShutdownMode) {
        let (completion_notifier, completion) = oneshot::channel();
        if self
            .command_outbox
            .send(ServerCommand::Shutdown {
                completion_notifier,
                mode,
            })
            .await
            .is_ok()
        {
            // A send error means the acceptor is already gone.
            let _ = completion.await;
        }
    }
}

impl IntoFuture for ServerHandle {
    type Output = ();
    type IntoFuture = Pin<Box<dyn Future<Output = ()> + Send + Sync + 'static>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.command_outbox.closed().await })
    }
}

#[derive(Debug)]
enum ServerCommand {
    Shutdown {
        completion_notifier: oneshot::Sender<()>,
        mode: ShutdownMode,
    },
}

type Accepted = (IncomingStream, TcpStream, SocketAddr);

struct Acceptor<HandlerFuture, ApplicationState> {
    command_inbox: mpsc::Receiver<ServerCommand>,
    incoming: Vec<IncomingStream>,
    handler: fn(http::Request<hyper::body::Incoming>, ApplicationState) -> HandlerFuture,
    application_state: ApplicationState,
    // `fn() -> F` keeps the acceptor `Send + Sync` regardless of `F`.
    handler_output_future: PhantomData<fn() -> HandlerFuture>,
}

impl<HandlerFuture, ApplicationState> Acceptor<HandlerFuture, ApplicationState>
where
    HandlerFuture: Future<Output = Response> + Send + 'static,
    ApplicationState: Clone + Send + Sync + 'static,
{
    async fn run(self) {
        async fn accept_connection(incoming: IncomingStream) -> Accepted {
            loop {
                match incoming.accept().await {
                    Ok((connection, remote_peer)) => return (incoming, connection, remote_peer),
                    Err(e) => {
                        log_error!(e, "Failed to accept connection");
                        continue;
                    }
                }
            }
        }

        let Self {
            mut command_inbox,
            incoming,
            handler,
            application_state,
            handler_output_future: _,
        } = self;

        let mut incoming_join_set = JoinSet::new();
        for incoming in incoming.into_iter() {
            incoming_join_set.spawn(accept_connection(incoming));
        }
        let mut connections = JoinSet::new();
        let (shutdown_signal, shutdown_listener) = watch::channel(false);

        let error: JoinError = loop {
            tokio::select! {
                // Shutdown commands take precedence over new connections.
                biased;
                Some(command) = command_inbox.recv() => match command {
                    ServerCommand::Shutdown { completion_notifier, mode } => {
                        drop(incoming_join_set);
                        shutdown(mode, connections, shutdown_signal).await;
                        let _ = completion_notifier.send(());
                        return;
                    }
                },
                Some(accepted) = incoming_join_set.join_next() => {
                    let (incoming, connection, remote_peer) = match accepted {
                        Ok(accepted) => accepted,
                        // Only a panic or a cancellation in the accept loop gets us here.
                        Err(e) => break e,
                    };
                    incoming_join_set.spawn(accept_connection(incoming));
                    tracing::trace!(%remote_peer, "Accepted a new connection");
                    connections.spawn(serve_connection(
                        connection,
                        handler,
                        application_state.clone(),
                        shutdown_listener.clone(),
                    ));
                },
                // Reap completed connections to keep the set from growing unbounded.
                Some(_) = connections.join_next(), if !connections.is_empty() => {},
                else => {
                    tracing::warn!("The server has no sockets to listen on, shutting down");
                    return;
                }
            }
        };

        log_error!(
            error,
            "Failed to accept new connections. The acceptor task will exit now."
        );
    }
}

async fn serve_connection<HandlerFuture, ApplicationState>(
    connection: TcpStream,
    handler: fn(http::Request<hyper::body::Incoming>, ApplicationState) -> HandlerFuture,
    application_state: ApplicationState,
    mut shutdown_listener: watch::Receiver<bool>,
) where
    HandlerFuture: Future<Output = Response> + Send + 'static,
    ApplicationState: Clone + Send + Sync + 'static,
{
    let service = hyper::service::service_fn(move |request| {
        let handler = handler(request, application_state.clone());
        async move { Ok::<_, Infallible>(handler.await.into_inner()) }
    });
    let builder = auto::Builder::new(TokioExecutor::new());
    let connection = builder.serve_connection(TokioIo::new(connection), service);
    tokio::pin!(connection);

    let outcome = tokio::select! {
        outcome = connection.as_mut() => outcome,
        _ = shutdown_listener.changed() => {
            // Finish in-flight requests, then close.
            connection.as_mut().graceful_shutdown();
            connection.as_mut().await
        }
    };
    if let Err(e) = outcome {
        log_error!(
            *e,
            level: tracing::Level::WARN,
            "Failed to serve a connection"
        );
    }
}

async fn shutdown(
    mode: ShutdownMode,
    mut connections: JoinSet<()>,
    shutdown_signal: watch::Sender<bool>,
) {
    if let ShutdownMode::Graceful { timeout } = mode {
        let _ = shutdown_signal.send(true);
        let drained = tokio::time::timeout(timeout, async {
            while connections.join_next().await.is_some() {}
        })
        .await;
        if drained.is_err() {
            tracing::warn!(
                open_connections = connections.len(),
                "Graceful shutdown timed out, closing the remaining connections"
            );
        }
    }
    connections.abort_all();
    while connections.join_next().await.is_some() {}
}
