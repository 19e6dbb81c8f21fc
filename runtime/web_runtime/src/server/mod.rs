//! An HTTP server to respond to incoming requests.
//!
//! ```rust,no_run
//! use std::net::SocketAddr;
//! use web_runtime::Response;
//! use web_runtime::request::body::RawIncomingBody;
//! use web_runtime::server::{Server, ShutdownMode};
//!
//! async fn handler(_request: web_runtime::http::Request<RawIncomingBody>, _state: ()) -> Response {
//!     Response::ok()
//! }
//!
//! # async fn run() -> std::io::Result<()> {
//! let addr: SocketAddr = "127.0.0.1:8000".parse().unwrap();
//! let handle = Server::new().bind(addr).await?.serve(handler, ());
//! // [...]
//! handle.shutdown(ShutdownMode::Forced).await;
//! # Ok(())
//! # }
//! ```
pub use incoming::IncomingStream;
pub use server_::Server;
pub use server_handle::ServerHandle;
pub use shutdown_mode::ShutdownMode;

mod incoming;
mod server_;
mod server_handle;
mod shutdown_mode;
