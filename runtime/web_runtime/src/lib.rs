//! The HTTP plumbing shared by the home page service.
//!
//! It provides the building blocks that the `app` crate wires together:
//!
//! - [`server`]: bind sockets, accept connections and hand requests over to a handler.
//! - [`request`] and [`response`]: the request head, body extractors and the response type.
//! - [`cookie`]: parse request cookies and attach response cookies.
//! - [`router`]: map a path and a method to a route.
//! - [`telemetry`]: the root span and the conventional log fields for HTTP requests.
pub mod cookie;
mod error;
pub mod request;
pub mod response;
pub mod router;
pub mod server;
pub mod telemetry;

pub use error::Error;
pub use response::Response;

/// Re-export of the `http` crate, to avoid version mismatches downstream.
pub use http;
