//! Request-level telemetry: request ids, the root span and
//! the conventional field names for HTTP logs.
pub use root_span::RootSpan;
pub use server_request_id::ServerRequestId;

pub mod fields;
mod root_span;
mod server_request_id;
