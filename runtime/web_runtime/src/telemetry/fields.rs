//! Field names and values to log HTTP requests with consistent naming
//! and representations.
//!
//! For each well-known resource there is a constant holding the field name
//! and a function computing its log representation, e.g. [`HTTP_REQUEST_METHOD`]
//! and [`http_request_method`] for the `http.request.method` field.
//!
//! Names follow [OpenTelemetry's semantic conventions](https://opentelemetry.io/docs/specs/semconv/).
use http::{Method, Version};
use tracing::Value;

use crate::Response;
use crate::request::RequestHead;
use crate::telemetry::ServerRequestId;

// Error-related fields.
pub use tracing_log_error::fields::*;

/// The field name to record the HTTP method of the incoming request.
pub const HTTP_REQUEST_METHOD: &str = "http.request.method";

/// The field name to record the server-generated id of the incoming request.
pub const HTTP_REQUEST_SERVER_ID: &str = "http.request.server_id";

/// The field name to record the status code of the outgoing response.
pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";

/// The field name to record the path pattern that matched the incoming request.
pub const HTTP_ROUTE: &str = "http.route";

pub const NETWORK_PROTOCOL_VERSION: &str = "network.protocol.version";

pub const URL_PATH: &str = "url.path";

pub const URL_QUERY: &str = "url.query";

pub const USER_AGENT_ORIGINAL: &str = "user_agent.original";

/// Methods outside of the standard set are logged as `_OTHER`.
pub fn http_request_method(request_head: &RequestHead) -> impl Value + use<> {
    match request_head.method {
        Method::GET => "GET",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::TRACE => "TRACE",
        Method::PATCH => "PATCH",
        Method::CONNECT => "CONNECT",
        Method::HEAD => "HEAD",
        Method::DELETE => "DELETE",
        Method::OPTIONS => "OPTIONS",
        _ => "_OTHER",
    }
}

pub fn http_request_server_id(id: ServerRequestId) -> impl Value {
    tracing::field::display(id)
}

pub fn http_response_status_code(response: &Response) -> impl Value + use<> {
    response.status().as_u16()
}

pub fn http_route(pattern: &'static str) -> impl Value {
    pattern
}

pub fn network_protocol_version(request_head: &RequestHead) -> impl Value + use<> {
    match request_head.version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_11 => "1.1",
        Version::HTTP_2 => "2.0",
        Version::HTTP_3 => "3.0",
        _ => "_OTHER",
    }
}

pub fn url_path(request_head: &RequestHead) -> impl Value + '_ {
    request_head.target.path()
}

pub fn url_query(request_head: &RequestHead) -> impl Value + '_ {
    request_head.target.query().unwrap_or_default()
}

pub fn user_agent_original(request_head: &RequestHead) -> impl Value + '_ {
    request_head
        .headers
        .get(http::header::USER_AGENT)
        .map(|h| h.to_str().unwrap_or_default())
        .unwrap_or_default()
}
