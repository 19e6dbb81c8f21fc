//! Errors that can occur when working with cookies.
use crate::response::Response;
pub use biscotti::errors::*;
use http::header::ToStrError;

#[derive(Debug, thiserror::Error)]
/// The error type returned by [`extract_request_cookies`](super::extract_request_cookies).
pub enum ExtractRequestCookiesError {
    #[error("Some characters in the `Cookie` header aren't printable ASCII characters.")]
    InvalidHeaderValue(#[from] ToStrError),
}

impl ExtractRequestCookiesError {
    /// Convert an [`ExtractRequestCookiesError`] into an HTTP response.
    ///
    /// It returns a `400 Bad Request` to the caller.
    pub fn into_response(&self) -> Response {
        Response::bad_request().set_typed_body(self.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
#[error("Some characters in the `Set-Cookie` header value are not printable ASCII characters.")]
/// The error type returned by [`inject_response_cookies`](super::inject_response_cookies).
pub struct InjectResponseCookiesError {
    /// The invalid header value.
    pub invalid_header_value: String,
}

impl InjectResponseCookiesError {
    /// Convert an [`InjectResponseCookiesError`] into an HTTP response.
    ///
    /// It returns a `500 Internal Server Error`: the server built a cookie
    /// it can't send.
    pub fn into_response(&self) -> Response {
        Response::internal_server_error()
    }
}
