//! Parse request cookies and attach response cookies.
//!
//! Most types are re-exports of the [`biscotti`] crate.
use crate::request::RequestHead;
use crate::response::Response;
use errors::{ExtractRequestCookiesError, InjectResponseCookiesError};
pub use biscotti::{
    Processor, ProcessorConfig, RemovalCookie, RequestCookie, RequestCookies, ResponseCookie,
    ResponseCookies, SameSite,
};
use http::HeaderValue;
use http::header::{COOKIE, SET_COOKIE};
use tracing_log_error::log_error;

pub mod errors;

/// Parse cookies out of the incoming request.
///
/// A `Cookie` header with non-printable characters is rejected.
/// Individual cookies that fail to parse are skipped with a warning, the
/// others are kept.
pub fn extract_request_cookies<'request>(
    request_head: &'request RequestHead,
    processor: &Processor,
) -> Result<RequestCookies<'request>, ExtractRequestCookiesError> {
    let mut cookies = RequestCookies::new();
    for header in request_head.headers.get_all(COOKIE).into_iter() {
        let header = header.to_str()?;
        // One pair at a time, so a malformed pair only drops itself.
        for pair in header.split(';').map(str::trim) {
            if pair.is_empty() {
                continue;
            }
            if let Err(e) = cookies.extend_from_header(pair, processor) {
                log_error!(
                    e,
                    level: tracing::Level::WARN,
                    "A request cookie is invalid, ignoring it"
                );
            }
        }
    }
    Ok(cookies)
}

/// Attach cookies to the outgoing response.
///
/// It consumes [`ResponseCookies`] by value since no response cookies should be
/// added once the handler has returned.
pub fn inject_response_cookies(
    mut response: Response,
    response_cookies: ResponseCookies<'_>,
    processor: &Processor,
) -> Result<Response, InjectResponseCookiesError> {
    for value in response_cookies.header_values(processor) {
        let value = HeaderValue::from_str(&value).map_err(|_| InjectResponseCookiesError {
            invalid_header_value: value,
        })?;
        response = response.append_header(SET_COOKIE, value);
    }
    Ok(response)
}
