use crate::request::RequestHead;
use crate::request::body::BufferedBody;
use crate::request::body::errors::{
    ExtractUrlEncodedBodyError, MissingUrlEncodedContentType, UrlEncodedBodyDeserializationError,
    UrlEncodedContentTypeMismatch,
};
use http::HeaderMap;
use serde::Deserialize;

#[doc(alias = "Form")]
#[derive(Debug)]
/// Parse a URL-encoded request body, such as a web form.
///
/// # Example
///
/// ```rust
/// use web_runtime::request::body::UrlEncodedBody;
///
/// #[derive(serde::Deserialize)]
/// pub struct SignInForm {
///     name: String,
/// }
///
/// pub fn greet(body: &UrlEncodedBody<SignInForm>) -> String {
///     format!("Hello {}", body.0.name)
/// }
/// ```
pub struct UrlEncodedBody<T>(pub T);

impl<T> UrlEncodedBody<T> {
    /// Check the `Content-Type` header and deserialize the buffered body.
    pub fn extract<'head, 'body>(
        request_head: &'head RequestHead,
        buffered_body: &'body BufferedBody,
    ) -> Result<Self, ExtractUrlEncodedBodyError>
    where
        T: Deserialize<'body>,
    {
        check_urlencoded_content_type(&request_head.headers)?;
        parse(buffered_body.bytes.as_ref()).map(UrlEncodedBody)
    }
}

/// Check that the `Content-Type` header is set to `application/x-www-form-urlencoded`.
///
/// Return an error otherwise.
fn check_urlencoded_content_type(headers: &HeaderMap) -> Result<(), ExtractUrlEncodedBodyError> {
    let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
        return Err(MissingUrlEncodedContentType.into());
    };
    let Ok(content_type) = content_type.to_str() else {
        return Err(MissingUrlEncodedContentType.into());
    };

    let Ok(mime) = content_type.parse::<mime::Mime>() else {
        return Err(UrlEncodedContentTypeMismatch {
            actual: content_type.to_string(),
        }
        .into());
    };

    let is_urlencoded_content_type =
        mime.type_() == mime::APPLICATION && mime.subtype() == mime::WWW_FORM_URLENCODED;
    if !is_urlencoded_content_type {
        return Err(UrlEncodedContentTypeMismatch {
            actual: content_type.to_string(),
        }
        .into());
    };
    Ok(())
}

fn parse<'a, T>(bytes: &'a [u8]) -> Result<T, ExtractUrlEncodedBodyError>
where
    T: Deserialize<'a>,
{
    serde_html_form::from_bytes(bytes)
        .map_err(|e| UrlEncodedBodyDeserializationError { source: e })
        .map_err(ExtractUrlEncodedBodyError::DeserializationError)
}
