//! Typed bodies for [`Response`](super::Response).
use bytes::Bytes;
use http::HeaderValue;
use mime::{TEXT_HTML_UTF_8, TEXT_PLAIN_UTF_8};
use std::borrow::Cow;

/// A body type with a well-known `Content-Type`.
///
/// Check out [`Response::set_typed_body`](super::Response::set_typed_body).
pub trait TypedBody {
    /// The header value that should be used as `Content-Type` when
    /// returning this body in a response.
    fn content_type(&self) -> HeaderValue;

    /// The actual body bytes.
    fn body(self) -> Bytes;
}

/// A [`Response`](super::Response) body with `Content-Type` set to
/// `text/html; charset=utf-8`.
///
/// # Example
///
/// ```rust
/// use web_runtime::response::{Response, body::Html};
/// use web_runtime::http::header::CONTENT_TYPE;
///
/// let html: Html = r#"<body>
///     <h1>Hey there!</h1>
/// </body>"#.into();
/// let response = Response::ok().set_typed_body(html);
///
/// assert_eq!(response.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
/// ```
#[derive(Debug, Clone)]
pub struct Html(Bytes);

impl From<String> for Html {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&'static str> for Html {
    fn from(s: &'static str) -> Self {
        Self(Bytes::from_static(s.as_bytes()))
    }
}

impl From<Cow<'static, str>> for Html {
    fn from(s: Cow<'static, str>) -> Self {
        match s {
            Cow::Borrowed(s) => s.into(),
            Cow::Owned(s) => s.into(),
        }
    }
}

impl TypedBody for Html {
    fn content_type(&self) -> HeaderValue {
        HeaderValue::from_static(TEXT_HTML_UTF_8.as_ref())
    }

    fn body(self) -> Bytes {
        self.0
    }
}

impl TypedBody for String {
    fn content_type(&self) -> HeaderValue {
        HeaderValue::from_static(TEXT_PLAIN_UTF_8.as_ref())
    }

    fn body(self) -> Bytes {
        self.into()
    }
}

impl TypedBody for &'static str {
    fn content_type(&self) -> HeaderValue {
        HeaderValue::from_static(TEXT_PLAIN_UTF_8.as_ref())
    }

    fn body(self) -> Bytes {
        Bytes::from_static(self.as_bytes())
    }
}
