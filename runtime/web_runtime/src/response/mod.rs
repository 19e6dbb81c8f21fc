//! Build HTTP responses.
pub mod body;

use bytes::Bytes;
use http::header::{CONTENT_TYPE, LOCATION};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Version};
use http_body_util::Full;

use body::TypedBody;

/// Represents an HTTP response.
///
/// ```rust
/// use web_runtime::response::Response;
/// use web_runtime::http::{HeaderValue, header::SERVER};
///
/// // Create a new response with:
/// // - status code `OK`
/// // - the `Server` header set to `home`
/// // - the `Content-Type` header set to `text/plain; charset=utf-8`
/// // - the body set to `Hello, world!`
/// let response = Response::ok()
///     .insert_header(SERVER, HeaderValue::from_static("home"))
///     .set_typed_body("Hello, world!");
/// ```
///
/// The body is always fully buffered in memory: the pages served by this
/// service are small and rendered in one go.
#[derive(Debug)]
pub struct Response {
    inner: http::Response<Bytes>,
}

impl Response {
    /// Build a new [`Response`] with the given status code.
    /// The HTTP version is set to HTTP 1.1, there are no headers and
    /// the body is empty.
    pub fn new(status_code: StatusCode) -> Self {
        let inner = http::Response::new(Bytes::new());
        Self { inner }.set_status(status_code)
    }

    /// Change the status code of the [`Response`].
    pub fn set_status(mut self, status: StatusCode) -> Self {
        *self.inner.status_mut() = status;
        self
    }

    /// Change the HTTP version of the [`Response`].
    pub fn set_version(mut self, version: Version) -> Self {
        *self.inner.version_mut() = version;
        self
    }

    /// Append a value to a [`Response`] header.
    ///
    /// If the header is not present, it is added with the given value.
    /// If the header is present, the value is appended to the end
    /// of the comma-separated list of existing values for that header.
    pub fn append_header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.inner.headers_mut().append(key, value);
        self
    }

    /// Insert a header value into the [`Response`].
    ///
    /// If the header key is not present, it is added with the given value.
    /// If the header key is present, its value is overwritten with the given value.
    pub fn insert_header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.inner.headers_mut().insert(key, value);
        self
    }

    /// Set the [`Response`] body.
    ///
    /// The `Content-Type` header is set according to the body type.
    pub fn set_typed_body<B>(mut self, body: B) -> Self
    where
        B: TypedBody,
    {
        let content_type = body.content_type();
        *self.inner.body_mut() = body.body();
        self.inner.headers_mut().insert(CONTENT_TYPE, content_type);
        self
    }

    /// Get the [`Response`] status code.
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Get the [`Response`] HTTP version.
    pub fn version(&self) -> Version {
        self.inner.version()
    }

    /// Get a reference to the [`Response`] headers.
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Get a mutable reference to the [`Response`] headers.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    /// Get a reference to the buffered [`Response`] body.
    pub fn body(&self) -> &Bytes {
        self.inner.body()
    }

    /// Convert the [`Response`] into the type expected by `hyper`.
    pub fn into_inner(self) -> http::Response<Full<Bytes>> {
        self.inner.map(Full::new)
    }
}

impl From<Response> for http::Response<Full<Bytes>> {
    fn from(response: Response) -> Self {
        response.into_inner()
    }
}

macro_rules! shorthand {
    ($fn_name:ident, $status:ident) => {
        impl Response {
            #[doc = concat!("Start building a new [`Response`] with [`StatusCode::", stringify!($status), "`] as status code.")]
            pub fn $fn_name() -> Response {
                Response::new(StatusCode::$status)
            }
        }
    };
}

shorthand!(ok, OK);
shorthand!(bad_request, BAD_REQUEST);
shorthand!(not_found, NOT_FOUND);
shorthand!(method_not_allowed, METHOD_NOT_ALLOWED);
shorthand!(payload_too_large, PAYLOAD_TOO_LARGE);
shorthand!(unsupported_media_type, UNSUPPORTED_MEDIA_TYPE);
shorthand!(unprocessable_entity, UNPROCESSABLE_ENTITY);
shorthand!(internal_server_error, INTERNAL_SERVER_ERROR);

impl Response {
    /// Redirect the caller to `location` with a `303 See Other` status code.
    ///
    /// The browser follows up with a `GET` request, which makes it the right
    /// answer to a form submission.
    pub fn see_other(location: &str) -> Response {
        let response = Response::new(StatusCode::SEE_OTHER);
        match HeaderValue::from_str(location) {
            Ok(value) => response.insert_header(LOCATION, value),
            Err(_) => {
                tracing::warn!(location, "Invalid redirect location, falling back to `/`");
                response.insert_header(LOCATION, HeaderValue::from_static("/"))
            }
        }
    }
}
