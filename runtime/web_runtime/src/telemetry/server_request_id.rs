use http::HeaderValue;
use std::fmt::Formatter;
use uuid::Uuid;

/// A unique identifier generated for each incoming request.
///
/// It's a [UUID v7](https://www.rfc-editor.org/rfc/rfc9562#name-uuid-version-7),
/// a random number prefixed by the current timestamp.
#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ServerRequestId(Uuid);

impl ServerRequestId {
    /// Generate a new request id from the current (UNIX) timestamp and a random number.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Access the underlying UUID.
    pub fn inner(&self) -> Uuid {
        self.0
    }

    /// The hyphenated representation of the id, as a [`HeaderValue`].
    pub fn header_value(&self) -> HeaderValue {
        let mut buffer = Uuid::encode_buffer();
        let hyphenated = self.0.hyphenated().encode_lower(&mut buffer);
        // A hyphenated UUID only contains ASCII hex digits and dashes.
        HeaderValue::from_str(hyphenated).unwrap_or(HeaderValue::from_static(""))
    }
}

impl From<Uuid> for ServerRequestId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ServerRequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0)
    }
}
