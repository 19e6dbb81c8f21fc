//! Extractors that consume the request body.
pub use buffered_body::BufferedBody;
pub use limit::BodySizeLimit;
pub use url_encoded::UrlEncodedBody;

mod buffered_body;
pub mod errors;
mod limit;
mod url_encoded;

/// The raw, streaming body of an incoming request.
pub type RawIncomingBody = hyper::body::Incoming;
