use ubyte::{ByteUnit, ToByteUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
/// An upper limit on the size of incoming request bodies.
///
/// Check out the documentation of [`BufferedBody`](super::BufferedBody) for more details.
///
/// It can be loaded from configuration:
///
/// ```yaml
/// body_size_limit:
///   mode: enabled
///   max_size: 2 MB
/// ```
pub enum BodySizeLimit {
    /// There is an active limit on the size of incoming request bodies.
    Enabled {
        /// The maximum size of incoming request bodies, in bytes.
        max_size: ByteUnit,
    },
    /// There is no limit on the size of incoming request bodies.
    Disabled,
}

impl Default for BodySizeLimit {
    fn default() -> Self {
        Self::Enabled {
            max_size: 2.megabytes(),
        }
    }
}
