use crate::{SessionId, config::SessionCookieConfig};
use web_runtime::cookie::RequestCookies;
use web_runtime::telemetry::fields::{ERROR_DETAILS, ERROR_MESSAGE, error_details, error_message};

/// The session information attached to the incoming request.
///
/// Built using [`IncomingSession::extract`].
#[derive(Debug, Clone)]
pub struct IncomingSession {
    id: SessionId,
}

impl IncomingSession {
    /// Extract the session id from the session cookie of the incoming request, if it exists.
    ///
    /// If the cookie is missing, or if its value is not a valid session id, this method returns `None`.
    pub fn extract(cookies: &RequestCookies<'_>, config: &SessionCookieConfig) -> Option<Self> {
        let cookie = cookies.get(&config.name)?;
        match cookie.value().parse::<SessionId>() {
            Ok(id) => Some(Self { id }),
            Err(e) => {
                tracing::event!(
                    tracing::Level::WARN,
                    { ERROR_MESSAGE } = error_message(&e),
                    { ERROR_DETAILS } = error_details(&e),
                    "Invalid session cookie, ignoring it."
                );
                None
            }
        }
    }

    /// Build an [`IncomingSession`] from a known session id.
    pub fn from_id(id: SessionId) -> Self {
        Self { id }
    }

    /// The session id carried by the incoming request.
    pub fn id(&self) -> SessionId {
        self.id
    }
}
