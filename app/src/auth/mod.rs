//! Who is making the request.
//!
//! Pages never touch cookies or session records directly: they ask an
//! [`AuthProvider`] for the current [`UserSession`], and they call it again
//! to sign a user in or out.
#[cfg(test)]
pub(crate) mod fake;
mod session_auth;

pub use session_auth::SessionAuth;

use web_runtime::cookie::{RequestCookies, ResponseCookies};
use web_session::store::errors::{CreateError, DeleteError, LoadError};

/// The source of truth for authentication.
///
/// Implementations own the session lifecycle: they decide where sessions
/// live, how long they last and which cookies carry them.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// The session attached to the incoming request, if any.
    ///
    /// Missing, expired or unknown sessions are reported as `Ok(None)`.
    async fn session(
        &self,
        request_cookies: &RequestCookies<'_>,
    ) -> Result<Option<UserSession>, AuthError>;

    /// Start a new session for `user`.
    ///
    /// The cookies required to carry the session are added to `response_cookies`.
    async fn sign_in(
        &self,
        user: SessionUser,
        response_cookies: &mut ResponseCookies<'static>,
    ) -> Result<UserSession, AuthError>;

    /// Invalidate the session attached to the incoming request.
    ///
    /// Signing out without a session is not an error.
    async fn sign_out(
        &self,
        request_cookies: &RequestCookies<'_>,
        response_cookies: &mut ResponseCookies<'static>,
    ) -> Result<(), AuthError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An authenticated session, as seen by the pages.
pub struct UserSession {
    pub user: SessionUser,
    /// When the session stops being valid.
    pub expires: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The signed-in user.
pub struct SessionUser {
    /// The display name, shown as-is in the greeting.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }
}

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
/// The error returned by [`AuthProvider`] operations.
pub enum AuthError {
    #[error("Failed to load the session record")]
    Load(#[from] LoadError),
    #[error("Failed to create a session record")]
    Create(#[from] CreateError),
    #[error("Failed to delete the session record")]
    Delete(#[from] DeleteError),
    /// The session record exists, but its `user` entry can't be deserialized.
    #[error("The session record doesn't hold a valid user")]
    MalformedSession(#[source] serde_json::Error),
    #[error("Something went wrong in the authentication provider")]
    Other(#[source] anyhow::Error),
}
