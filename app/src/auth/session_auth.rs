use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use jiff::Timestamp;
use web_runtime::cookie::{RequestCookies, ResponseCookies};
use web_session::store::SessionRecordRef;
use web_session::store::errors::{CreateError, DeleteError};
use web_session::{IncomingSession, SessionConfig, SessionId, SessionStore};

use super::{AuthError, AuthProvider, SessionUser, UserSession};

/// The key the signed-in user is stored under, in the session state.
const USER_KEY: &str = "user";

/// An [`AuthProvider`] backed by server-side sessions.
///
/// The session cookie carries a [`SessionId`]; the user lives in the
/// [`SessionStore`] record for that id.
#[derive(Debug, Clone)]
pub struct SessionAuth {
    store: Arc<SessionStore>,
    config: SessionConfig,
}

impl SessionAuth {
    pub fn new(store: Arc<SessionStore>, config: SessionConfig) -> Self {
        Self { store, config }
    }
}

#[async_trait::async_trait]
impl AuthProvider for SessionAuth {
    #[tracing::instrument(name = "Load session", level = tracing::Level::DEBUG, skip_all)]
    async fn session(
        &self,
        request_cookies: &RequestCookies<'_>,
    ) -> Result<Option<UserSession>, AuthError> {
        let Some(incoming) = IncomingSession::extract(request_cookies, &self.config.cookie) else {
            return Ok(None);
        };
        let Some(record) = self.store.load(&incoming.id()).await? else {
            tracing::debug!("Unknown or expired session id");
            return Ok(None);
        };
        let user = record
            .get::<SessionUser>(USER_KEY)
            .map_err(AuthError::MalformedSession)?;
        Ok(user.map(|user| UserSession {
            user,
            expires: expires_after(record.ttl),
        }))
    }

    #[tracing::instrument(name = "Sign in", level = tracing::Level::DEBUG, skip_all)]
    async fn sign_in(
        &self,
        user: SessionUser,
        response_cookies: &mut ResponseCookies<'static>,
    ) -> Result<UserSession, AuthError> {
        let id = SessionId::random();
        let user_value = serde_json::to_value(&user).map_err(CreateError::from)?;
        let state = HashMap::from([(USER_KEY.to_owned(), user_value)]);
        let record = SessionRecordRef {
            state: std::borrow::Cow::Owned(state),
            ttl: self.config.ttl,
        };
        self.store.create(&id, record).await?;
        response_cookies.insert(self.config.session_cookie(&id));
        Ok(UserSession {
            user,
            expires: expires_after(self.config.ttl),
        })
    }

    #[tracing::instrument(name = "Sign out", level = tracing::Level::DEBUG, skip_all)]
    async fn sign_out(
        &self,
        request_cookies: &RequestCookies<'_>,
        response_cookies: &mut ResponseCookies<'static>,
    ) -> Result<(), AuthError> {
        // The client must forget the cookie even if the record is already gone.
        response_cookies.insert(self.config.removal_cookie());
        let Some(incoming) = IncomingSession::extract(request_cookies, &self.config.cookie) else {
            return Ok(());
        };
        match self.store.delete(&incoming.id()).await {
            Ok(()) | Err(DeleteError::UnknownId(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn expires_after(ttl: Duration) -> Timestamp {
    Timestamp::now()
        .checked_add(ttl)
        .unwrap_or(Timestamp::MAX)
}
