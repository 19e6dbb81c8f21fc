//! An in-process [`AuthProvider`] to test pages in isolation.
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use web_runtime::cookie::{RequestCookies, ResponseCookies};

use super::{AuthError, AuthProvider, SessionUser, UserSession};

#[derive(Debug, Default)]
pub(crate) struct FakeAuth {
    session: Mutex<Option<UserSession>>,
    failing: bool,
    sign_out_calls: AtomicUsize,
    signed_in: Mutex<Vec<SessionUser>>,
}

impl FakeAuth {
    pub(crate) fn signed_out() -> Self {
        Self::default()
    }

    pub(crate) fn signed_in_as(name: &str) -> Self {
        let session = UserSession {
            user: SessionUser::new(name),
            expires: jiff::Timestamp::MAX,
        };
        Self {
            session: Mutex::new(Some(session)),
            ..Default::default()
        }
    }

    /// Every operation fails.
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub(crate) fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn signed_in(&self) -> Vec<SessionUser> {
        self.signed_in.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AuthError> {
        if self.failing {
            return Err(AuthError::Other(anyhow::anyhow!("The provider is down")));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AuthProvider for FakeAuth {
    async fn session(
        &self,
        _request_cookies: &RequestCookies<'_>,
    ) -> Result<Option<UserSession>, AuthError> {
        self.check()?;
        Ok(self.session.lock().unwrap().clone())
    }

    async fn sign_in(
        &self,
        user: SessionUser,
        _response_cookies: &mut ResponseCookies<'static>,
    ) -> Result<UserSession, AuthError> {
        self.check()?;
        let session = UserSession {
            user: user.clone(),
            expires: jiff::Timestamp::MAX,
        };
        self.signed_in.lock().unwrap().push(user);
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(
        &self,
        _request_cookies: &RequestCookies<'_>,
        _response_cookies: &mut ResponseCookies<'static>,
    ) -> Result<(), AuthError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
