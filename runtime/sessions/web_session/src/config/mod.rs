//! Types related to [`SessionConfig`].
mod cookie;

pub use cookie::{SessionCookieConfig, SessionCookieKind};

use crate::SessionId;
use web_runtime::cookie::{RemovalCookie, ResponseCookie};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
/// Configure how sessions are managed.
///
/// ```yaml
/// session:
///   ttl: 12h
///   cookie:
///     name: session
///     secure: false
/// ```
pub struct SessionConfig {
    /// Configure the session cookie.
    #[serde(default)]
    pub cookie: SessionCookieConfig,
    /// The time-to-live of a session, i.e. how long the server-side
    /// record is kept in the storage backend.
    ///
    /// It's also used as the `Max-Age` of the session cookie if
    /// [`SessionCookieConfig::kind`] is set to [`SessionCookieKind::Persistent`].
    ///
    /// # Default
    ///
    /// The default value is 24 hours.
    #[serde(with = "humantime_serde", default = "default_ttl")]
    pub ttl: std::time::Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie: SessionCookieConfig::default(),
            ttl: default_ttl(),
        }
    }
}

fn default_ttl() -> std::time::Duration {
    std::time::Duration::from_secs(60 * 60 * 24)
}

impl SessionConfig {
    /// Build the cookie that carries `id` to the client.
    ///
    /// All attributes follow [`SessionConfig::cookie`].
    pub fn session_cookie(&self, id: &SessionId) -> ResponseCookie<'static> {
        let cookie_config = &self.cookie;
        let mut cookie = ResponseCookie::new(cookie_config.name.clone(), id.to_string());
        if let Some(domain) = cookie_config.domain.as_deref() {
            cookie = cookie.set_domain(domain.to_owned());
        }
        if let Some(path) = cookie_config.path.as_deref() {
            cookie = cookie.set_path(path.to_owned());
        }
        if let Some(same_site) = cookie_config.same_site {
            cookie = cookie.set_same_site(same_site);
        }
        if cookie_config.secure {
            cookie = cookie.set_secure(true);
        }
        if cookie_config.http_only {
            cookie = cookie.set_http_only(true);
        }
        if cookie_config.kind == SessionCookieKind::Persistent {
            let max_age =
                jiff::SignedDuration::try_from(self.ttl).unwrap_or(jiff::SignedDuration::MAX);
            cookie = cookie.set_max_age(max_age);
        }
        cookie
    }

    /// Build the cookie that tells the client to forget its session cookie.
    ///
    /// `Domain` and `Path` must match the ones of the session cookie,
    /// otherwise the client won't remove it.
    pub fn removal_cookie(&self) -> RemovalCookie<'static> {
        let cookie_config = &self.cookie;
        let mut cookie = RemovalCookie::new(cookie_config.name.clone());
        if let Some(domain) = cookie_config.domain.as_deref() {
            cookie = cookie.set_domain(domain.to_owned());
        }
        if let Some(path) = cookie_config.path.as_deref() {
            cookie = cookie.set_path(path.to_owned());
        }
        cookie
    }
}
