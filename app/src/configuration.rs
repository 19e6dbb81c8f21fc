use web_runtime::cookie::ProcessorConfig;
use web_runtime::request::body::BodySizeLimit;
use web_session::SessionConfig;

use crate::session_cleanup::SessionCleanupConfig;

#[derive(serde::Deserialize, Debug, Clone, Default)]
/// The configuration object holding all the values required
/// to configure the application.
pub struct AppConfig {
    /// How sessions are stored and which cookie carries them.
    #[serde(default)]
    pub session: SessionConfig,
    /// How often expired sessions are purged from the store.
    #[serde(default)]
    pub session_cleanup: SessionCleanupConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    /// How request cookies are decoded and response cookies are encoded.
    #[serde(default)]
    pub cookies: ProcessorConfig,
    /// The maximum size of a request body, e.g. the sign-in form.
    #[serde(default)]
    pub body_size_limit: BodySizeLimit,
}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
/// Configuration for the sign-in and sign-out flows.
pub struct AuthConfig {
    /// Expose the development sign-in page at `/auth/signin`.
    ///
    /// It signs in any visitor under the name they type, without
    /// checking credentials. Turn it off in production.
    pub dev_sign_in: bool,
    /// Where to send the user after they have signed out.
    pub after_sign_out: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            dev_sign_in: true,
            after_sign_out: "/".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::time::Duration;

    #[test]
    fn every_section_is_optional() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(config.auth.dev_sign_in);
        assert_eq!(config.auth.after_sign_out, "/");
        assert_eq!(config.session.cookie.name, "id");
        assert_eq!(config.session.ttl, Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn default_config_hands_out_day_long_sessions() {
        let config = AppConfig::default();
        assert_eq!(config.session.ttl, Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn auth_settings_can_be_overridden() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "auth": { "dev_sign_in": false, "after_sign_out": "/bye" } }"#,
        )
        .unwrap();
        assert!(!config.auth.dev_sign_in);
        assert_eq!(config.auth.after_sign_out, "/bye");
    }
}
