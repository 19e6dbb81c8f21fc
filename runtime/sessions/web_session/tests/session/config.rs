//! Verify that all cookie settings behave as expected.
use googletest::{
    expect_that,
    matchers::anything,
    prelude::{eq, none, some},
};
use web_runtime::cookie::SameSite;
use web_session::{
    SessionConfig, SessionId,
    config::{SessionCookieConfig, SessionCookieKind},
};

#[googletest::test]
fn default_cookie_settings() {
    let config = SessionConfig::default();
    let id = SessionId::random();

    let cookie = config.session_cookie(&id);
    expect_that!(cookie.name(), eq("id"));
    expect_that!(cookie.value(), eq(id.to_string().as_str()));
    expect_that!(cookie.path(), some(eq("/")));
    expect_that!(cookie.domain(), none());
    expect_that!(cookie.http_only(), some(eq(true)));
    expect_that!(cookie.secure(), some(eq(true)));
    expect_that!(cookie.same_site(), some(eq(SameSite::Lax)));
    expect_that!(cookie.max_age(), some(anything()));
}

#[googletest::test]
fn sessions_last_a_day_by_default() {
    let day = std::time::Duration::from_secs(24 * 60 * 60);

    let config = SessionConfig::default();
    expect_that!(config.ttl, eq(day));
    let cookie = config.session_cookie(&SessionId::random());
    expect_that!(
        cookie.max_age(),
        some(eq(jiff::SignedDuration::from_hours(24)))
    );

    let deserialized: SessionConfig = serde_json::from_str("{}").unwrap();
    expect_that!(deserialized.ttl, eq(day));
}

#[googletest::test]
fn cookie_attributes_can_be_changed() {
    let mut config = SessionConfig::default();
    config.cookie.name = "my-custom-cookie-name".into();
    config.cookie.domain = Some("my-domain.com".into());
    config.cookie.path = Some("/custom-path".into());
    config.cookie.secure = false;
    config.cookie.http_only = false;
    config.cookie.same_site = Some(SameSite::Strict);
    config.cookie.kind = SessionCookieKind::Session;

    let cookie = config.session_cookie(&SessionId::random());
    expect_that!(cookie.name(), eq(config.cookie.name.as_str()));
    expect_that!(cookie.domain(), eq(config.cookie.domain.as_deref()));
    expect_that!(cookie.path(), eq(config.cookie.path.as_deref()));
    expect_that!(cookie.secure(), none());
    expect_that!(cookie.http_only(), none());
    expect_that!(cookie.same_site(), eq(config.cookie.same_site));
    expect_that!(cookie.max_age(), none());
}

#[test]
fn removal_cookie_matches_the_session_cookie_scope() {
    let mut config = SessionConfig::default();
    config.cookie.domain = Some("my-domain.com".into());

    let cookie = config.removal_cookie();
    assert_eq!(cookie.name(), "id");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.domain(), Some("my-domain.com"));
}

#[test]
fn config_can_be_deserialized_with_defaults() {
    let config: SessionConfig = serde_json::from_str(
        r#"{ "ttl": "12h", "cookie": { "same_site": "strict", "secure": false } }"#,
    )
    .unwrap();
    assert_eq!(config.ttl, std::time::Duration::from_secs(12 * 60 * 60));
    assert_eq!(config.cookie.same_site, Some(SameSite::Strict));
    assert!(!config.cookie.secure);
    assert_eq!(config.cookie.name, "id");
    assert_eq!(config.cookie.kind, SessionCookieKind::Persistent);

    let default_config: SessionCookieConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(default_config.same_site, Some(SameSite::Lax));
}

#[test]
fn unknown_same_site_values_are_rejected() {
    let outcome = serde_json::from_str::<SessionCookieConfig>(r#"{ "same_site": "sometimes" }"#);
    assert!(outcome.is_err());
}
