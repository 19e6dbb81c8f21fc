//! The home page and its log-out action.
use web_runtime::Response;
use web_runtime::cookie::{RequestCookies, ResponseCookies};

use crate::auth::{AuthError, AuthProvider};
use crate::configuration::AuthConfig;
use crate::templates::{TemplateError, Templates};

/// Greet the signed-in user.
///
/// Visitors without a session get the not-found page.
pub async fn get(
    auth: &dyn AuthProvider,
    request_cookies: &RequestCookies<'_>,
    templates: &Templates,
) -> Result<Response, HomeError> {
    let Some(session) = auth.session(request_cookies).await? else {
        return Ok(Response::not_found().set_typed_body(templates.not_found()));
    };
    let page = templates.home(&session.user)?;
    Ok(Response::ok().set_typed_body(page))
}

/// Sign the user out, then send them to [`AuthConfig::after_sign_out`].
///
/// The log-out form on the home page submits here.
pub async fn post(
    auth: &dyn AuthProvider,
    request_cookies: &RequestCookies<'_>,
    response_cookies: &mut ResponseCookies<'static>,
    config: &AuthConfig,
) -> Result<Response, AuthError> {
    auth.sign_out(request_cookies, response_cookies).await?;
    Ok(Response::see_other(&config.after_sign_out))
}

#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl HomeError {
    pub fn into_response(&self, templates: &Templates) -> Response {
        super::internal_server_error(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::fake::FakeAuth;
    use web_runtime::http::StatusCode;
    use web_runtime::http::header::LOCATION;

    fn body(response: &Response) -> String {
        String::from_utf8(response.body().to_vec()).unwrap()
    }

    #[tokio::test]
    async fn visitors_without_a_session_get_a_404() {
        let templates = Templates::parse().unwrap();
        let auth = FakeAuth::signed_out();

        let response = get(&auth, &RequestCookies::new(), &templates)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body(&response);
        assert!(!body.contains("Hello"));
        assert!(!body.contains("Log Out"));
    }

    #[tokio::test]
    async fn signed_in_users_are_greeted_by_name() {
        let templates = Templates::parse().unwrap();
        let auth = FakeAuth::signed_in_as("Alice");

        let response = get(&auth, &RequestCookies::new(), &templates)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body(&response);
        assert!(body.contains("Hello Alice"));
        assert!(body.contains("Log Out"));
    }

    #[tokio::test]
    async fn provider_failures_are_not_a_missing_session() {
        let templates = Templates::parse().unwrap();
        let auth = FakeAuth::failing();

        let err = get(&auth, &RequestCookies::new(), &templates)
            .await
            .unwrap_err();

        assert!(matches!(err, HomeError::Auth(_)));
        assert_eq!(
            err.into_response(&templates).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn logging_out_signs_out_exactly_once() {
        let auth = FakeAuth::signed_in_as("Alice");
        let mut response_cookies = ResponseCookies::new();

        let response = post(
            &auth,
            &RequestCookies::new(),
            &mut response_cookies,
            &AuthConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(auth.sign_out_calls(), 1);
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/");
    }

    #[tokio::test]
    async fn logging_out_redirects_to_the_configured_location() {
        let auth = FakeAuth::signed_in_as("Alice");
        let config = AuthConfig {
            after_sign_out: "/goodbye".into(),
            ..Default::default()
        };

        let response = post(
            &auth,
            &RequestCookies::new(),
            &mut ResponseCookies::new(),
            &config,
        )
        .await
        .unwrap();

        assert_eq!(response.headers()[LOCATION], "/goodbye");
    }
}
