//! Request handlers, one module per page.
pub mod home;
pub mod ping;
pub mod sign_in;

use web_runtime::http::Method;
use web_runtime::router::{Router, RouterError};

use crate::configuration::AuthConfig;
use crate::templates::Templates;
use web_runtime::Response;

/// Every route exposed by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    Home,
    /// `POST /`, submitted by the log-out form.
    SignOut,
    /// `GET /auth/signin`
    SignInForm,
    /// `POST /auth/signin`
    SignIn,
    /// `GET /api/ping`
    Ping,
}

/// Build the route table.
///
/// The sign-in routes are only registered when [`AuthConfig::dev_sign_in`] is enabled.
pub fn router(config: &AuthConfig) -> Result<Router<Route>, RouterError> {
    let mut routes = vec![
        (Method::GET, "/", Route::Home),
        (Method::POST, "/", Route::SignOut),
        (Method::GET, "/api/ping", Route::Ping),
    ];
    if config.dev_sign_in {
        routes.push((Method::GET, "/auth/signin", Route::SignInForm));
        routes.push((Method::POST, "/auth/signin", Route::SignIn));
    }
    Router::new(routes)
}

/// The generic error page, with a `500 Internal Server Error` status code.
///
/// Failure details are logged, never shown to the caller.
pub fn internal_server_error(templates: &Templates) -> Response {
    Response::internal_server_error().set_typed_body(templates.error())
}
