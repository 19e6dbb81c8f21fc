//! The application state and the entrypoint for every request.
use std::sync::Arc;

use http_body::Body;
use tracing::Instrument;
use web_runtime::cookie::errors::{ExtractRequestCookiesError, InjectResponseCookiesError};
use web_runtime::cookie::{
    Processor, ResponseCookies, extract_request_cookies, inject_response_cookies,
};
use web_runtime::request::RequestHead;
use web_runtime::request::body::RawIncomingBody;
use web_runtime::router::{RouteMatch, Router, RouterError};
use web_runtime::telemetry::{RootSpan, ServerRequestId};
use web_runtime::{Response, http};
use web_session::SessionStore;
use web_session_memory_store::InMemorySessionStore;

use crate::auth::{AuthProvider, SessionAuth};
use crate::configuration::AppConfig;
use crate::routes::{self, Route};
use crate::telemetry;
use crate::templates::{TemplateError, Templates};

/// Everything a request handler may need, shared across all requests.
#[derive(Clone)]
pub struct ApplicationState {
    auth: Arc<dyn AuthProvider>,
    config: Arc<AppConfig>,
    templates: Arc<Templates>,
    router: Arc<Router<Route>>,
    cookie_processor: Arc<Processor>,
}

impl std::fmt::Debug for ApplicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
/// The error returned by [`build_application_state`].
pub enum ApplicationStateError {
    #[error("Failed to build the route table")]
    Router(#[from] RouterError),
    #[error(transparent)]
    Templates(#[from] TemplateError),
}

impl ApplicationState {
    /// Assemble the application state around a given [`AuthProvider`].
    pub fn new(
        config: AppConfig,
        auth: Arc<dyn AuthProvider>,
    ) -> Result<Self, ApplicationStateError> {
        let router = routes::router(&config.auth)?;
        let templates = Templates::parse()?;
        let cookie_processor = Processor::from(config.cookies.clone());
        Ok(Self {
            auth,
            templates: Arc::new(templates),
            router: Arc::new(router),
            cookie_processor: Arc::new(cookie_processor),
            config: Arc::new(config),
        })
    }
}

/// A session store keeping its records in the memory of the current process.
pub fn in_memory_session_store() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(InMemorySessionStore::default()))
}

/// Build the application state, with sessions kept in `store`.
///
/// The same store should be handed to
/// [`delete_expired_sessions`](crate::session_cleanup::delete_expired_sessions).
pub fn build_application_state(
    config: &AppConfig,
    store: Arc<SessionStore>,
) -> Result<ApplicationState, ApplicationStateError> {
    let auth = SessionAuth::new(store, config.session.clone());
    ApplicationState::new(config.clone(), Arc::new(auth))
}

/// The request handler passed to [`Server::serve`](web_runtime::server::Server::serve).
pub async fn route_request(
    request: http::Request<RawIncomingBody>,
    state: ApplicationState,
) -> Response {
    handle_request(request, state).await
}

/// Route `request`, run the matching handler and post-process its response.
///
/// Every step runs inside the request's [`RootSpan`].
pub async fn handle_request<B>(request: http::Request<B>, state: ApplicationState) -> Response
where
    B: Body + Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let request_id = ServerRequestId::generate();
    let (parts, body) = request.into_parts();
    let request_head = RequestHead::from(parts);

    let matched = state
        .router
        .at(&request_head.method, request_head.target.path());
    let pattern = match &matched {
        RouteMatch::Found { pattern, .. } => Some(*pattern),
        _ => None,
    };
    let root_span = telemetry::root_span(&request_head, pattern, request_id);

    let response = dispatch(&request_head, body, matched, &state, &root_span)
        .instrument(root_span.inner().clone())
        .await;
    let response = response.insert_header(
        http::HeaderName::from_static("x-request-id"),
        request_id.header_value(),
    );
    telemetry::response_logger(response, &root_span)
}

async fn dispatch<B>(
    request_head: &RequestHead,
    body: B,
    matched: RouteMatch<Route>,
    state: &ApplicationState,
    root_span: &RootSpan,
) -> Response
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let templates = &*state.templates;
    let request_cookies = match extract_request_cookies(request_head, &state.cookie_processor) {
        Ok(cookies) => cookies,
        Err(e) => return observe(e, ExtractRequestCookiesError::into_response, root_span),
    };
    let mut response_cookies = ResponseCookies::new();
    let auth = &*state.auth;

    let response = match matched {
        RouteMatch::NotFound => Response::not_found().set_typed_body(templates.not_found()),
        RouteMatch::MethodNotAllowed(allowed) => allowed.into_response(),
        RouteMatch::Found { route, .. } => match route {
            Route::Home => match routes::home::get(auth, &request_cookies, templates).await {
                Ok(response) => response,
                Err(e) => observe(e, |e| e.into_response(templates), root_span),
            },
            Route::SignOut => {
                match routes::home::post(
                    auth,
                    &request_cookies,
                    &mut response_cookies,
                    &state.config.auth,
                )
                .await
                {
                    Ok(response) => response,
                    Err(e) => observe(e, |_| routes::internal_server_error(templates), root_span),
                }
            }
            Route::SignInForm => match routes::sign_in::get(templates) {
                Ok(response) => response,
                Err(e) => observe(e, |_| routes::internal_server_error(templates), root_span),
            },
            Route::SignIn => {
                match routes::sign_in::post(
                    request_head,
                    body,
                    state.config.body_size_limit,
                    auth,
                    &mut response_cookies,
                    templates,
                )
                .await
                {
                    Ok(response) => response,
                    Err(e) => observe(e, |e| e.into_response(templates), root_span),
                }
            }
            Route::Ping => routes::ping::get(),
        },
    };

    match inject_response_cookies(response, response_cookies, &state.cookie_processor) {
        Ok(response) => response,
        Err(e) => observe(e, InjectResponseCookiesError::into_response, root_span),
    }
}

/// Convert a handler error into its response, then report it to the error observer.
fn observe<E, F>(e: E, to_response: F, root_span: &RootSpan) -> Response
where
    E: std::error::Error + Send + Sync + 'static,
    F: FnOnce(&E) -> Response,
{
    let response = to_response(&e);
    telemetry::error_logger(&web_runtime::Error::new(e), root_span);
    response
}
