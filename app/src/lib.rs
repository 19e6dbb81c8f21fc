//! The home page service.
//!
//! `GET /` greets the signed-in user and offers a log-out form, which posts
//! back to `/`. Visitors without a session get a not-found page.
//!
//! The building blocks:
//!
//! - [`auth`]: the [`AuthProvider`](auth::AuthProvider) abstraction and its session-backed implementation.
//! - [`routes`]: the request handlers and the route table.
//! - [`templates`]: the HTML pages.
//! - [`application`]: the application state and the request dispatcher handed over to the server.
//! - [`session_cleanup`]: the background task purging expired sessions.
pub mod application;
pub mod auth;
pub mod configuration;
pub mod routes;
pub mod session_cleanup;
pub mod telemetry;
pub mod templates;

pub use application::{
    ApplicationState, ApplicationStateError, build_application_state, in_memory_session_store,
    route_request,
};
pub use session_cleanup::delete_expired_sessions;
