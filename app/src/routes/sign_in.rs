//! A sign-in page for local development.
//!
//! Whoever submits the form is signed in under the name they typed.
//! There are no credentials to check.
use http_body::Body;
use web_runtime::Response;
use web_runtime::cookie::ResponseCookies;
use web_runtime::request::RequestHead;
use web_runtime::request::body::errors::{ExtractBufferedBodyError, ExtractUrlEncodedBodyError};
use web_runtime::request::body::{BodySizeLimit, BufferedBody, UrlEncodedBody};

use crate::auth::{AuthError, AuthProvider, SessionUser};
use crate::templates::{TemplateError, Templates};

const MISSING_NAME: &str = "Please enter a name.";

#[derive(Debug, serde::Deserialize)]
pub struct SignInForm {
    pub name: String,
}

/// Render the sign-in form.
pub fn get(templates: &Templates) -> Result<Response, TemplateError> {
    let page = templates.sign_in(None)?;
    Ok(Response::ok().set_typed_body(page))
}

/// Sign in under the submitted name, then go back to the home page.
///
/// Leading and trailing whitespace is trimmed.
/// A blank name re-renders the form with a `422 Unprocessable Entity`.
pub async fn post<B>(
    request_head: &RequestHead,
    body: B,
    body_size_limit: BodySizeLimit,
    auth: &dyn AuthProvider,
    response_cookies: &mut ResponseCookies<'static>,
    templates: &Templates,
) -> Result<Response, SignInError>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let buffered_body = BufferedBody::extract(request_head, body, body_size_limit).await?;
    let UrlEncodedBody(form) =
        UrlEncodedBody::<SignInForm>::extract(request_head, &buffered_body)?;

    let name = form.name.trim();
    if name.is_empty() {
        let page = templates.sign_in(Some(MISSING_NAME))?;
        return Ok(Response::unprocessable_entity().set_typed_body(page));
    }
    auth.sign_in(SessionUser::new(name), response_cookies)
        .await?;
    Ok(Response::see_other("/"))
}

#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error(transparent)]
    Body(#[from] ExtractBufferedBodyError),
    #[error(transparent)]
    Form(#[from] ExtractUrlEncodedBodyError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl SignInError {
    pub fn into_response(&self, templates: &Templates) -> Response {
        match self {
            SignInError::Body(e) => e.into_response(),
            SignInError::Form(e) => e.into_response(),
            SignInError::Auth(_) | SignInError::Template(_) => {
                super::internal_server_error(templates)
            }
        }
    }
}
