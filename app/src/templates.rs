//! The HTML pages served by the application.
//!
//! Templates are [`liquid`] documents embedded in the binary and parsed once,
//! when the application state is built.
//! Values provided by users must go through the `escape` filter.
use liquid::model::Value;
use liquid::{Object, ParserBuilder, Template};
use web_runtime::response::body::Html;

use crate::auth::SessionUser;

const HOME: &str = include_str!("../templates/home.html");
const SIGN_IN: &str = include_str!("../templates/sign_in.html");
const NOT_FOUND: &str = include_str!("../templates/not_found.html");
const ERROR: &str = include_str!("../templates/error.html");

/// The parsed page templates.
pub struct Templates {
    home: Template,
    sign_in: Template,
    // Pages without variables are rendered upfront.
    not_found: Html,
    error: Html,
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates").finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to parse the `{name}` template")]
    Parse {
        name: &'static str,
        #[source]
        source: liquid::Error,
    },
    #[error("Failed to render the `{name}` template")]
    Render {
        name: &'static str,
        #[source]
        source: liquid::Error,
    },
}

impl Templates {
    /// Parse all templates.
    pub fn parse() -> Result<Self, TemplateError> {
        let parser = ParserBuilder::with_stdlib()
            .build()
            .map_err(|source| TemplateError::Parse {
                name: "<parser>",
                source,
            })?;
        let parse = |name: &'static str, source: &str| {
            parser
                .parse(source)
                .map_err(|source| TemplateError::Parse { name, source })
        };
        let empty = Object::new();
        let render_static = |name: &'static str, source: &str| -> Result<Html, TemplateError> {
            let page = parse(name, source)?
                .render(&empty)
                .map_err(|source| TemplateError::Render { name, source })?;
            Ok(page.into())
        };

        Ok(Self {
            home: parse("home", HOME)?,
            sign_in: parse("sign_in", SIGN_IN)?,
            not_found: render_static("not_found", NOT_FOUND)?,
            error: render_static("error", ERROR)?,
        })
    }

    /// The greeting for a signed-in user, with the log-out form.
    pub fn home(&self, user: &SessionUser) -> Result<Html, TemplateError> {
        let mut globals = Object::new();
        globals.insert("name".into(), Value::Scalar(user.name.clone().into()));
        render(&self.home, "home", &globals)
    }

    /// The development sign-in form, optionally with an error message.
    pub fn sign_in(&self, error: Option<&str>) -> Result<Html, TemplateError> {
        let mut globals = Object::new();
        let error = match error {
            Some(e) => Value::Scalar(e.to_owned().into()),
            None => Value::Nil,
        };
        globals.insert("error".into(), error);
        render(&self.sign_in, "sign_in", &globals)
    }

    pub fn not_found(&self) -> Html {
        self.not_found.clone()
    }

    /// The page shown when a request fails on the server side.
    pub fn error(&self) -> Html {
        self.error.clone()
    }
}

fn render(template: &Template, name: &'static str, globals: &Object) -> Result<Html, TemplateError> {
    template
        .render(globals)
        .map(Html::from)
        .map_err(|source| TemplateError::Render { name, source })
}
