//! Map an incoming path and method to a route.
use std::collections::BTreeMap;
use std::fmt;

use http::header::ALLOW;
use http::{HeaderValue, Method};

use crate::Response;

/// A path router that resolves to a route identifier of type `R`.
///
/// Path matching is delegated to [`matchit`]. Each path pattern carries
/// the list of methods it supports, which is used to tell apart
/// a missing route (`404`) from an unsupported method (`405`).
///
/// `HEAD` requests are served by the `GET` route of a path, unless
/// a dedicated `HEAD` route was registered.
///
/// ```rust
/// use web_runtime::router::{Router, RouteMatch};
/// use web_runtime::http::Method;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Route { Home, SignOut }
///
/// let router = Router::new([
///     (Method::GET, "/", Route::Home),
///     (Method::POST, "/", Route::SignOut),
/// ]).unwrap();
///
/// assert!(matches!(router.at(&Method::POST, "/"), RouteMatch::Found { route: Route::SignOut, .. }));
/// assert!(matches!(router.at(&Method::GET, "/missing"), RouteMatch::NotFound));
/// ```
#[derive(Debug, Clone)]
pub struct Router<R> {
    inner: matchit::Router<PathRoutes<R>>,
}

#[derive(Debug, Clone)]
struct PathRoutes<R> {
    pattern: &'static str,
    methods: Vec<(Method, R)>,
}

/// The outcome of [`Router::at`].
#[derive(Debug)]
pub enum RouteMatch<R> {
    /// There is a route for this path and method.
    Found {
        route: R,
        /// The path pattern that matched, e.g. `/auth/signin`.
        pattern: &'static str,
    },
    /// The path is known, but it doesn't support the request method.
    MethodNotAllowed(AllowedMethods),
    /// No route matches the path.
    NotFound,
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to register `{method} {pattern}` with the router")]
/// The error returned by [`Router::new`] when a path pattern is rejected.
pub struct RouterError {
    method: Method,
    pattern: &'static str,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl<R: Copy> Router<R> {
    /// Build a router from a list of `(method, path pattern, route)` triples.
    ///
    /// Registering the same method twice for the same pattern is an error.
    pub fn new<I>(routes: I) -> Result<Self, RouterError>
    where
        I: IntoIterator<Item = (Method, &'static str, R)>,
    {
        let mut by_pattern: BTreeMap<&'static str, Vec<(Method, R)>> = BTreeMap::new();
        for (method, pattern, route) in routes {
            let methods = by_pattern.entry(pattern).or_default();
            if methods.iter().any(|(m, _)| m == method) {
                return Err(RouterError {
                    source: format!("`{method}` is already registered for `{pattern}`").into(),
                    method,
                    pattern,
                });
            }
            methods.push((method, route));
        }

        let mut inner = matchit::Router::new();
        for (pattern, methods) in by_pattern {
            let method = methods
                .first()
                .map(|(m, _)| m.clone())
                .unwrap_or(Method::GET);
            inner
                .insert(pattern, PathRoutes { pattern, methods })
                .map_err(|e| RouterError {
                    method,
                    pattern,
                    source: Box::new(e),
                })?;
        }
        Ok(Self { inner })
    }

    /// Resolve `path` and `method` to a route.
    pub fn at(&self, method: &Method, path: &str) -> RouteMatch<R> {
        let Ok(matched) = self.inner.at(path) else {
            return RouteMatch::NotFound;
        };
        let routes = matched.value;
        let route = routes.route_for(method).or_else(|| {
            if *method == Method::HEAD {
                routes.route_for(&Method::GET)
            } else {
                None
            }
        });
        match route {
            Some(route) => RouteMatch::Found {
                route,
                pattern: routes.pattern,
            },
            None => RouteMatch::MethodNotAllowed(routes.allowed_methods()),
        }
    }
}

impl<R: Copy> PathRoutes<R> {
    fn route_for(&self, method: &Method) -> Option<R> {
        self.methods
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, route)| *route)
    }

    fn allowed_methods(&self) -> AllowedMethods {
        let mut allowed = Vec::with_capacity(self.methods.len() + 1);
        for (method, _) in &self.methods {
            allowed.push(method.clone());
            if *method == Method::GET && self.route_for(&Method::HEAD).is_none() {
                allowed.push(Method::HEAD);
            }
        }
        AllowedMethods(allowed)
    }
}

/// The set of methods supported by a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedMethods(Vec<Method>);

impl AllowedMethods {
    /// Iterate over the allowed methods, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.0.iter()
    }

    /// The value of the `Allow` header, e.g. `GET, HEAD, POST`.
    pub fn allow_header_value(&self) -> HeaderValue {
        // Method names are always valid header values.
        HeaderValue::from_str(&self.to_string()).unwrap_or(HeaderValue::from_static(""))
    }

    /// A `405 Method Not Allowed` response with the `Allow` header set.
    pub fn into_response(&self) -> Response {
        Response::method_not_allowed().insert_header(ALLOW, self.allow_header_value())
    }
}

impl fmt::Display for AllowedMethods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, method) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(method.as_str())?;
        }
        Ok(())
    }
}
