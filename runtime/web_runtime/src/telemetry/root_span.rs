/// The root span for the current request.
///
/// All spans and events emitted while processing the request are its
/// descendants. It's the place to record request-wide information, such as
/// the response status code or the details of an error.
#[derive(Debug, Clone)]
pub struct RootSpan(tracing::Span);

impl std::ops::Deref for RootSpan {
    type Target = tracing::Span;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl RootSpan {
    /// Wrap a span to mark it as the root span for the current request.
    pub fn new(span: tracing::Span) -> Self {
        Self(span)
    }

    pub fn inner(&self) -> &tracing::Span {
        &self.0
    }

    pub fn into_inner(self) -> tracing::Span {
        self.0
    }
}
