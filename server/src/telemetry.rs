//! Install the `tracing` subscriber for the server process.
use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Compose a `tracing` subscriber that writes human-readable logs to `sink`.
///
/// The verbosity is controlled by the `RUST_LOG` environment variable,
/// falling back to `default_env_filter` when it isn't set.
/// A line is emitted whenever a span closes, which gives one line per
/// request with its status code and duration.
pub fn get_subscriber<Sink>(
    default_env_filter: &str,
    sink: Sink,
) -> impl Subscriber + Send + Sync + use<Sink>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_env_filter));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(sink)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE);
    Registry::default().with(env_filter).with(fmt_layer)
}

/// Register `subscriber` as the global default.
///
/// It fails if a global subscriber has already been set.
pub fn init_telemetry(
    subscriber: impl Subscriber + Send + Sync + 'static,
) -> Result<(), anyhow::Error> {
    set_global_default(subscriber)?;
    Ok(())
}
