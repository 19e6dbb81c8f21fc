use anyhow::Context;
use app::{build_application_state, delete_expired_sessions, in_memory_session_store};
use server::{
    configuration::Config,
    telemetry::{get_subscriber, init_telemetry},
};
use web_runtime::server::{Server, ShutdownMode};
use web_runtime::telemetry::fields::{ERROR_DETAILS, ERROR_MESSAGE, error_details, error_message};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("info", std::io::stdout);
    init_telemetry(subscriber)?;

    // We isolate all the server setup and launch logic in a separate function
    // in order to have a single choke point where we make sure to log fatal errors
    // that will cause the application to exit.
    if let Err(e) = _main().await {
        tracing::event!(
            tracing::Level::ERROR,
            { ERROR_MESSAGE } = error_message(&e),
            { ERROR_DETAILS } = error_details(&e),
            "The application is exiting due to an error"
        )
    }

    Ok(())
}

async fn _main() -> anyhow::Result<()> {
    let config = Config::load(None)?;
    let session_store = in_memory_session_store();
    let application_state = build_application_state(&config.app, session_store.clone())
        .context("Failed to build the application state")?;
    tokio::spawn(delete_expired_sessions(
        session_store,
        config.app.session_cleanup.clone(),
    ));

    let tcp_listener = config
        .server
        .listener()
        .await
        .context("Failed to bind the server TCP listener")?;
    let address = tcp_listener
        .local_addr()
        .context("The server TCP listener doesn't have a local socket address")?;

    tracing::info!("Starting to listen for incoming requests at {}", address);
    let server_handle = Server::new()
        .listen(tcp_listener)
        .serve(app::route_request, application_state);

    let shutdown_handle = server_handle.clone();
    let timeout = config.server.graceful_shutdown_timeout;
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down, waiting up to {:?} for in-flight requests", timeout);
            shutdown_handle
                .shutdown(ShutdownMode::Graceful { timeout })
                .await;
        }
    });

    server_handle.await;
    Ok(())
}
