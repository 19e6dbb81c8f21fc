use app::{build_application_state, in_memory_session_store};
use server::configuration::{ApplicationProfile, Config};
use std::sync::Once;
use tracing::subscriber::set_global_default;
use tracing_subscriber::EnvFilter;
use web_runtime::server::Server;

pub struct TestApi {
    pub api_address: String,
    pub api_client: reqwest::Client,
}

impl TestApi {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn the server after tweaking its configuration.
    pub async fn spawn_with(customize: impl FnOnce(&mut Config)) -> Self {
        Self::init_telemetry();
        let mut config = Self::get_config();
        customize(&mut config);

        let application_state = build_application_state(&config.app, in_memory_session_store())
            .expect("Failed to build the application state");

        let tcp_listener = config
            .server
            .listener()
            .await
            .expect("Failed to bind the server TCP listener");
        let address = tcp_listener
            .local_addr()
            .expect("The server TCP listener doesn't have a local socket address");
        Server::new()
            .listen(tcp_listener)
            .serve(app::route_request, application_state);

        let api_client = reqwest::Client::builder()
            // Sessions are carried by cookies.
            .cookie_store(true)
            // We want to assert on redirects, not follow them.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build the HTTP client");

        TestApi {
            api_address: format!("http://{}:{}", config.server.ip, address.port()),
            api_client,
        }
    }

    /// Load the dev configuration and tweak it to ensure that tests are
    /// properly isolated from each other.
    fn get_config() -> Config {
        let mut config =
            Config::load(Some(ApplicationProfile::Dev)).expect("Failed to load test configuration");
        // We use port `0` to get the operating system to assign us a random port.
        // This lets us run tests in parallel without running into "port X is already in use"
        // errors.
        config.server.port = 0;
        config
    }

    fn init_telemetry() {
        // Initialize the telemetry setup at most once.
        static INIT_TELEMETRY: Once = Once::new();
        INIT_TELEMETRY.call_once(|| {
            // Only enable the telemetry if the `TEST_LOG` environment variable is set.
            if std::env::var("TEST_LOG").is_ok() {
                let subscriber = tracing_subscriber::fmt::Subscriber::builder()
                    .with_env_filter(
                        EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info")),
                    )
                    .finish();
                // We don't redirect panic messages to the `tracing` subsystem because
                // we want to see them in the test output.
                set_global_default(subscriber).expect("Failed to set a `tracing` global subscriber")
            }
        });
    }
}

/// Convenient methods for calling the API under test.
impl TestApi {
    pub async fn get_home(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/", &self.api_address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Submit the log-out form.
    pub async fn post_log_out(&self) -> reqwest::Response {
        self.api_client
            .post(format!("{}/", &self.api_address))
            .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_sign_in(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/auth/signin", &self.api_address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_sign_in(&self, name: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/auth/signin", &self.api_address))
            .form(&[("name", name)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_ping(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/ping", &self.api_address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Sign in as `name` and check that it worked.
    pub async fn sign_in_as(&self, name: &str) {
        let response = self.post_sign_in(name).await;
        assert_eq!(response.status().as_u16(), 303);
    }
}
