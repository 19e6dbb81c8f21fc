use crate::configuration::ApplicationProfile;
use anyhow::Context;
use app::configuration::AppConfig;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use std::net::SocketAddr;
use web_runtime::server::IncomingStream;

#[derive(serde::Deserialize, Debug, Clone)]
/// The top-level configuration object, determining the schema
/// we expect to see in the configuration files stored under `server/configuration`.
///
/// It bundles together the app configuration ([`AppConfig`]), visible to request handlers,
/// and the HTTP server configuration ([`ServerConfig`]), only used by the `main` entrypoint.
pub struct Config {
    pub server: ServerConfig,
    #[serde(flatten)]
    pub app: AppConfig,
}

impl Config {
    /// Retrieve the configuration by merging multiple configuration sources.
    ///
    /// # Hierarchy
    ///
    /// The configuration sources are, in increasing priority order:
    ///
    /// 1. `base.yml`, the values common to all profiles.
    /// 2. `<profile>.yml`, the values specific to the [`ApplicationProfile`].
    /// 3. Environment variables.
    ///
    /// The profile comes from the `APP_PROFILE` environment variable, falling back
    /// to `default_profile` if it isn't set.
    ///
    /// # Environment variables
    ///
    /// Every configuration value can be overridden with an environment variable.
    /// Variables must be prefixed with `APP_`, followed by the path to the value
    /// with `__` as separator.
    ///
    /// E.g. `APP_SERVER__PORT` for [`ServerConfig::port`] and `APP_SESSION__COOKIE__NAME`
    /// for the name of the session cookie.
    pub fn load(default_profile: Option<ApplicationProfile>) -> Result<Config, anyhow::Error> {
        let application_profile = ApplicationProfile::load(default_profile)
            .context("Failed to load the desired application profile")?;

        let configuration_dir = {
            let manifest_dir = env!(
                "CARGO_MANIFEST_DIR",
                "`CARGO_MANIFEST_DIR` was not set. Are you using a custom build system?"
            );
            std::path::Path::new(manifest_dir).join("configuration")
        };

        let base_filepath = configuration_dir.join("base.yml");

        let profile_filename = format!("{}.yml", application_profile.as_str());
        let profile_filepath = configuration_dir.join(profile_filename);

        let figment = Figment::new()
            .merge(Yaml::file(base_filepath))
            .merge(Yaml::file(profile_filepath))
            .merge(Env::prefixed("APP_").split("__"));

        let configuration: Config = figment
            .extract()
            .context("Failed to load hierarchical configuration")?;
        Ok(configuration)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
/// Configuration for the HTTP server.
pub struct ServerConfig {
    /// The port that the server must listen on.
    ///
    /// Set the `APP_SERVER__PORT` environment variable to override its value.
    pub port: u16,
    /// The network interface that the server must be bound to.
    ///
    /// E.g. `0.0.0.0` for listening to incoming requests from
    /// all sources.
    pub ip: std::net::IpAddr,
    /// How long in-flight requests are given to complete when the server
    /// is asked to shut down.
    ///
    /// E.g. `1 minute` for a 1 minute timeout.
    #[serde(with = "humantime_serde")]
    pub graceful_shutdown_timeout: std::time::Duration,
}

impl ServerConfig {
    /// Bind a TCP listener according to the specified parameters.
    pub async fn listener(&self) -> Result<IncomingStream, std::io::Error> {
        let addr = SocketAddr::new(self.ip, self.port);
        IncomingStream::bind(addr).await
    }
}
