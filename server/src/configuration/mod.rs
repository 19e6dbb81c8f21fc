//! Everything needed to load the server configuration.
mod profile;
mod schema;

pub use profile::ApplicationProfile;
pub use schema::{Config, ServerConfig};
