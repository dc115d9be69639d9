//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    /// Path of the JSON document backing the repository.
    pub store_path: String,
    pub templates_dir: String,
    /// Secret shared with the auth service; signs sessions and verifies JWTs.
    pub secret: String,
    pub auth_service_url: String,
}
