use std::env;

use poem::middleware::Cors;

use super::{cors_config, server_config::ServerConfig};
use crate::api::params::parse_bool;

/// Everything the server needs from the environment, loaded once at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    /// Mount Swagger UI and the OpenAPI document (SERVICE_DOCS, default: true)
    pub docs_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            docs_enabled: parse_flag(env::var("SERVICE_DOCS").ok().as_deref(), true),
        }
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    raw.and_then(parse_bool).unwrap_or(default)
}
