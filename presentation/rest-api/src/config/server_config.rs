use std::env;

use tracing::warn;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Server configuration for HTTP listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = match lookup("SERVICE_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid SERVICE_PORT, falling back to {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    pub fn public_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: 9000,
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "0.0.0.0:9000");
        assert_eq!(config.public_url(), "http://0.0.0.0:9000");
    }

    #[test]
    fn should_use_defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup_in(&[]));

        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn should_read_ip_and_port_from_environment() {
        let config =
            ServerConfig::from_lookup(lookup_in(&[("SERVICE_IP", "0.0.0.0"), ("SERVICE_PORT", "8081")]));

        assert_eq!(
            config,
            ServerConfig {
                ip: "0.0.0.0".to_string(),
                port: 8081,
            }
        );
    }

    #[test]
    fn should_fall_back_to_default_port_when_unparsable() {
        let config = ServerConfig::from_lookup(lookup_in(&[("SERVICE_PORT", "eighty")]));

        assert_eq!(config.port, 8000);
    }
}
