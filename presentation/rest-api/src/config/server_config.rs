use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080; unparseable values fall back to it)
    pub fn from_env() -> Self {
        Self::parse(
            env::var("SERVICE_IP").ok(),
            env::var("SERVICE_PORT").ok().as_deref(),
        )
    }

    fn parse(ip: Option<String>, port: Option<&str>) -> Self {
        let ip = ip
            .filter(|ip| !ip.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = port
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        let config = ServerConfig::parse(Some("0.0.0.0".to_string()), Some("3000"));

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn should_fall_back_to_defaults() {
        let config = ServerConfig::parse(None, Some("eighty"));

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
