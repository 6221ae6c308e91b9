use std::env;

/// Bind address for the storefront HTTP listener.
///
/// Read from `SERVICE_IP` / `SERVICE_PORT`; defaults to `127.0.0.1:8080`
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            ip: env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string()),
        }
    }

    /// "ip:port", as handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
