use poem::middleware::Cors;
use poem::session::CookieSession;

use super::{cors_config, server_config::ServerConfig, session_config};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub session: CookieSession,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            session: session_config::init_session(),
        }
    }
}
