use std::env;
use std::str::FromStr;

use tracing::warn;

const DEFAULT_DB_URL: &str = "sqlite://items.db?mode=rwc";
const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:8000",
    "http://localhost:3000",
    "http://127.0.0.1:5500",
];

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
    pub db_max_connections: u32,
    pub cors: CorsConfig,
}

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            db_url: DEFAULT_DB_URL.to_string(),
            db_max_connections: 5,
            cors: CorsConfig {
                allowed_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            },
        }
    }
}

impl EnvConfig {
    fn get_env(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    fn parse_env<T: FromStr>(key: &str, default: T) -> T {
        match Self::get_env(key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("{} has an invalid value {:?}, using default", key, raw);
                default
            }),
            None => default,
        }
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = EnvConfig::default();

        let allowed_origins = match Self::get_env("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => defaults.cors.allowed_origins,
        };

        EnvConfig {
            host: Self::get_env("HOST").unwrap_or(defaults.host),
            port: Self::parse_env("PORT", defaults.port),
            db_url: Self::get_env("DATABASE_URL").unwrap_or(defaults.db_url),
            db_max_connections: Self::parse_env("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            cors: CorsConfig { allowed_origins },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.to_string())
        .collect()
}
