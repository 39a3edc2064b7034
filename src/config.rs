use anyhow::{Context, Result};
use std::env;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .or_else(|_| env::var("EXPRESS_PORT"))
            .unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT '{}'", port))?;

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS '{}'", raw))?,
            Err(_) => 5,
        };

        debug!("Listen address: {}:{}", host, port);
        debug!("Database configured: {}", database_url.is_some());

        Ok(Self {
            host,
            port,
            database_url,
            max_connections,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
