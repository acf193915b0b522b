// src/config.rs

use std::env;
use std::net::{IpAddr, SocketAddr};

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SERVER_HOST is not a valid IP address: {0}")]
    Host(String),
    #[error("SERVER_PORT is not a valid port: {0}")]
    Port(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://commenthub.db?mode=rwc".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let host = match env::var("SERVER_HOST") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Host(raw))?,
            Err(_) => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Port(raw))?,
            Err(_) => 8000,
        };

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Ok(Self {
            database_url,
            rust_log,
            host,
            port,
            log_dir,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
