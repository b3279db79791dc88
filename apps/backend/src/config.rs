//! Server configuration from environment variables.
//!
//! Environment variables must be set by the runtime environment
//! (docker-compose env_file, or sourced env files in local dev).

use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_GAME_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Idle games past this age with no live channel are reaped.
    pub game_ttl: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number: {raw}"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let ttl_secs = match env::var("GAME_TTL_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::config(format!("GAME_TTL_SECS must be a number of seconds: {raw}"))
            })?,
            Err(_) => DEFAULT_GAME_TTL_SECS,
        };

        Ok(Self {
            host,
            port,
            game_ttl: Duration::from_secs(ttl_secs),
        })
    }
}
