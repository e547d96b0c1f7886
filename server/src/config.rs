//! Host server configuration parsed from environment variables.
//!
//! Required:
//! - `ROVER_API_BASE_URL`: rover API the UI fetches from
//!
//! Optional:
//! - `PORT`: listen port, default 3000

use client::config::{ConfigError, RoverApiConfig};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error(transparent)]
    RoverApi(#[from] ConfigError),
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub rover_api: RoverApiConfig,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// # Errors
    ///
    /// Fails fast on a missing or invalid rover API base URL, or a `PORT`
    /// that is not a valid `u16`.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        let rover_api = RoverApiConfig::from_env()?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port, rover_api })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ServerConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
