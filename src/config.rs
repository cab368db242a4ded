//! Server configuration from environment variables or a TOML file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::upstream::DEFAULT_SUN_API_BASE;

/// Map style served to the frontend.
pub const MAP_STYLE_URL: &str = "mapbox://styles/uladbohdan/ck30op2jk14fd1cmwszi4vksy";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the visits service.
    #[serde(default = "default_visits_api_base")]
    pub visits_api_base: String,
    /// Base URL of the sunrise-sunset service.
    #[serde(default = "default_sun_api_base")]
    pub sun_api_base: String,
    /// Map-provider access token handed to the frontend.
    #[serde(default)]
    pub mapbox_token: String,
    /// Optional counters dataset override; the bundled dataset is used when
    /// unset.
    #[serde(default)]
    pub counters_path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_visits_api_base() -> String {
    "http://localhost:4000".to_string()
}

fn default_sun_api_base() -> String {
    DEFAULT_SUN_API_BASE.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            visits_api_base: default_visits_api_base(),
            sun_api_base: default_sun_api_base(),
            mapbox_token: String::new(),
            counters_path: None,
        }
    }
}

impl ServerConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    /// - `VISITS_API_BASE` (optional): base URL of the visits service
    /// - `SUN_API_BASE` (optional): base URL of the sunrise-sunset service
    /// - `MAPBOX_ACCESS_TOKEN` (optional): token handed to the frontend
    /// - `COUNTERS_PATH` (optional): counters dataset override file
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();
        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| "PORT must be a valid port number".to_string())?,
            Err(_) => defaults.port,
        };
        let visits_api_base = env::var("VISITS_API_BASE").unwrap_or(defaults.visits_api_base);
        let sun_api_base = env::var("SUN_API_BASE").unwrap_or(defaults.sun_api_base);
        let mapbox_token = env::var("MAPBOX_ACCESS_TOKEN").unwrap_or_default();
        let counters_path = env::var("COUNTERS_PATH").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            visits_api_base,
            sun_api_base,
            mapbox_token,
            counters_path,
        })
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("failed to read config file {}: {}", path.display(), e))?;
        toml::from_str(&raw)
            .map_err(|e| format!("failed to parse config file {}: {}", path.display(), e))
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
