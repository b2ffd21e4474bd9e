//! Gateway configuration
//!
//! Layered: built-in defaults, then an optional config file, then
//! `ESP32_PANEL_*` environment variables.

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming an alternative config file
pub const CONFIG_FILE_ENV: &str = "ESP32_PANEL_CONFIG";

/// Config file looked up in the working directory (any supported extension)
const DEFAULT_CONFIG_FILE: &str = "esp32-panel";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the device that answers `/api/*`
    #[serde(default = "default_device_url")]
    pub device_url: String,

    /// Directory holding the compiled web UI (index.html + wasm bundle)
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            device_url: default_device_url(),
            assets_dir: default_assets_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

// ESP32 soft-AP address
fn default_device_url() -> String {
    "http://192.168.4.1".to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn load_config() -> Result<Config> {
    let file = std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    load_config_from(&file)
}

/// Load using `file` as the config file name (extension optional).
pub fn load_config_from(file: &str) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        // Load from config file if it exists
        .add_source(::config::File::with_name(file).required(false))
        // Override with environment variables (ESP32_PANEL_PORT, ESP32_PANEL_DEVICE_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("ESP32_PANEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
