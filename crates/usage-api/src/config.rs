//! Configuration for the usage API.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Upstream copilot sources
    #[serde(default)]
    pub copilot: CopilotConfig,

    /// Usage aggregation settings
    #[serde(default)]
    pub usage: UsageConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Cross-origin access
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CopilotConfig {
    /// Message listing for the current billing period
    #[serde(default = "default_messages_url")]
    pub messages_url: String,

    /// Base URL of the report lookup; reports live at `<reports_url>/<id>`
    #[serde(default = "default_reports_url")]
    pub reports_url: String,

    /// Upstream request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsageConfig {
    /// Report lookups in flight at once (1 = sequential)
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: IpAddr,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// The single origin allowed to call the API with credentials
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for CopilotConfig {
    fn default() -> Self {
        Self {
            messages_url: default_messages_url(),
            reports_url: default_reports_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: default_max_concurrent_lookups(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_messages_url() -> String {
    "https://owpublic.blob.core.windows.net/tech-task/messages/current-period".into()
}

fn default_reports_url() -> String {
    "https://owpublic.blob.core.windows.net/tech-task/reports".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_max_concurrent_lookups() -> usize {
    8
}

fn default_listen_addr() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_builder(config::Config::builder().add_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(false),
        ))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
