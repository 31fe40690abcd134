//! Layered application configuration.
//!
//! Priority, lowest to highest: built-in defaults, YAML config file,
//! `TOEFL_`-prefixed environment (`TOEFL_SERVER__PORT=9000`), then CLI flags
//! and the backend's classic variables (`SERVER_PORT`, `POSTGRES_URL`, ...)
//! which `clap` reads for us.

use std::path::Path;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::portal::{Navigation, UserDescriptor};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "SERVER_PORT")]
    pub port: Option<u16>,

    /// Deployment environment (development, production, release)
    #[arg(long, env = "ENVIRONMENT")]
    pub environment: Option<String>,

    /// Postgres connection URL; in-memory storage when absent
    #[arg(long, env = "POSTGRES_URL")]
    pub database_url: Option<String>,

    /// Maximum database connections
    #[arg(long, env = "MAX_CONN")]
    pub max_connections: Option<u32>,

    /// Comma-separated CORS origins, `*` for any
    #[arg(long, env = "ALLOWED_ORIGINS")]
    pub allowed_origins: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub portal: PortalConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub request_timeout_secs: u64,
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "release")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LogConfig {
    pub format: Option<LogFormat>,
}

/// Data the portal shell renders: brand, user and navigation.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PortalConfig {
    pub brand: String,
    pub user: UserDescriptor,
    pub navigation: Navigation,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            brand: "UNW TOEFL".to_string(),
            user: UserDescriptor::default(),
            navigation: Navigation::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        // 1. Defaults
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.environment", "development")?
            .set_default("server.request_timeout_secs", 15)?
            .set_default("server.shutdown_timeout_secs", 10)?
            .set_default("cors.allowed_origins", vec!["*"])?
            .set_default("database.max_connections", 100)?;

        // 2. Config file: explicit path must exist, ./config.yaml is optional
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path).required(true));
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
        }

        // 3. Prefixed environment
        builder = builder.add_source(
            Environment::with_prefix("TOEFL")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        // 4. CLI flags and classic env names
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(environment) = cli.environment {
            builder = builder.set_override("server.environment", environment)?;
        }
        if let Some(url) = cli.database_url.filter(|u| !u.trim().is_empty()) {
            builder = builder.set_override("database.url", url)?;
        }
        if let Some(max) = cli.max_connections {
            builder = builder.set_override("database.max_connections", i64::from(max))?;
        }
        if let Some(origins) = cli.allowed_origins {
            builder = builder.set_override("cors.allowed_origins", split_origins(&origins))?;
        }

        builder.build()?.try_deserialize()
    }

    /// Log format, defaulting to JSON in production.
    pub fn log_format(&self) -> LogFormat {
        self.log.format.unwrap_or(if self.server.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Compact
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_origins() {
        assert_eq!(
            split_origins(" http://a.test, http://b.test ,,"),
            ["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn wildcard_or_empty_allows_any() {
        let any = CorsConfig {
            allowed_origins: vec!["*".into()],
        };
        let none = CorsConfig {
            allowed_origins: vec![],
        };
        let listed = CorsConfig {
            allowed_origins: vec!["http://a.test".into()],
        };
        assert!(any.allows_any());
        assert!(none.allows_any());
        assert!(!listed.allows_any());
    }

    #[test]
    fn portal_defaults_match_stock_shell() {
        let portal = PortalConfig::default();
        assert_eq!(portal.brand, "UNW TOEFL");
        assert_eq!(portal.navigation.len(), 5);
        assert_eq!(portal.user.id, "NIM.123456");
    }
}
