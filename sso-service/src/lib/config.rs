use std::env;

use config::builder::ConfigBuilder;
use config::builder::DefaultState;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::credentials::errors::TokenTtlError;
use crate::credentials::models::TokenTtl;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub env: String,
    pub storage: StorageConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub grpc_port: u16,
    pub http_port: u16,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    pub ttl_minutes: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub level: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SSO__STORAGE__URL, SSO__TOKEN__TTL_MINUTES, etc.)
    /// 2. File at `config_path` (the `--config` flag or CONFIG_PATH), when given
    /// 3. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix("SSO").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults. Everything except the storage URL has one.
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("env", "local")?
            .set_default("storage.max_connections", 5)?
            .set_default("server.grpc_port", 44044)?
            .set_default("server.http_port", 8080)?
            .set_default("server.timeout_secs", 10)?
            .set_default("token.ttl_minutes", 60)?
            .set_default("log.level", "info")
    }

    /// Validated lifetime of issued tokens.
    pub fn token_ttl(&self) -> Result<TokenTtl, TokenTtlError> {
        TokenTtl::from_minutes(self.token.ttl_minutes)
    }
}
