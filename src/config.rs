use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use axum::http::Method;
use serde::Deserialize;

use crate::function::{GreetingFunction, DEFAULT_GREETING};

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub function: FunctionSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("FUNCLET_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("FUNCLET")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FunctionSection {
    pub greeting: String,
    pub methods: Vec<String>,
}

impl FunctionSection {
    /// Build the function value, rejecting an empty greeting.
    pub fn build(&self) -> Result<GreetingFunction> {
        GreetingFunction::new(self.greeting.clone()).context("invalid function.greeting")
    }

    /// Parse the accepted HTTP methods. Names are case-insensitive, the
    /// list must not be empty, and repeated names collapse to the first
    /// occurrence.
    pub fn methods(&self) -> Result<Vec<Method>> {
        if self.methods.is_empty() {
            bail!("function.methods must contain at least one method");
        }

        let mut methods: Vec<Method> = Vec::with_capacity(self.methods.len());
        for name in &self.methods {
            let method = name
                .to_ascii_uppercase()
                .parse::<Method>()
                .with_context(|| format!("unsupported method in function.methods: '{name}'"))?;
            if !methods.contains(&method) {
                methods.push(method);
            }
        }

        Ok(methods)
    }
}

impl Default for FunctionSection {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            methods: vec!["GET".to_string(), "POST".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
