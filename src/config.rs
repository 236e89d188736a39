//! Dashboard and transport configuration.
//!
//! Settings are read from an optional TOML file, with environment variables
//! taking precedence:
//!
//! ```toml
//! [dashboard]
//! name = "dashboard"
//! model_name = "main"
//! refresh_period = 30
//! component_name_regex = "order.*"
//!
//! [server]
//! listen_addr = "0.0.0.0:8080"
//! path = "/dashboard"
//! ```
//!
//! Environment overrides use the `FLOWBOARD` prefix with `__` between
//! sections, e.g. `FLOWBOARD__DASHBOARD__MODEL_NAME=main`.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{DashboardError, Result};

/// Refresh period used when none is configured, in seconds.
pub const DEFAULT_REFRESH_PERIOD: u32 = 60;

/// Component name used for the dashboard itself when none is configured.
pub const DEFAULT_DASHBOARD_NAME: &str = "dashboard";

/// Configuration for a single dashboard instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// The dashboard's own component name; never listed on the dashboard.
    pub name: String,
    /// Model whose components provide the run-state symbols. Required.
    pub model_name: Option<String>,
    /// Label shown above the table. Falls back to the runtime's host name.
    pub host_name: Option<String>,
    /// Client-side refresh interval in seconds.
    pub refresh_period: Option<u32>,
    /// Case-insensitive, full-match filter on component names.
    pub component_name_regex: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DASHBOARD_NAME.to_string(),
            model_name: None,
            host_name: None,
            refresh_period: None,
            component_name_regex: None,
        }
    }
}

impl DashboardConfig {
    /// Create a new builder for DashboardConfig.
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// The configured model name, if it is not blank.
    pub fn model_name(&self) -> Result<&str> {
        self.model_name
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or(DashboardError::MissingValue("model_name"))
    }

    /// The refresh period in seconds, defaulting to [`DEFAULT_REFRESH_PERIOD`].
    pub fn refresh_period(&self) -> Result<u32> {
        match self.refresh_period {
            None => Ok(DEFAULT_REFRESH_PERIOD),
            Some(0) => Err(DashboardError::InvalidConfig(
                "refresh_period must be a positive number of seconds".to_string(),
            )),
            Some(period) => Ok(period),
        }
    }
}

/// Builder for DashboardConfig.
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    config: DashboardConfig,
}

impl DashboardConfigBuilder {
    /// Set the dashboard's own component name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the model to resolve run states from.
    pub fn model_name(mut self, model: impl Into<String>) -> Self {
        self.config.model_name = Some(model.into());
        self
    }

    /// Set the host label.
    pub fn host_name(mut self, host: impl Into<String>) -> Self {
        self.config.host_name = Some(host.into());
        self
    }

    /// Set the refresh period in seconds.
    pub fn refresh_period(mut self, seconds: u32) -> Self {
        self.config.refresh_period = Some(seconds);
        self
    }

    /// Set the component name filter.
    pub fn component_name_regex(mut self, regex: impl Into<String>) -> Self {
        self.config.component_name_regex = Some(regex.into());
        self
    }

    /// Build the DashboardConfig.
    pub fn build(self) -> DashboardConfig {
        self.config
    }
}

/// Configuration for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Path the dashboard is served at (e.g., "/dashboard")
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            path: "/dashboard".to_string(),
        }
    }
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dashboard: DashboardConfig,
    pub server: ServerConfig,
}

impl Settings {
    /// Load settings from an optional TOML file layered under `FLOWBOARD__*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("FLOWBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize::<Settings>()?)
    }
}
