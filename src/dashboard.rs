//! The dashboard request handler.
//!
//! A [`Dashboard`] is built once from configuration and a host runtime, then
//! shared by every request. Each call reads the current statistics, runs
//! the differ for every monitored component and renders the page.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local};
use flowboard_types::HealthColor;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::data::{compile_component_pattern, MonitoredSet, SnapshotStore};
use crate::error::{DashboardError, Result};
use crate::source::{ComponentDirectory, HostRuntime, StatisticsSource};
use crate::ui::{render_html, DashboardView, Theme};

/// Content type of the rendered dashboard.
pub const CONTENT_TYPE: &str = "text/html";

/// Reply to a single dashboard request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardResponse {
    pub content_type: &'static str,
    pub body: String,
}

/// A status dashboard for the components of one host runtime.
#[derive(Debug)]
pub struct Dashboard {
    name: String,
    host_label: String,
    refresh_period: u32,
    monitored: MonitoredSet,
    store: SnapshotStore,
    directory: Arc<dyn ComponentDirectory>,
    statistics: Option<Arc<dyn StatisticsSource>>,
    theme: Theme,
}

impl Dashboard {
    /// Resolve the model and the monitored components.
    ///
    /// Fails if the model name is blank, the model cannot be found, the
    /// refresh period is zero or the component name pattern is invalid.
    pub fn initialise(config: &DashboardConfig, host: &dyn HostRuntime) -> Result<Self> {
        let model_name = config.model_name()?;
        let refresh_period = config.refresh_period()?;
        let pattern = compile_component_pattern(config.component_name_regex.as_deref())?;

        let directory = host
            .lookup_model(model_name)
            .ok_or_else(|| DashboardError::ModelNotFound(model_name.to_string()))?;

        let statistics = host.statistics();
        let discovered = statistics
            .as_ref()
            .map(|s| s.statistics().into_keys().collect::<Vec<_>>())
            .unwrap_or_default();
        let monitored = MonitoredSet::resolve(discovered, &config.name, pattern.as_ref());

        let host_label = config
            .host_name
            .clone()
            .or_else(|| host.host_name())
            .or_else(|| std::env::var("HOSTNAME").ok())
            .unwrap_or_else(|| "localhost".to_string());

        info!(
            "Dashboard {} monitoring {} component(s) of model {}",
            config.name,
            monitored.len(),
            model_name
        );
        if statistics.is_none() {
            info!("Host runtime statistics are disabled; all components will show as unknown");
        }

        Ok(Self {
            name: config.name.clone(),
            host_label,
            refresh_period,
            store: SnapshotStore::with_names(monitored.iter()),
            monitored,
            directory,
            statistics,
            theme: Theme::classic(),
        })
    }

    /// Use a different theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The dashboard's own component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Heading shown above the table.
    pub fn host_label(&self) -> &str {
        &self.host_label
    }

    /// Client-side refresh interval in seconds.
    pub fn refresh_period(&self) -> u32 {
        self.refresh_period
    }

    /// The components this dashboard reports on.
    pub fn monitored(&self) -> &MonitoredSet {
        &self.monitored
    }

    /// Classify every monitored component that currently has statistics.
    ///
    /// Each classified component's stored snapshot is replaced.
    pub fn component_colors(&self) -> HashMap<String, HealthColor> {
        let Some(statistics) = &self.statistics else {
            return HashMap::new();
        };

        statistics
            .statistics()
            .into_iter()
            .filter(|(name, _)| self.monitored.contains(name))
            .map(|(name, snapshot)| {
                let color = self.store.evaluate(&name, snapshot);
                (name, color)
            })
            .collect()
    }

    /// Render the dashboard as of now.
    pub fn render(&self) -> String {
        self.render_at(&Local::now())
    }

    /// Render the dashboard with an explicit timestamp.
    pub fn render_at(&self, now: &DateTime<Local>) -> String {
        let colors = self.component_colors();
        debug!(
            "Rendering dashboard: {} component(s), {} with statistics, {} classified",
            self.monitored.len(),
            colors.len(),
            classified_count(&colors)
        );

        let view = DashboardView {
            host_label: &self.host_label,
            refresh_period: self.refresh_period,
            components: &self.monitored,
            colors: &colors,
            directory: self.directory.as_ref(),
            theme: &self.theme,
        };
        render_html(&view, now)
    }

    /// Handle one dashboard request.
    pub fn on_call(&self) -> DashboardResponse {
        DashboardResponse {
            content_type: CONTENT_TYPE,
            body: self.render(),
        }
    }
}

/// Number of components compared against a prior snapshot this cycle.
fn classified_count(colors: &HashMap<String, HealthColor>) -> usize {
    colors.values().filter(|c| c.is_classified()).count()
}
