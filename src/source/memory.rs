//! In-memory host runtime.
//!
//! Holds models, run states and statistics behind locks so an embedding
//! application can update them from any thread while the dashboard reads.

use std::collections::BTreeMap;
use std::sync::Arc;

use flowboard_types::{RunState, StatisticsSnapshot};
use parking_lot::RwLock;

use super::{ComponentDirectory, HostRuntime, StatisticsSource};

/// Thread-safe run states for a single model.
#[derive(Debug, Default)]
pub struct MemoryModel {
    components: RwLock<BTreeMap<String, RunState>>,
}

impl ComponentDirectory for MemoryModel {
    fn run_state(&self, name: &str) -> RunState {
        self.components
            .read()
            .get(name)
            .copied()
            .unwrap_or(RunState::Unknown)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    models: RwLock<BTreeMap<String, Arc<MemoryModel>>>,
    statistics: RwLock<BTreeMap<String, StatisticsSnapshot>>,
}

impl StatisticsSource for MemoryState {
    fn statistics(&self) -> BTreeMap<String, StatisticsSnapshot> {
        self.statistics.read().clone()
    }
}

/// A host runtime kept entirely in memory.
///
/// Cloning is cheap and every clone shares the same state.
///
/// # Example
///
/// ```
/// use flowboard::source::{HostRuntime, MemoryHost};
/// use flowboard::{RunState, StatisticsSnapshot};
///
/// let host = MemoryHost::new();
/// host.set_run_state("main", "orders", RunState::Running);
/// host.set_statistics("orders", StatisticsSnapshot::new());
///
/// assert!(host.lookup_model("main").is_some());
/// assert!(host.lookup_model("other").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHost {
    state: Arc<MemoryState>,
    host_name: Option<String>,
    statistics_enabled: bool,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// Create an empty host with statistics enabled.
    pub fn new() -> Self {
        Self {
            state: Arc::new(MemoryState::default()),
            host_name: None,
            statistics_enabled: true,
        }
    }

    /// Create an empty host whose statistics are disabled.
    pub fn without_statistics() -> Self {
        Self {
            statistics_enabled: false,
            ..Self::new()
        }
    }

    /// Set the host name reported to the dashboard.
    pub fn with_host_name(mut self, name: impl Into<String>) -> Self {
        self.host_name = Some(name.into());
        self
    }

    /// Register a model or get the existing one.
    pub fn register_model(&self, name: &str) -> Arc<MemoryModel> {
        // Fast path
        {
            let models = self.state.models.read();
            if let Some(model) = models.get(name) {
                return model.clone();
            }
        }

        // Slow path
        let mut models = self.state.models.write();
        models
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryModel::default()))
            .clone()
    }

    /// Set the run state of a component, registering the model if needed.
    pub fn set_run_state(&self, model: &str, component: &str, state: RunState) {
        self.register_model(model)
            .components
            .write()
            .insert(component.to_string(), state);
    }

    /// Remove a component from a model.
    ///
    /// Returns `true` if the component was registered.
    pub fn remove_component(&self, model: &str, component: &str) -> bool {
        self.state
            .models
            .read()
            .get(model)
            .map(|m| m.components.write().remove(component).is_some())
            .unwrap_or(false)
    }

    /// Replace the statistics of a component.
    pub fn set_statistics(&self, component: &str, snapshot: StatisticsSnapshot) {
        self.state
            .statistics
            .write()
            .insert(component.to_string(), snapshot);
    }

    /// Modify the statistics of a component in place, starting from zero
    /// counters if it has none yet.
    pub fn update_statistics<F>(&self, component: &str, f: F)
    where
        F: FnOnce(&mut StatisticsSnapshot),
    {
        let mut statistics = self.state.statistics.write();
        f(statistics.entry(component.to_string()).or_default());
    }

    /// Stop reporting statistics for a component.
    ///
    /// Returns `true` if the component had statistics.
    pub fn remove_statistics(&self, component: &str) -> bool {
        self.state.statistics.write().remove(component).is_some()
    }
}

impl HostRuntime for MemoryHost {
    fn lookup_model(&self, name: &str) -> Option<Arc<dyn ComponentDirectory>> {
        self.state
            .models
            .read()
            .get(name)
            .map(|m| m.clone() as Arc<dyn ComponentDirectory>)
    }

    fn statistics(&self) -> Option<Arc<dyn StatisticsSource>> {
        if self.statistics_enabled {
            Some(self.state.clone() as Arc<dyn StatisticsSource>)
        } else {
            None
        }
    }

    fn host_name(&self) -> Option<String> {
        self.host_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_component_has_unknown_state() {
        let host = MemoryHost::new();
        host.set_run_state("main", "orders", RunState::Paused);

        let model = host.lookup_model("main").unwrap();
        assert_eq!(model.run_state("orders"), RunState::Paused);
        assert_eq!(model.run_state("missing"), RunState::Unknown);
    }

    #[test]
    fn register_model_returns_same_arc_on_second_call() {
        let host = MemoryHost::new();

        let m1 = host.register_model("main");
        let m2 = host.register_model("main");

        assert!(Arc::ptr_eq(&m1, &m2));
    }

    #[test]
    fn run_state_changes_are_visible_through_resolved_model() {
        let host = MemoryHost::new();
        host.set_run_state("main", "orders", RunState::Running);
        let model = host.lookup_model("main").unwrap();

        host.set_run_state("main", "orders", RunState::Stopped);
        assert_eq!(model.run_state("orders"), RunState::Stopped);

        assert!(host.remove_component("main", "orders"));
        assert!(!host.remove_component("main", "orders"));
        assert!(!host.remove_component("other", "orders"));
        assert_eq!(model.run_state("orders"), RunState::Unknown);
    }

    #[test]
    fn statistics_are_shared_between_clones() {
        let host = MemoryHost::new();
        let source = host.statistics().unwrap();

        let clone = host.clone();
        clone.update_statistics("orders", |s| s.executed_events += 3);
        clone.update_statistics("orders", |s| s.executed_events += 2);

        let stats = source.statistics();
        assert_eq!(stats.get("orders").unwrap().executed_events, 5);

        assert!(host.remove_statistics("orders"));
        assert!(source.statistics().is_empty());
    }

    #[test]
    fn disabled_statistics() {
        let host = MemoryHost::without_statistics().with_host_name("box-1");
        assert!(host.statistics().is_none());
        assert_eq!(host.host_name().as_deref(), Some("box-1"));
    }
}
