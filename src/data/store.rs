//! Snapshot store and differ.
//!
//! Keeps the last statistics snapshot seen for every component and turns
//! the difference between it and a fresh snapshot into a [`HealthColor`].

use std::collections::HashMap;
use std::sync::Arc;

use flowboard_types::{HealthColor, StatisticsSnapshot};
use parking_lot::{Mutex, RwLock};

/// Classify a component from its previous and current snapshots.
///
/// Checks run in priority order and the first match wins:
///
/// 1. no previous snapshot: `Gray`
/// 2. new execution or fatal errors: `Red`
/// 3. growing average queue size: `Orange`
/// 4. new executed events: `Yellow`
/// 5. otherwise: `Lime`
pub fn classify(prior: Option<&StatisticsSnapshot>, current: &StatisticsSnapshot) -> HealthColor {
    let Some(prior) = prior else {
        return HealthColor::Gray;
    };

    if current.execution_errors > prior.execution_errors
        || current.fatal_errors > prior.fatal_errors
    {
        HealthColor::Red
    } else if current.average_queue_size > prior.average_queue_size {
        HealthColor::Orange
    } else if current.executed_events > prior.executed_events {
        HealthColor::Yellow
    } else {
        HealthColor::Lime
    }
}

type Slot = Arc<Mutex<Option<StatisticsSnapshot>>>;

/// Last-seen statistics per component.
///
/// Each component owns its own slot. Finding an existing slot only takes
/// the shared map lock, so evaluations for different components never wait
/// on each other; the slot lock makes the swap of previous and current
/// snapshot atomic for a single component. Entries are never removed.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    slots: RwLock<HashMap<String, Slot>>,
}

impl SnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with empty slots for the given components.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = names
            .into_iter()
            .map(|name| (name.into(), Slot::default()))
            .collect();

        Self {
            slots: RwLock::new(slots),
        }
    }

    fn slot(&self, name: &str) -> Slot {
        // Fast path
        {
            let slots = self.slots.read();
            if let Some(slot) = slots.get(name) {
                return slot.clone();
            }
        }

        // Slow path
        let mut slots = self.slots.write();
        slots.entry(name.to_string()).or_default().clone()
    }

    /// Classify `snapshot` against the stored one and store it in its place.
    pub fn evaluate(&self, name: &str, snapshot: StatisticsSnapshot) -> HealthColor {
        let prior = self.slot(name).lock().replace(snapshot);
        classify(prior.as_ref(), &snapshot)
    }

    /// The snapshot stored for a component, if it has been evaluated.
    pub fn last_snapshot(&self, name: &str) -> Option<StatisticsSnapshot> {
        let slot = self.slots.read().get(name).cloned()?;
        let snapshot = *slot.lock();
        snapshot
    }

    /// Number of components with a slot.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Check if the store has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    /// Check if a component has a slot.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.read().contains_key(name)
    }
}
