//! Statistics snapshot - a point-in-time read of a component's counters.

/// Counters read from a single processing component at one instant.
///
/// `executed_events`, `execution_errors` and `fatal_errors` are monotonic
/// counters maintained by the host runtime. `average_queue_size` is a gauge
/// and may move in either direction between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatisticsSnapshot {
    /// Number of events the component has processed.
    pub executed_events: u64,

    /// Number of events that failed with a recoverable error.
    pub execution_errors: u64,

    /// Number of events that failed with a fatal error.
    pub fatal_errors: u64,

    /// Average number of events waiting in the component's queue.
    pub average_queue_size: u64,
}

impl StatisticsSnapshot {
    /// Create a snapshot with every counter at zero.
    pub const fn new() -> Self {
        Self {
            executed_events: 0,
            execution_errors: 0,
            fatal_errors: 0,
            average_queue_size: 0,
        }
    }

    /// Create a builder for a snapshot.
    pub fn builder() -> StatisticsSnapshotBuilder {
        StatisticsSnapshotBuilder::new()
    }
}

/// Builder for `StatisticsSnapshot`.
#[derive(Debug, Default)]
pub struct StatisticsSnapshotBuilder {
    snapshot: StatisticsSnapshot,
}

impl StatisticsSnapshotBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the executed event count.
    pub fn executed_events(mut self, count: u64) -> Self {
        self.snapshot.executed_events = count;
        self
    }

    /// Set the execution error count.
    pub fn execution_errors(mut self, count: u64) -> Self {
        self.snapshot.execution_errors = count;
        self
    }

    /// Set the fatal error count.
    pub fn fatal_errors(mut self, count: u64) -> Self {
        self.snapshot.fatal_errors = count;
        self
    }

    /// Set the average queue size.
    pub fn average_queue_size(mut self, size: u64) -> Self {
        self.snapshot.average_queue_size = size;
        self
    }

    /// Build the snapshot.
    pub fn build(self) -> StatisticsSnapshot {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_is_all_zero() {
        let s = StatisticsSnapshot::new();
        assert_eq!(s, StatisticsSnapshot::default());
    }

    #[test]
    fn builder_sets_every_counter() {
        let s = StatisticsSnapshot::builder()
            .executed_events(10)
            .execution_errors(2)
            .fatal_errors(1)
            .average_queue_size(7)
            .build();

        assert_eq!(s.executed_events, 10);
        assert_eq!(s.execution_errors, 2);
        assert_eq!(s.fatal_errors, 1);
        assert_eq!(s.average_queue_size, 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_default_to_zero() {
        let s: StatisticsSnapshot = serde_json::from_str(r#"{"executed_events": 5}"#).unwrap();
        assert_eq!(s.executed_events, 5);
        assert_eq!(s.execution_errors, 0);
        assert_eq!(s.average_queue_size, 0);
    }
}
