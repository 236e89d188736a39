//! Component discovery and health classification.
//!
//! ## Submodules
//!
//! - [`registry`]: the fixed, filtered set of components a dashboard reports on
//! - [`store`]: last-seen snapshots and the differ that turns two snapshots
//!   into a [`HealthColor`](flowboard_types::HealthColor)
//!
//! ## Data Flow
//!
//! ```text
//! StatisticsSource::statistics()
//!        │
//!        ▼
//! MonitoredSet::contains()  (components outside the set are skipped)
//!        │
//!        ▼
//! SnapshotStore::evaluate()  ──▶ HealthColor per component
//! ```

pub mod registry;
pub mod store;

pub use registry::{compile_component_pattern, MonitoredSet};
pub use store::{classify, SnapshotStore};
