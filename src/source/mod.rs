//! Host runtime abstraction.
//!
//! The dashboard never talks to a concrete runtime. It depends on three
//! capabilities instead:
//!
//! - [`HostRuntime`]: resolves a model by name and exposes the statistics
//!   source, used once at initialization
//! - [`ComponentDirectory`]: run state of each component in one model
//! - [`StatisticsSource`]: the current snapshot of every component with
//!   statistics enabled
//!
//! [`MemoryHost`] keeps everything in memory and is meant for embedding and
//! tests; [`FileHost`] reads a JSON document that an external process keeps
//! up to date.

mod file;
mod memory;

pub use file::{FileHost, HostDocument};
pub use memory::MemoryHost;

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use flowboard_types::{RunState, StatisticsSnapshot};

/// Lookup of component run states within a single model.
pub trait ComponentDirectory: Send + Sync + Debug {
    /// Current run state of `name`.
    ///
    /// Components the model does not know about are [`RunState::Unknown`].
    fn run_state(&self, name: &str) -> RunState;
}

/// Enumeration of per-component statistics.
pub trait StatisticsSource: Send + Sync + Debug {
    /// Read the current snapshot of every component with statistics.
    ///
    /// This should be cheap; it is called once per dashboard request.
    fn statistics(&self) -> BTreeMap<String, StatisticsSnapshot>;
}

/// The runtime hosting the monitored components.
pub trait HostRuntime: Send + Sync {
    /// Resolve a model by name.
    fn lookup_model(&self, name: &str) -> Option<Arc<dyn ComponentDirectory>>;

    /// The runtime's statistics, or `None` when statistics are disabled.
    fn statistics(&self) -> Option<Arc<dyn StatisticsSource>>;

    /// Name of the machine the runtime is running on, if known.
    fn host_name(&self) -> Option<String> {
        None
    }
}
