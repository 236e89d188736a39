//! File-based host runtime.
//!
//! Reads models, run states and statistics from a JSON document that an
//! external process rewrites as the application runs:
//!
//! ```json
//! {
//!   "host_name": "app-01",
//!   "models": {
//!     "main": { "orders": "running", "billing": "paused", "dashboard": "running" }
//!   },
//!   "statistics": {
//!     "orders": { "executed_events": 120, "execution_errors": 0, "fatal_errors": 0, "average_queue_size": 3 }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use anyhow::{Context, Result};
use flowboard_types::{RunState, StatisticsSnapshot};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ComponentDirectory, HostRuntime, StatisticsSource};

/// The JSON document read by [`FileHost`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostDocument {
    /// Name of the machine the runtime is running on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    /// Run state of each component, keyed by model name.
    pub models: BTreeMap<String, BTreeMap<String, RunState>>,
    /// Current statistics, keyed by component name.
    pub statistics: BTreeMap<String, StatisticsSnapshot>,
}

#[derive(Debug)]
struct FileState {
    path: PathBuf,
    document: HostDocument,
    last_modified: Option<SystemTime>,
    last_error: Option<String>,
}

impl FileState {
    fn modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    /// Re-read the document if the file changed since the last good read.
    fn refresh(&mut self) {
        let current_modified = self.modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,
            (Some(_), None) => false, // File disappeared, keep what we have
            (Some(last), Some(current)) => current > last,
        };

        if !file_changed {
            return;
        }

        match read_document(&self.path) {
            Ok(document) => {
                self.document = document;
                self.last_modified = current_modified;
                self.last_error = None;
            }
            Err(e) => {
                let message = format!("{:#}", e);
                if self.last_error.as_deref() != Some(message.as_str()) {
                    warn!("Keeping last good host document: {}", message);
                }
                self.last_error = Some(message);
            }
        }
    }
}

fn read_document(path: &Path) -> Result<HostDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Read error: {}", path.display()))?;
    let document = serde_json::from_str(&content)
        .with_context(|| format!("Parse error: {}", path.display()))?;
    Ok(document)
}

/// A host runtime backed by a JSON file.
///
/// The file is re-read only when its modification time advances. If a
/// later read fails the last good document stays in effect and the failure
/// is available from [`FileHost::error`].
#[derive(Debug, Clone)]
pub struct FileHost {
    state: Arc<Mutex<FileState>>,
}

impl FileHost {
    /// Open a host file. The initial read must succeed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let last_modified = fs::metadata(&path).ok().and_then(|m| m.modified().ok());
        let document = read_document(&path)?;

        Ok(Self {
            state: Arc::new(Mutex::new(FileState {
                path,
                document,
                last_modified,
                last_error: None,
            })),
        })
    }

    /// Returns the path being read.
    pub fn path(&self) -> PathBuf {
        self.state.lock().path.clone()
    }

    /// The error from the most recent failed reload, if any.
    pub fn error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    /// The current document, reloading it first if the file changed.
    pub fn document(&self) -> HostDocument {
        let mut state = self.state.lock();
        state.refresh();
        state.document.clone()
    }
}

/// A model resolved from a [`FileHost`].
#[derive(Debug)]
struct FileModel {
    host: FileHost,
    name: String,
}

impl ComponentDirectory for FileModel {
    fn run_state(&self, component: &str) -> RunState {
        let mut state = self.host.state.lock();
        state.refresh();
        state
            .document
            .models
            .get(&self.name)
            .and_then(|components| components.get(component))
            .copied()
            .unwrap_or(RunState::Unknown)
    }
}

impl StatisticsSource for FileHost {
    fn statistics(&self) -> BTreeMap<String, StatisticsSnapshot> {
        let mut state = self.state.lock();
        state.refresh();
        state.document.statistics.clone()
    }
}

impl HostRuntime for FileHost {
    fn lookup_model(&self, name: &str) -> Option<Arc<dyn ComponentDirectory>> {
        if !self.document().models.contains_key(name) {
            return None;
        }

        Some(Arc::new(FileModel {
            host: self.clone(),
            name: name.to_string(),
        }) as Arc<dyn ComponentDirectory>)
    }

    fn statistics(&self) -> Option<Arc<dyn StatisticsSource>> {
        Some(Arc::new(self.clone()) as Arc<dyn StatisticsSource>)
    }

    fn host_name(&self) -> Option<String> {
        self.document().host_name
    }
}
