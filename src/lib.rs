//! # flowboard
//!
//! A self-refreshing HTML status dashboard for the processing components of
//! a running application.
//!
//! Each time the page is requested the dashboard reads the current
//! statistics of every monitored component, compares them with what it saw
//! on the previous request and colors the component's cell accordingly:
//!
//! | Color    | Meaning                                        |
//! |----------|------------------------------------------------|
//! | `gray`   | first observation, nothing to compare with     |
//! | `red`    | new execution or fatal errors                  |
//! | `orange` | average queue size grew                        |
//! | `yellow` | new events were executed                       |
//! | `lime`   | nothing new                                    |
//!
//! The cell also carries a symbol for the component's run state. The page
//! declares its own refresh interval, so a browser left open keeps polling.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────────┐   ┌──────────┐
//! │ HostRuntime  │──▶│      Dashboard      │──▶│    ui    │──▶ HTML
//! │  (source)    │   │ MonitoredSet        │   │ (render) │
//! └──────────────┘   │ SnapshotStore (data)│   └──────────┘
//!                    └─────────────────────┘
//! ```
//!
//! - **[`source`]**: the host runtime abstraction ([`source::HostRuntime`])
//!   with in-memory and JSON-file implementations
//! - **[`data`]**: component discovery and the snapshot differ
//! - **[`ui`]**: HTML rendering and theme
//! - **[`dashboard`]**: the request handler tying it together
//! - **`server`**: HTTP transport (feature `server`, on by default)
//!
//! ## Usage
//!
//! ```
//! use flowboard::config::DashboardConfig;
//! use flowboard::source::MemoryHost;
//! use flowboard::{Dashboard, RunState};
//!
//! let host = MemoryHost::new();
//! host.set_run_state("main", "orders", RunState::Running);
//! host.update_statistics("orders", |s| s.executed_events += 1);
//!
//! let config = DashboardConfig::builder().model_name("main").build();
//! let dashboard = Dashboard::initialise(&config, &host).unwrap();
//!
//! let response = dashboard.on_call();
//! assert_eq!(response.content_type, "text/html");
//! assert!(response.body.contains("bgcolor=\"gray\""));
//!
//! host.update_statistics("orders", |s| s.executed_events += 1);
//! assert!(dashboard.render().contains("bgcolor=\"yellow\""));
//! ```

pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod logging;
#[cfg(feature = "server")]
pub mod server;
pub mod source;
pub mod ui;

pub use config::{DashboardConfig, ServerConfig, Settings};
pub use dashboard::{Dashboard, DashboardResponse};
pub use data::{classify, MonitoredSet, SnapshotStore};
pub use error::{DashboardError, Result};
pub use flowboard_types::{HealthColor, RunState, StatisticsSnapshot};
