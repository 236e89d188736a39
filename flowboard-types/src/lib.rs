//! # flowboard-types
//!
//! Core types shared between flowboard and the runtimes it observes. A host
//! runtime exposes a [`StatisticsSnapshot`] per processing component and a
//! [`RunState`] per registered component; the dashboard reduces consecutive
//! snapshots to a [`HealthColor`].
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: JSON/TOML/etc. serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use flowboard_types::{HealthColor, RunState, StatisticsSnapshot};
//!
//! let snapshot = StatisticsSnapshot::builder()
//!     .executed_events(1500)
//!     .execution_errors(2)
//!     .average_queue_size(12)
//!     .build();
//!
//! assert_eq!(snapshot.executed_events, 1500);
//! assert_eq!(HealthColor::Orange.as_str(), "orange");
//! assert_eq!(RunState::default(), RunState::Unknown);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod health;
mod statistics;

pub use health::*;
pub use statistics::*;
