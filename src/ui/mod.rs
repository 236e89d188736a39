//! Rendering.
//!
//! - [`html`]: the self-refreshing HTML document
//! - [`theme`]: cell colors and run-state symbols

pub mod html;
pub mod theme;

pub use html::{format_timestamp, render_html, DashboardView};
pub use theme::Theme;
