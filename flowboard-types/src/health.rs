//! Health classification and component run state.

use core::fmt;

/// Discrete health signal derived from two consecutive snapshots.
///
/// `Gray` is reserved for components observed for the first time; every
/// other variant requires a prior snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HealthColor {
    /// No prior snapshot yet.
    Gray,
    /// New execution or fatal errors.
    Red,
    /// Queue is growing.
    Orange,
    /// Processing events.
    Yellow,
    /// Idle and healthy.
    Lime,
}

impl HealthColor {
    /// All colors in classification priority order.
    pub const ALL: [HealthColor; 5] = [
        HealthColor::Gray,
        HealthColor::Red,
        HealthColor::Orange,
        HealthColor::Yellow,
        HealthColor::Lime,
    ];

    /// HTML color name for this classification.
    pub const fn as_str(&self) -> &'static str {
        match self {
            HealthColor::Gray => "gray",
            HealthColor::Red => "red",
            HealthColor::Orange => "orange",
            HealthColor::Yellow => "yellow",
            HealthColor::Lime => "lime",
        }
    }

    /// Whether a prior snapshot was available for this classification.
    pub const fn is_classified(&self) -> bool {
        !matches!(self, HealthColor::Gray)
    }
}

impl fmt::Display for HealthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a component as reported by the host runtime.
///
/// Independent of [`HealthColor`]: a stopped component may still be lime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RunState {
    /// Not registered with the runtime (or the lookup failed).
    #[default]
    Unknown,
    /// Registered but not started.
    Stopped,
    /// Started and paused.
    Paused,
    /// Started and processing.
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Unknown => "unknown",
            RunState::Stopped => "stopped",
            RunState::Paused => "paused",
            RunState::Running => "running",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names_are_html_color_keywords() {
        let names: Vec<&str> = HealthColor::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["gray", "red", "orange", "yellow", "lime"]);
    }

    #[test]
    fn only_gray_is_unclassified() {
        assert!(!HealthColor::Gray.is_classified());
        assert!(HealthColor::Red.is_classified());
        assert!(HealthColor::Lime.is_classified());
    }

    #[test]
    fn run_state_defaults_to_unknown() {
        assert_eq!(RunState::default(), RunState::Unknown);
        assert_eq!(RunState::Paused.to_string(), "paused");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn run_state_deserializes_lowercase() {
        let state: RunState = serde_json::from_str("\"stopped\"").unwrap();
        assert_eq!(state, RunState::Stopped);

        let color: HealthColor = serde_json::from_str("\"lime\"").unwrap();
        assert_eq!(color, HealthColor::Lime);
    }
}
