//! Cell colors and run-state symbols for the HTML dashboard.

use flowboard_types::{HealthColor, RunState};

/// Colors and symbols used when rendering a component row.
///
/// [`Theme::classic()`] is the look the dashboard has always had: HTML color
/// keywords for the health cell and a one-character run-state marker padded
/// with non-breaking spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Cell color for components without a classification this cycle.
    pub unclassified: &'static str,
    /// Cell content for components the runtime does not know.
    pub unknown_symbol: &'static str,
    /// Cell content for stopped components.
    pub stopped_symbol: &'static str,
    /// Cell content for paused components.
    pub paused_symbol: &'static str,
    /// Cell content for running components.
    pub running_symbol: &'static str,
}

impl Theme {
    /// The classic dashboard palette.
    pub fn classic() -> Self {
        Self {
            unclassified: "black",
            unknown_symbol: "&nbsp;?&nbsp;&nbsp;",
            stopped_symbol: "&nbsp;X&nbsp;",
            paused_symbol: "&nbsp;=&nbsp;",
            running_symbol: "&nbsp;&nbsp;&nbsp;&nbsp;",
        }
    }

    /// Background color for a health cell.
    pub fn cell_color(&self, color: Option<HealthColor>) -> &'static str {
        color.map_or(self.unclassified, |c| c.as_str())
    }

    /// Content of a health cell.
    pub fn symbol(&self, state: RunState) -> &'static str {
        match state {
            RunState::Unknown => self.unknown_symbol,
            RunState::Stopped => self.stopped_symbol,
            RunState::Paused => self.paused_symbol,
            RunState::Running => self.running_symbol,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclassified_color_is_not_a_health_color() {
        let theme = Theme::classic();
        assert_eq!(theme.cell_color(None), "black");
        assert!(HealthColor::ALL
            .iter()
            .all(|c| theme.cell_color(Some(*c)) != theme.unclassified));
        assert_eq!(theme.cell_color(Some(HealthColor::Orange)), "orange");
    }

    #[test]
    fn symbols_per_run_state() {
        let theme = Theme::default();
        assert!(theme.symbol(RunState::Unknown).contains('?'));
        assert!(theme.symbol(RunState::Stopped).contains('X'));
        assert!(theme.symbol(RunState::Paused).contains('='));
        assert_eq!(
            theme.symbol(RunState::Running).replace("&nbsp;", ""),
            ""
        );
    }
}
