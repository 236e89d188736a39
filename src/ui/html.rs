//! HTML rendering of the dashboard.
//!
//! Produces a small, dependency-free page: one table row per monitored
//! component, a `meta refresh` so the browser re-requests the page, and the
//! time the page was generated.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use flowboard_types::HealthColor;

use super::theme::Theme;
use crate::data::MonitoredSet;
use crate::source::ComponentDirectory;

/// Everything one render needs.
#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    /// Heading shown above the table.
    pub host_label: &'a str,
    /// Client-side refresh interval in seconds.
    pub refresh_period: u32,
    /// Components to list, in display order.
    pub components: &'a MonitoredSet,
    /// Classification of every component evaluated this cycle.
    pub colors: &'a HashMap<String, HealthColor>,
    /// Run state lookup for the symbols.
    pub directory: &'a dyn ComponentDirectory,
    pub theme: &'a Theme,
}

/// Render the dashboard document.
///
/// Pure apart from reading `view.directory`; missing colors or unknown
/// components degrade to the theme's "unknown" presentation.
pub fn render_html(view: &DashboardView<'_>, now: &DateTime<Local>) -> String {
    let mut out = String::from("<html><head>\n");
    out.push_str(&format!(
        "<meta http-equiv=\"refresh\" content=\"{}\" />\n",
        view.refresh_period
    ));
    out.push_str("</head><body><font size=\"2\">\n");
    out.push_str(&format!(
        "<h3>{}</h3><table border=\"1\" cellpadding=\"1\" cellspacing=\"0\">\n",
        escape_html(view.host_label)
    ));

    for name in view.components.iter() {
        let color = view.theme.cell_color(view.colors.get(name).copied());
        let symbol = view.theme.symbol(view.directory.run_state(name));

        out.push_str(&format!(
            "<tr><td><font size=\"2\">{}&nbsp;</font></td><td bgcolor=\"{}\">{}</td></tr>\n",
            escape_html(name),
            color,
            symbol
        ));
    }

    out.push_str("</table><br/>\n");
    out.push_str(&format_timestamp(now));
    out.push('\n');
    out.push_str("</font></body></html>\n");
    out
}

/// Human-readable timestamp, e.g. `Fri Oct 16 09:05:03 +02:00 2026`.
pub fn format_timestamp(now: &DateTime<Local>) -> String {
    now.format("%a %b %d %H:%M:%S %Z %Y").to_string()
}

/// Escape text for use in HTML content and attribute values.
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use flowboard_types::RunState;

    #[derive(Debug, Default)]
    struct FixedDirectory(HashMap<String, RunState>);

    impl ComponentDirectory for FixedDirectory {
        fn run_state(&self, name: &str) -> RunState {
            self.0.get(name).copied().unwrap_or_default()
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 16, 9, 5, 3).unwrap()
    }

    fn rows(html: &str) -> Vec<&str> {
        html.lines().filter(|l| l.starts_with("<tr>")).collect()
    }

    #[test]
    fn renders_one_row_per_component_in_order() {
        let components = MonitoredSet::resolve(["zeta", "alpha", "mid"], "dashboard", None);
        let mut colors = HashMap::new();
        colors.insert("alpha".to_string(), HealthColor::Red);
        colors.insert("zeta".to_string(), HealthColor::Lime);
        let directory = FixedDirectory(
            [
                ("alpha".to_string(), RunState::Running),
                ("mid".to_string(), RunState::Paused),
                ("zeta".to_string(), RunState::Stopped),
            ]
            .into_iter()
            .collect(),
        );
        let theme = Theme::classic();

        let view = DashboardView {
            host_label: "app-01",
            refresh_period: 60,
            components: &components,
            colors: &colors,
            directory: &directory,
            theme: &theme,
        };
        let html = render_html(&view, &now());

        let rows = rows(&html);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            "<tr><td><font size=\"2\">alpha&nbsp;</font></td><td bgcolor=\"red\">&nbsp;&nbsp;&nbsp;&nbsp;</td></tr>"
        );
        assert_eq!(
            rows[1],
            "<tr><td><font size=\"2\">mid&nbsp;</font></td><td bgcolor=\"black\">&nbsp;=&nbsp;</td></tr>"
        );
        assert_eq!(
            rows[2],
            "<tr><td><font size=\"2\">zeta&nbsp;</font></td><td bgcolor=\"lime\">&nbsp;X&nbsp;</td></tr>"
        );
        assert!(html.contains("<h3>app-01</h3>"));
    }

    #[test]
    fn declares_refresh_and_timestamp() {
        let components = MonitoredSet::default();
        let colors = HashMap::new();
        let directory = FixedDirectory::default();
        let theme = Theme::classic();

        let view = DashboardView {
            host_label: "h",
            refresh_period: 30,
            components: &components,
            colors: &colors,
            directory: &directory,
            theme: &theme,
        };
        let html = render_html(&view, &now());

        assert!(html.starts_with("<html><head>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<meta http-equiv=\"refresh\" content=\"30\" />"));
        assert!(html.contains("Fri Oct 16 09:05:03"));
        assert!(html.contains("2026"));
        assert!(rows(&html).is_empty());
    }

    #[test]
    fn unknown_component_gets_question_mark() {
        let components = MonitoredSet::resolve(["ghost"], "dashboard", None);
        let colors = HashMap::new();
        let directory = FixedDirectory::default();
        let theme = Theme::classic();

        let view = DashboardView {
            host_label: "h",
            refresh_period: 60,
            components: &components,
            colors: &colors,
            directory: &directory,
            theme: &theme,
        };
        let html = render_html(&view, &now());

        assert!(html.contains("ghost&nbsp;</font></td><td bgcolor=\"black\">&nbsp;?&nbsp;&nbsp;</td>"));
    }

    #[test]
    fn escapes_names_and_host_label() {
        let components = MonitoredSet::resolve(["<script>"], "dashboard", None);
        let colors = HashMap::new();
        let directory = FixedDirectory::default();
        let theme = Theme::classic();

        let view = DashboardView {
            host_label: "a&b",
            refresh_period: 60,
            components: &components,
            colors: &colors,
            directory: &directory,
            theme: &theme,
        };
        let html = render_html(&view, &now());

        assert!(html.contains("<h3>a&amp;b</h3>"));
        assert!(html.contains("&lt;script&gt;&nbsp;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("simple"), "simple");
        assert_eq!(escape_html("a\"b'c"), "a&quot;b&#39;c");
        assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
    }
}
