//! Component registry: the fixed set of components a dashboard reports on.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

use crate::error::{DashboardError, Result};

/// Compile a component name filter.
///
/// The pattern is case-insensitive and must match the whole name. Blank or
/// unset patterns mean "no filter".
pub fn compile_component_pattern(pattern: Option<&str>) -> Result<Option<Regex>> {
    let Some(pattern) = pattern.filter(|p| !p.trim().is_empty()) else {
        return Ok(None);
    };

    RegexBuilder::new(&format!("^(?:{})$", pattern))
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|source| DashboardError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Ordered set of monitored component names.
///
/// Resolved once at startup; later changes to the runtime's components are
/// not picked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitoredSet {
    names: BTreeSet<String>,
}

impl MonitoredSet {
    /// Build the monitored set from every discovered component name.
    ///
    /// `own_name` is always excluded. With a pattern only fully matching
    /// names are kept.
    pub fn resolve<I, S>(discovered: I, own_name: &str, pattern: Option<&Regex>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = discovered
            .into_iter()
            .map(Into::into)
            .filter(|name| name != own_name)
            .filter(|name| pattern.map_or(true, |p| p.is_match(name)))
            .collect();

        Self { names }
    }

    /// Number of monitored components.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no components are monitored.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check if a component is monitored.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over the monitored names in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a MonitoredSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISCOVERED: [&str; 5] = ["fooComponent", "dashboard", "barService", "FooBar", "zeta"];

    #[test]
    fn excludes_own_name_without_pattern() {
        let set = MonitoredSet::resolve(DISCOVERED, "dashboard", None);

        assert_eq!(set.len(), 4);
        assert!(!set.contains("dashboard"));
        // Byte order: uppercase sorts before lowercase
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, ["FooBar", "barService", "fooComponent", "zeta"]);
    }

    #[test]
    fn pattern_is_case_insensitive() {
        let pattern = compile_component_pattern(Some("foo.*")).unwrap();
        let set = MonitoredSet::resolve(DISCOVERED, "dashboard", pattern.as_ref());

        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, ["FooBar", "fooComponent"]);
    }

    #[test]
    fn pattern_must_match_whole_name() {
        let pattern = compile_component_pattern(Some("foo")).unwrap();
        let set = MonitoredSet::resolve(DISCOVERED, "dashboard", pattern.as_ref());
        assert!(set.is_empty());

        let pattern = compile_component_pattern(Some("bar|zeta")).unwrap();
        let set = MonitoredSet::resolve(DISCOVERED, "dashboard", pattern.as_ref());
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, ["zeta"]);
    }

    #[test]
    fn pattern_cannot_readmit_own_name() {
        let pattern = compile_component_pattern(Some(".*")).unwrap();
        let set = MonitoredSet::resolve(DISCOVERED, "dashboard", pattern.as_ref());
        assert_eq!(set.len(), 4);
        assert!(!set.contains("dashboard"));
    }

    #[test]
    fn blank_pattern_means_no_filter() {
        assert!(compile_component_pattern(None).unwrap().is_none());
        assert!(compile_component_pattern(Some("")).unwrap().is_none());
        assert!(compile_component_pattern(Some("  ")).unwrap().is_none());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = compile_component_pattern(Some("foo(")).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidPattern { ref pattern, .. } if pattern == "foo("));
    }

    #[test]
    fn pattern_matching_nothing_gives_empty_set() {
        let pattern = compile_component_pattern(Some("nomatch")).unwrap();
        let set = MonitoredSet::resolve(DISCOVERED, "dashboard", pattern.as_ref());
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
