//! Named path lists forwarded to a downstream target.

use serde::Serialize;

use super::rule::Rule;

/// One named argument and the paths it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleEntry {
    /// Argument name.
    pub name: String,
    /// Matched paths in input order. Never empty.
    pub paths: Vec<String>,
}

impl BundleEntry {
    /// Renders the entry as a single argv element, `name=p1 p2`.
    pub fn to_arg(&self) -> String {
        format!("{}={}", self.name, self.paths.join(" "))
    }

    /// Renders the entry for display, `name="p1 p2"`.
    pub fn to_display(&self) -> String {
        format!("{}=\"{}\"", self.name, self.paths.join(" "))
    }
}

/// Ordered mapping from argument name to matched paths.
///
/// Only rules that matched at least one path have an entry; entries follow
/// the order of the rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentBundle {
    entries: Vec<BundleEntry>,
}

impl ArgumentBundle {
    /// Builds the bundle by applying each rule to `paths`.
    pub fn build<S: AsRef<str>>(rules: &[Rule], paths: &[S]) -> Self {
        let entries = rules
            .iter()
            .filter_map(|rule| {
                let matched = rule.select(paths);
                if matched.is_empty() {
                    None
                } else {
                    Some(BundleEntry {
                        name: rule.name.clone(),
                        paths: matched.into_iter().map(String::from).collect(),
                    })
                }
            })
            .collect();

        Self { entries }
    }

    /// Returns the entries in rule order.
    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    /// Returns true when no rule matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders every entry as an argv element.
    pub fn to_args(&self) -> Vec<String> {
        self.entries.iter().map(BundleEntry::to_arg).collect()
    }
}
