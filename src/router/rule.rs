//! Pattern rules that select which paths populate an argument.

use regex::Regex;

/// Predicate deciding whether a staged path belongs to a rule.
#[derive(Debug, Clone)]
pub enum PathPredicate {
    /// Matches every path.
    All,
    /// Matches paths containing a match of the expression.
    Pattern(Regex),
}

impl PathPredicate {
    /// Returns true if the path satisfies this predicate.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::All => true,
            Self::Pattern(re) => re.is_match(path),
        }
    }
}

/// A named rule: paths matching the predicate are forwarded as `name=...`.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Argument name passed to the downstream target.
    pub name: String,
    /// Path predicate.
    pub predicate: PathPredicate,
    /// Disabled rules never contribute an argument.
    pub enabled: bool,
}

impl Rule {
    /// Creates an enabled rule matching every path.
    pub fn all(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: PathPredicate::All,
            enabled: true,
        }
    }

    /// Creates an enabled rule matching paths against `pattern`.
    pub fn pattern(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            predicate: PathPredicate::Pattern(Regex::new(pattern)?),
            enabled: true,
        })
    }

    /// Returns this rule with the given enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns the paths this rule selects, in input order.
    pub fn select<'a, S: AsRef<str>>(&self, paths: &'a [S]) -> Vec<&'a str> {
        if !self.enabled {
            return Vec::new();
        }

        paths
            .iter()
            .map(AsRef::as_ref)
            .filter(|path| self.predicate.matches(path))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        let rule = Rule::all("args");
        let paths = ["/a.py", "", "/weird path/b.py"];
        assert_eq!(rule.select(&paths), vec!["/a.py", "", "/weird path/b.py"]);
    }

    #[test]
    fn pattern_filters_and_keeps_order() {
        let rule = Rule::pattern("mypy_args", "/api/(focus_api|bin)/").unwrap();
        let paths = [
            "/repo/api/bin/z.py",
            "/repo/api/tests/y.py",
            "/repo/api/focus_api/x.py",
        ];
        assert_eq!(
            rule.select(&paths),
            vec!["/repo/api/bin/z.py", "/repo/api/focus_api/x.py"]
        );
    }

    #[test]
    fn pattern_requires_directory_segment() {
        let rule = Rule::pattern("flake_args", "/api/(focus_api|tests|bin)/").unwrap();
        assert!(rule.select(&["/repo/api/focus_api_old/x.py"]).is_empty());
        assert!(rule.select(&["/repo/api/conftest.py"]).is_empty());
    }

    #[test]
    fn disabled_rule_selects_nothing() {
        let rule = Rule::all("args").with_enabled(false);
        assert!(rule.select(&["/a.py"]).is_empty());
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(Rule::pattern("bad", "(unclosed").is_err());
    }
}
