//! Printable routing plans.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::router::CommandLine;

/// The commands routed for one set of staged paths.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    /// Commands in execution order.
    pub commands: Vec<CommandLine>,
}

impl RoutePlan {
    /// Renders the plan in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self
                .commands
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize plan to JSON")
            }
            OutputFormat::Yaml => super::to_yaml(self),
        }
    }
}

/// Output format for plans and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(format!("unknown format '{other}' (expected text, json or yaml)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::RouteConfig;

    fn plan() -> RoutePlan {
        let router = RouteConfig::defaults().unwrap().compile().unwrap();
        RoutePlan {
            commands: router.plan(
                Path::new("/repo"),
                &["/repo/api/bin/z.py", "/repo/api/openapi.yaml"],
            ),
        }
    }

    #[test]
    fn text_is_one_line_per_command() {
        let text = plan().render(OutputFormat::Text).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "cd ./api && make pre-commit args=\"/repo/api/bin/z.py\" \
                 flake_args=\"/repo/api/bin/z.py\" mypy_args=\"/repo/api/bin/z.py\"",
                "cd ./api && make lint-spectral",
            ]
        );
    }

    #[test]
    fn json_exposes_argument_array() {
        let json = plan().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["commands"][0]["program"], "make");
        assert_eq!(value["commands"][0]["args"][1], "args=/repo/api/bin/z.py");
        assert_eq!(value["commands"][1]["group"], "openapi");
    }

    #[test]
    fn yaml_lists_commands() {
        let yaml = plan().render(OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("lint-spectral"));
    }

    #[test]
    fn format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }
}
