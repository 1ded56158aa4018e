//! `help-all`: every command's help on one page.

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};

use crate::cli::Cli;

/// Help command options.
#[derive(Parser)]
pub struct HelpCommand {}

/// Renders the help of the whole command tree.
pub struct HelpGenerator {
    app: Command,
}

impl HelpGenerator {
    /// Creates a generator for the stage-router command tree.
    pub fn new() -> Self {
        Self { app: Cli::command() }
    }

    /// Generates the help of every command, depth first with siblings
    /// sorted by name, separated by a rule line.
    pub fn generate_all_help(&self) -> Result<String> {
        let mut sections = vec![self.render_command_help(&self.app, "")];
        self.collect_help_recursive(&self.app, "", &mut sections);

        let separator = format!("\n\n{}\n\n", "=".repeat(80));
        Ok(sections.join(&separator))
    }

    // Sorted so the output stays stable for snapshots.
    fn collect_help_recursive(&self, cmd: &Command, prefix: &str, sections: &mut Vec<String>) {
        let mut subcommands: Vec<&Command> = cmd
            .get_subcommands()
            .filter(|sub| sub.get_name() != "help")
            .collect();
        subcommands.sort_by(|a, b| a.get_name().cmp(b.get_name()));

        for sub in subcommands {
            let path = if prefix.is_empty() {
                sub.get_name().to_string()
            } else {
                format!("{prefix} {}", sub.get_name())
            };

            sections.push(self.render_command_help(sub, &path));
            self.collect_help_recursive(sub, &path, sections);
        }
    }

    fn render_command_help(&self, cmd: &Command, path: &str) -> String {
        let title = if path.is_empty() {
            cmd.get_name().to_string()
        } else {
            format!("stage-router {path}")
        };
        let about = cmd
            .get_about()
            .map_or_else(|| "No description available".to_string(), ToString::to_string);

        format!("{title} - {about}\n\n{}", cmd.clone().render_help())
    }
}

impl Default for HelpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    /// Prints the help of every command.
    pub fn execute(self) -> Result<()> {
        println!("{}", HelpGenerator::new().generate_all_help()?);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn help_generator_default() {
        let gen = HelpGenerator::default();
        assert_eq!(gen.app.get_name(), "stage-router");
    }

    #[test]
    fn generate_all_help_contains_all_commands() {
        let gen = HelpGenerator::new();
        let output = gen.generate_all_help().unwrap();
        for name in ["run", "route", "staged", "config", "config show", "install", "help-all"] {
            assert!(
                output.contains(&format!("stage-router {name} - ")),
                "missing section for {name}"
            );
        }
    }

    #[test]
    fn generate_all_help_uses_section_separators() {
        let gen = HelpGenerator::new();
        let output = gen.generate_all_help().unwrap();
        assert!(output.contains(&"=".repeat(80)));
    }

    #[test]
    fn generate_all_help_is_deterministic() {
        let output1 = HelpGenerator::new().generate_all_help().unwrap();
        let output2 = HelpGenerator::new().generate_all_help().unwrap();
        assert_eq!(output1, output2, "Help output should be deterministic");
    }

    #[test]
    fn render_command_help_includes_about() {
        let gen = HelpGenerator::new();
        let help = gen.render_command_help(&gen.app, "");
        assert!(help.contains("pre-commit make targets"));
    }
}
