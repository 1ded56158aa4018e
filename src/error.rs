//! Routing and execution errors.

use thiserror::Error;

/// Errors raised while loading routes or running the routed commands.
#[derive(Error, Debug)]
pub enum RouterError {
    /// A rule's path pattern is not a valid regular expression.
    #[error("Invalid pattern for rule '{rule}' in group '{group}': {source}")]
    InvalidPattern {
        /// Group declaring the rule.
        group: String,
        /// Rule name.
        rule: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A group's file glob cannot be compiled.
    #[error("Invalid glob '{glob}' for group '{group}': {source}")]
    InvalidGlob {
        /// Group name.
        group: String,
        /// The offending glob.
        glob: String,
        /// Underlying globset error.
        #[source]
        source: globset::Error,
    },

    /// Two groups share the same name.
    #[error("Duplicate group name: {0}")]
    DuplicateGroup(String),

    /// Two rules in one group share the same argument name.
    #[error("Duplicate rule '{rule}' in group '{group}'")]
    DuplicateRule {
        /// Group name.
        group: String,
        /// Rule name.
        rule: String,
    },

    /// A group definition is structurally incomplete.
    #[error("Invalid group '{group}': {reason}")]
    InvalidGroup {
        /// Group name (may be empty).
        group: String,
        /// What is missing.
        reason: String,
    },

    /// No group with the requested name exists.
    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    /// The downstream program could not be started.
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        /// Display form of the command.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The downstream program exited unsuccessfully.
    #[error("`{command}` failed with {}", describe_exit(.code))]
    CommandFailed {
        /// Display form of the command.
        command: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
    },
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_string(), |c| format!("exit code {c}"))
}
