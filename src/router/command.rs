//! Downstream command lines.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

/// A downstream invocation: a program, its argument array and the
/// directory it runs in, relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    /// Name of the file group that produced this command.
    pub group: String,
    /// Working directory relative to the repository root.
    pub workdir: PathBuf,
    /// Program to execute.
    pub program: String,
    /// Arguments passed verbatim; never re-parsed by a shell.
    pub args: Vec<String>,
    /// Display form, `cd <workdir> && <program> <args...>`.
    pub display: String,
}

impl CommandLine {
    /// Creates a command line. `display_args` are the argument forms shown
    /// to the user, which may differ from `args` in quoting.
    pub fn new(
        group: impl Into<String>,
        workdir: impl Into<PathBuf>,
        program: impl Into<String>,
        args: Vec<String>,
        display_args: &[String],
    ) -> Self {
        let workdir = workdir.into();
        let program = program.into();

        let mut display = format!("cd {} && {}", workdir.display(), program);
        for arg in display_args {
            display.push(' ');
            display.push_str(arg);
        }

        Self {
            group: group.into(),
            workdir,
            program,
            args,
            display,
        }
    }

    /// Builds a process for this command rooted at `root`.
    pub fn to_process(&self, root: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(root.join(&self.workdir));
        command
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let cmd = CommandLine::new(
            "openapi",
            "./api",
            "make",
            vec!["lint-spectral".to_string()],
            &["lint-spectral".to_string()],
        );
        assert_eq!(cmd.to_string(), "cd ./api && make lint-spectral");
    }

    #[test]
    fn process_keeps_arguments_intact() {
        let arg = "args=/repo/a b.py /repo/$(rm).py".to_string();
        let cmd = CommandLine::new(
            "python",
            "./api",
            "make",
            vec!["pre-commit".to_string(), arg.clone()],
            &[],
        );
        let process = cmd.to_process(Path::new("/repo"));
        let args: Vec<_> = process.get_args().collect();
        assert_eq!(args.len(), 2);
        assert_eq!(args[1], arg.as_str());
        assert_eq!(process.get_current_dir(), Some(Path::new("/repo/./api")));
    }
}
