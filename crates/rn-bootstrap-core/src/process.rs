//! External command execution
//!
//! Every external process the pipeline drives (framework bootstrap, package
//! installs, pod install, runtime probes) goes through [`CommandRunner`].
//! Substituting the trait with a recording fake makes each stage testable
//! without touching npm or npx.

use colored::Colorize;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;

/// One external command invocation: program, arguments, optional working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Run the command from `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// The command as it would be typed in a shell.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    Failed { command: String, code: i32 },
}

/// Runs external commands on behalf of the pipeline.
pub trait CommandRunner {
    /// Run to completion with the child's standard streams inherited by the
    /// user's terminal. Non-zero exit is an error.
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError>;

    /// Probe `<program> --version`, capturing output instead of inheriting
    /// it. Returns the trimmed version string when the probe succeeds.
    fn version_of(&self, program: &str) -> Option<String>;
}

/// Real runner: blocking `std::process` execution.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError> {
        println!("{} {}", "Running:".dimmed(), spec.display().yellow());

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|source| CommandError::Spawn {
            command: spec.display(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Failed {
                command: spec.display(),
                code: status.code().unwrap_or(-1),
            })
        }
    }

    fn version_of(&self, program: &str) -> Option<String> {
        let output = Command::new(program).arg("--version").output();
        match output {
            Ok(out) if out.status.success() => {
                Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
            }
            _ => None,
        }
    }
}
