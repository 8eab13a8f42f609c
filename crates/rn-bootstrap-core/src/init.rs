//! Project initialization via the framework bootstrap commands

use crate::options::ProjectOptions;
use crate::process::{CommandRunner, CommandSpec};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// The external command that creates the bare project for the chosen
/// framework variant.
pub fn bootstrap_command(options: &ProjectOptions) -> CommandSpec {
    if options.use_expo {
        CommandSpec::new(
            "npx",
            [
                "create-expo-app",
                options.name.as_str(),
                "--template",
                "blank-typescript",
            ],
        )
    } else {
        CommandSpec::new(
            "npx",
            [
                "react-native",
                "init",
                options.name.as_str(),
                "--template",
                "react-native-template-typescript",
            ],
        )
    }
}

/// Create the bare project and enter it.
///
/// Returns the absolute project root. The process working directory is
/// moved there; every later stage operates relative to the new root.
pub fn initialize_project<R: CommandRunner>(
    runner: &R,
    options: &ProjectOptions,
) -> Result<PathBuf> {
    runner
        .run(&bootstrap_command(options))
        .context("project bootstrap failed")?;

    let root = env::current_dir()
        .context("cannot resolve the current directory")?
        .join(options.name.as_str());
    env::set_current_dir(&root)
        .with_context(|| format!("failed to enter project directory {}", root.display()))?;
    Ok(root)
}
