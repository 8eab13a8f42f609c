//! Platform-specific post-processing
//!
//! The React Native CLI workflow needs its iOS native dependencies linked
//! after install, which only works on a macOS host. Every other
//! host/framework combination is a silent no-op.

use crate::options::ProjectOptions;
use crate::process::{CommandRunner, CommandSpec};
use anyhow::{Context, Result};
use std::path::Path;

/// `std::env::consts::OS` value for the host that can run pod install.
pub const MACOS: &str = "macos";

/// Whether this run needs the iOS native dependency step.
pub fn needs_pod_install(options: &ProjectOptions, host_os: &str) -> bool {
    !options.use_expo && host_os == MACOS
}

/// Install iOS native dependencies when the workflow and host require it.
/// Returns whether the step ran.
pub fn install_ios_pods<R: CommandRunner>(
    runner: &R,
    options: &ProjectOptions,
    project_root: &Path,
    host_os: &str,
) -> Result<bool> {
    if !needs_pod_install(options, host_os) {
        return Ok(false);
    }

    let spec = CommandSpec::new("pod", ["install"]).in_dir(project_root.join("ios"));
    runner.run(&spec).context("pod install failed")?;
    Ok(true)
}
