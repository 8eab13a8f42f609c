//! Detection of the external tooling the generator drives
//!
//! Probed before any side effect: Node.js and npm must be present for the
//! bootstrap and install stages to work at all, so their absence aborts the
//! run with install hints. CocoaPods is probed only when the run will later
//! need it, and is advisory - `npm run pod-install` can redo that step.

use crate::process::CommandRunner;
use anyhow::Result;
use std::fmt;

/// Probe result for one external tool
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    fn probe<R: CommandRunner>(runner: &R, name: &'static str, program: &str) -> Self {
        match runner.version_of(program) {
            Some(version) => Self {
                name,
                version: Some(version),
                available: true,
            },
            None => Self {
                name,
                version: None,
                available: false,
            },
        }
    }
}

impl fmt::Display for RuntimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.available {
            write!(
                f,
                "{} ({})",
                self.name,
                self.version.as_deref().unwrap_or("unknown")
            )
        } else {
            write!(f, "{} (not installed)", self.name)
        }
    }
}

pub fn check_node<R: CommandRunner>(runner: &R) -> RuntimeInfo {
    RuntimeInfo::probe(runner, "Node.js", "node")
}

pub fn check_npm<R: CommandRunner>(runner: &R) -> RuntimeInfo {
    RuntimeInfo::probe(runner, "npm", "npm")
}

pub fn check_cocoapods<R: CommandRunner>(runner: &R) -> RuntimeInfo {
    RuntimeInfo::probe(runner, "CocoaPods", "pod")
}

/// Verify the tooling for one generation run before any side effect.
///
/// Fails listing every missing required tool; a missing CocoaPods is
/// reported in the results but never fatal.
pub fn preflight<R: CommandRunner>(
    runner: &R,
    needs_cocoapods: bool,
) -> Result<Vec<RuntimeInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    let node = check_node(runner);
    if node.available {
        results.push(node);
    } else {
        missing.push("Node.js (install from https://nodejs.org)");
    }

    let npm = check_npm(runner);
    if npm.available {
        results.push(npm);
    } else {
        missing.push("npm (ships with Node.js, https://nodejs.org)");
    }

    if needs_cocoapods {
        results.push(check_cocoapods(runner));
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tooling:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}
