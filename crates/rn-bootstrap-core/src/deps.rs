//! Option-dependent dependency planning and installation
//!
//! The two install lists are the union of a base table and the increments
//! whose gates hold, folded in table order with duplicates dropped. Each
//! list installs as one batched package-manager invocation to keep process
//! spawns and dependency resolution passes to a minimum.

use crate::options::ProjectOptions;
use crate::process::{CommandRunner, CommandSpec};
use anyhow::{Context, Result};

/// Packages every generated project depends on.
const BASE_DEPENDENCIES: &[&str] = &[
    "@react-navigation/native",
    "@react-navigation/stack",
    "@react-navigation/bottom-tabs",
    "@react-navigation/drawer",
    "react-native-screens",
    "react-native-safe-area-context",
    "react-native-gesture-handler",
    "react-native-reanimated",
    "zustand",
    "react-native-mmkv",
    "axios",
    "@apollo/client",
    "graphql",
    "@tanstack/react-query",
    "react-hook-form",
    "@hookform/resolvers",
    "yup",
    "react-native-vector-icons",
    "react-native-modal",
    "react-native-toast-message",
    "react-native-config",
    "@react-native-community/netinfo",
    "@react-native-async-storage/async-storage",
];

/// Native modules: only installable under the React Native CLI workflow.
const NATIVE_DEPENDENCIES: &[&str] = &[
    "react-native-splash-screen",
    "react-native-sqlite-storage",
    "react-native-push-notification",
    "@react-native-firebase/app",
    "@react-native-firebase/messaging",
    "@react-native-firebase/analytics",
    "react-native-keychain",
    "@rnmapbox/maps",
    "@sentry/react-native",
    "react-native-fs",
    "react-native-document-picker",
    "react-native-image-picker",
    "react-native-permissions",
];

const BASE_DEV_DEPENDENCIES: &[&str] = &[
    "babel-plugin-module-resolver",
    "@types/react-native-sqlite-storage",
    "@types/react-native-vector-icons",
];

const STORYBOOK_DEV_DEPENDENCIES: &[&str] = &[
    "@storybook/react-native",
    "@storybook/addon-actions",
    "@storybook/addon-controls",
    "@storybook/addon-ondevice-actions",
    "@storybook/addon-ondevice-controls",
];

const DETOX_DEV_DEPENDENCIES: &[&str] = &["detox"];

/// Reactotron hooks into the native debugging pipeline.
const NATIVE_DEV_DEPENDENCIES: &[&str] = &[
    "reactotron-react-native",
    "reactotron-redux",
    "reactotron-flipper",
];

type Gate = fn(&ProjectOptions) -> bool;

/// Runtime-list gating table.
const RUNTIME_TABLE: &[(Gate, &[&str])] = &[
    (|_| true, BASE_DEPENDENCIES),
    (|o| !o.use_expo, NATIVE_DEPENDENCIES),
];

/// Development-list gating table.
const DEV_TABLE: &[(Gate, &[&str])] = &[
    (|_| true, BASE_DEV_DEPENDENCIES),
    (|o| o.with_storybook, STORYBOOK_DEV_DEPENDENCIES),
    (|o| o.with_detox, DETOX_DEV_DEPENDENCIES),
    (|o| !o.use_expo, NATIVE_DEV_DEPENDENCIES),
];

/// The two install lists for one generation run. Order follows the gating
/// tables, so equal options always produce equal plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPlan {
    pub dependencies: Vec<&'static str>,
    pub dev_dependencies: Vec<&'static str>,
}

impl DependencyPlan {
    /// Union the base tables with every increment whose gate holds.
    pub fn for_options(options: &ProjectOptions) -> Self {
        Self {
            dependencies: fold(RUNTIME_TABLE, options),
            dev_dependencies: fold(DEV_TABLE, options),
        }
    }
}

fn fold(table: &[(Gate, &[&'static str])], options: &ProjectOptions) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for (gate, packages) in table {
        if gate(options) {
            for package in *packages {
                if !out.contains(package) {
                    out.push(*package);
                }
            }
        }
    }
    out
}

/// Install both lists, one batched package-manager invocation each.
pub fn install<R: CommandRunner>(runner: &R, plan: &DependencyPlan) -> Result<()> {
    let mut runtime = vec!["install"];
    runtime.extend_from_slice(&plan.dependencies);
    runner
        .run(&CommandSpec::new("npm", runtime))
        .context("dependency install failed")?;

    let mut development = vec!["install", "--save-dev"];
    development.extend_from_slice(&plan.dev_dependencies);
    runner
        .run(&CommandSpec::new("npm", development))
        .context("dev dependency install failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ProjectName;
    use std::collections::HashSet;

    fn options(use_expo: bool, with_storybook: bool, with_detox: bool) -> ProjectOptions {
        ProjectOptions {
            name: ProjectName::parse("MyApp").unwrap(),
            use_expo,
            with_storybook,
            with_detox,
        }
    }

    fn expected_runtime(use_expo: bool) -> Vec<&'static str> {
        let mut expected = BASE_DEPENDENCIES.to_vec();
        if !use_expo {
            expected.extend_from_slice(NATIVE_DEPENDENCIES);
        }
        expected
    }

    fn expected_dev(use_expo: bool, with_storybook: bool, with_detox: bool) -> Vec<&'static str> {
        let mut expected = BASE_DEV_DEPENDENCIES.to_vec();
        if with_storybook {
            expected.extend_from_slice(STORYBOOK_DEV_DEPENDENCIES);
        }
        if with_detox {
            expected.extend_from_slice(DETOX_DEV_DEPENDENCIES);
        }
        if !use_expo {
            expected.extend_from_slice(NATIVE_DEV_DEPENDENCIES);
        }
        expected
    }

    #[test]
    fn every_flag_combination_yields_exactly_base_plus_selected_increments() {
        for use_expo in [false, true] {
            for with_storybook in [false, true] {
                for with_detox in [false, true] {
                    let plan =
                        DependencyPlan::for_options(&options(use_expo, with_storybook, with_detox));
                    assert_eq!(plan.dependencies, expected_runtime(use_expo));
                    assert_eq!(
                        plan.dev_dependencies,
                        expected_dev(use_expo, with_storybook, with_detox)
                    );
                }
            }
        }
    }

    #[test]
    fn plans_contain_no_duplicates() {
        for use_expo in [false, true] {
            for with_storybook in [false, true] {
                for with_detox in [false, true] {
                    let plan =
                        DependencyPlan::for_options(&options(use_expo, with_storybook, with_detox));
                    let runtime: HashSet<_> = plan.dependencies.iter().collect();
                    let dev: HashSet<_> = plan.dev_dependencies.iter().collect();
                    assert_eq!(runtime.len(), plan.dependencies.len());
                    assert_eq!(dev.len(), plan.dev_dependencies.len());
                }
            }
        }
    }

    #[test]
    fn expo_projects_skip_native_modules() {
        let plan = DependencyPlan::for_options(&options(true, true, true));
        assert!(!plan.dependencies.contains(&"react-native-splash-screen"));
        assert!(!plan.dependencies.contains(&"@sentry/react-native"));
        assert!(!plan.dev_dependencies.contains(&"reactotron-react-native"));
    }

    #[test]
    fn feature_packs_add_their_dev_packages() {
        let plan = DependencyPlan::for_options(&options(false, true, true));
        assert!(plan.dev_dependencies.contains(&"@storybook/react-native"));
        assert!(plan.dev_dependencies.contains(&"detox"));

        let bare = DependencyPlan::for_options(&options(false, false, false));
        assert!(!bare.dev_dependencies.contains(&"@storybook/react-native"));
        assert!(!bare.dev_dependencies.contains(&"detox"));
    }

    #[test]
    fn equal_options_produce_equal_plans() {
        let a = DependencyPlan::for_options(&options(false, true, false));
        let b = DependencyPlan::for_options(&options(false, true, false));
        assert_eq!(a, b);
    }
}
