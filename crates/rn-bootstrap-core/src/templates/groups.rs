//! Conditional file groups copied into generated projects
//!
//! Groups are a declarative gating table folded into the selected set, so
//! the composer stays data-driven and the selection is testable by
//! enumerating the option combinations.

use crate::options::ProjectOptions;

/// A named, ordered set of template-relative paths gated by one generation
/// choice. Paths may name files or whole directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileGroup {
    pub name: &'static str,
    pub paths: &'static [&'static str],
}

/// Files every generated project receives.
const CORE: FileGroup = FileGroup {
    name: "core",
    paths: &[
        "src",
        "App.tsx",
        "babel.config.js",
        "tsconfig.json",
        ".env",
        ".env.example",
        ".prettierrc.js",
        ".eslintrc.js",
        "jest.config.js",
        "metro.config.js",
    ],
};

/// Per-environment configuration files.
const ENVIRONMENTS: FileGroup = FileGroup {
    name: "env",
    paths: &["env"],
};

/// Component catalog setup.
const STORYBOOK: FileGroup = FileGroup {
    name: "storybook",
    paths: &[".storybook", "stories"],
};

/// End-to-end test harness setup.
const DETOX: FileGroup = FileGroup {
    name: "detox",
    paths: &["__tests__", ".detoxrc.js"],
};

/// Gating table: each group with its selection predicate.
const GROUPS: &[(fn(&ProjectOptions) -> bool, FileGroup)] = &[
    (|_| true, CORE),
    (|_| true, ENVIRONMENTS),
    (|o| o.with_storybook, STORYBOOK),
    (|o| o.with_detox, DETOX),
];

/// Fold the gating table into the groups selected by `options`.
pub fn selected_groups(options: &ProjectOptions) -> Vec<FileGroup> {
    GROUPS
        .iter()
        .filter(|(gate, _)| gate(options))
        .map(|(_, group)| *group)
        .collect()
}
