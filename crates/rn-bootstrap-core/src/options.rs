//! Project naming and generation choices

use std::fmt;
use thiserror::Error;

/// Why a project name was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("project name is empty")]
    Empty,

    #[error("project name must start with a letter: '{0}'")]
    BadStart(String),

    #[error("project name must contain only letters and numbers: '{0}'")]
    BadChar(String),
}

/// A validated project name.
///
/// Starts with an ASCII letter, followed by ASCII letters and digits only.
/// Validation happens exactly once, at construction; every later stage
/// receives the proven type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let mut chars = raw.chars();
        match chars.next() {
            None => return Err(NameError::Empty),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(NameError::BadStart(raw.to_string()))
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_alphanumeric()) {
            return Err(NameError::BadChar(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Choices collected once at the start of a run; immutable afterwards.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    pub name: ProjectName,

    /// Managed (Expo) workflow instead of the React Native CLI workflow.
    pub use_expo: bool,

    /// Include the Storybook component-catalog file group and packages.
    pub with_storybook: bool,

    /// Include the Detox end-to-end testing file group and package.
    pub with_detox: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(use_expo: bool, with_storybook: bool, with_detox: bool) -> ProjectOptions {
        ProjectOptions {
            name: ProjectName::parse("MyApp").unwrap(),
            use_expo,
            with_storybook,
            with_detox,
        }
    }

    #[test]
    fn accepts_alphanumeric_names_starting_with_a_letter() {
        for name in ["MyApp", "myapp", "App1", "a", "X2Y3"] {
            assert_eq!(ProjectName::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(ProjectName::parse(""), Err(NameError::Empty));
    }

    #[test]
    fn rejects_leading_digit_or_symbol() {
        assert!(matches!(
            ProjectName::parse("1App"),
            Err(NameError::BadStart(_))
        ));
        assert!(matches!(
            ProjectName::parse("-app"),
            Err(NameError::BadStart(_))
        ));
    }

    #[test]
    fn rejects_punctuation_and_whitespace() {
        for name in ["bad-name!", "my app", "my_app", "app.name", "app/name"] {
            assert!(matches!(
                ProjectName::parse(name),
                Err(NameError::BadChar(_))
            ));
        }
    }

    #[test]
    fn options_are_plain_data() {
        let opts = options(false, true, true);
        let copy = opts.clone();
        assert_eq!(copy.name.as_str(), "MyApp");
        assert!(!copy.use_expo);
    }
}
