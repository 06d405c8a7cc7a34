//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid configuration name (debug/release style identifiers)
    pub fn configuration_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,15}"
    }

    /// Generate a workspace-relative project directory path
    pub fn project_directory() -> impl Strategy<Value = String> {
        "[a-z]{1,8}(/[a-z]{1,8}){0,3}"
    }

    /// Generate a make operation name (empty means the default target)
    pub fn operation_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("all".to_string()),
            Just("clean".to_string()),
            Just("install".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_configuration_name_generator(name in configuration_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().next().unwrap().is_ascii_lowercase());
        }

        #[test]
        fn test_project_directory_generator(path in project_directory()) {
            prop_assert!(!path.is_empty());
            prop_assert!(!path.starts_with('/'));
            prop_assert!(!path.ends_with('/'));
        }
    }
}
