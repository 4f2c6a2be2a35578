//! Action inputs read from the process environment.
//!
//! The runner exposes input `foo bar` as `INPUT_FOO_BAR`. Values are trimmed
//! and blank values are treated as absent, matching how the Actions toolkit
//! reads inputs.

use std::collections::HashMap;

use annotation::InputProvider;

/// [`InputProvider`] over a snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    vars: HashMap<String, String>,
}

impl ActionInputs {
    /// Snapshots the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Builds inputs from explicit `(name, value)` pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Environment variable name carrying input `name`.
    pub fn variable_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputProvider for ActionInputs {
    fn input(&self, name: &str) -> Option<String> {
        self.vars
            .get(&Self::variable_name(name))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn env(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotation::AnnotateError;

    #[test]
    fn input_names_map_to_upper_case_variables() {
        assert_eq!(ActionInputs::variable_name("axiomToken"), "INPUT_AXIOMTOKEN");
        assert_eq!(ActionInputs::variable_name("end time"), "INPUT_END_TIME");
    }

    #[test]
    fn inputs_are_trimmed_and_blank_is_absent() {
        let inputs = ActionInputs::from_vars([
            ("INPUT_TITLE", "  Release  "),
            ("INPUT_DESCRIPTION", "   "),
            ("INPUT_ENDTIME", ""),
        ]);

        assert_eq!(inputs.input("title").as_deref(), Some("Release"));
        assert_eq!(inputs.input("description"), None);
        assert_eq!(inputs.input("endTime"), None);
        assert_eq!(inputs.input("url"), None);
    }

    #[test]
    fn required_blank_input_is_missing() {
        let inputs = ActionInputs::from_vars([("INPUT_TYPE", " ")]);
        assert_eq!(
            inputs.required_input("type"),
            Err(AnnotateError::missing_input("type"))
        );
    }

    #[test]
    fn ambient_values_are_read_by_exact_name() {
        let inputs = ActionInputs::from_vars([
            ("GITHUB_REPOSITORY", "org/repo"),
            ("GITHUB_RUN_ID", "42"),
        ]);
        assert_eq!(inputs.env("GITHUB_REPOSITORY").as_deref(), Some("org/repo"));
        assert_eq!(inputs.env("GITHUB_RUN_ID").as_deref(), Some("42"));
        assert_eq!(inputs.env("github_run_id"), None);
    }
}
