//! Configuration for artifact emission.

/// Configuration for both emitters.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name given to the single parameter of each declaration
    pub(crate) param_name: String,
    /// Prefix of every generated function symbol
    pub(crate) function_prefix: String,
    /// Leading part of every `TEST_CASE` title
    pub(crate) suite_prefix: String,
    /// Category label used for the zero-parameter case
    pub(crate) null_category: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            param_name: "x".to_string(),
            function_prefix: "test_".to_string(),
            suite_prefix: "Register Allocation".to_string(),
            null_category: "Null Types".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parameter name used in declarations.
    pub fn param_name(mut self, value: impl Into<String>) -> Self {
        self.param_name = value.into();
        self
    }

    /// Set the `TEST_CASE` title prefix.
    pub fn suite_prefix(mut self, value: impl Into<String>) -> Self {
        self.suite_prefix = value.into();
        self
    }

    /// Symbol name of the function generated for `identifier`.
    pub fn symbol(&self, identifier: &str) -> String {
        format!("{}{}", self.function_prefix, identifier)
    }

    pub(crate) fn title(&self, category: &str) -> String {
        format!("{} - {}", self.suite_prefix, category)
    }
}
