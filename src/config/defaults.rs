//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::example::{DEFAULT_FALLBACK_NAME, DEFAULT_TEMPLATE};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_template, String, DEFAULT_TEMPLATE.to_string());
default_fn!(default_fallback_name, String, DEFAULT_FALLBACK_NAME.to_string());
default_fn!(default_workers, usize, 4);

/// Greeting configuration for the example commands
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreetingConfig {
    /// Tera template, rendered with a `name` variable
    #[serde(default = "default_template")]
    pub template: String,
    /// Name greeted when the given one is blank (used by `greet --safe`)
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            fallback_name: default_fallback_name(),
        }
    }
}

/// Batch validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Maximum number of threads used to validate a batch
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}
