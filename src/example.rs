//! Example module: greetings and checked addition.
//!
//! Demonstrates the input handling used across the crate. Inputs are
//! trimmed and checked before use, failures are typed, and web output is
//! HTML-escaped as a whole.
//!
//! Greetings are rendered from a Tera template with a single `name`
//! variable, so the wording can be changed from config without code changes.

use std::fmt;
use tera::{Context, Tera};
use tracing::{error, warn};

use crate::config::GreetingConfig;

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "Hello, {{ name }}! Welcome to mailform.";
/// Name greeted by [`Greeter::safe_greet`] when the given one is unusable.
pub const DEFAULT_FALLBACK_NAME: &str = "Guest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A text parameter was empty or whitespace only
    Blank { param: &'static str },
    /// The sum does not fit in an `i64`
    Overflow { a: i64, b: i64 },
    /// The greeting template could not be rendered
    Template(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Blank { param } => {
                write!(f, "{} cannot be empty or contain only whitespace.", param)
            }
            InputError::Overflow { a, b } => {
                write!(f, "Sum of {} and {} does not fit in a 64-bit integer.", a, b)
            }
            InputError::Template(msg) => write!(f, "Invalid greeting template: {}", msg),
        }
    }
}

impl std::error::Error for InputError {}

/// Renders greetings from a template.
#[derive(Debug, Clone)]
pub struct Greeter {
    template: String,
    fallback_name: String,
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, DEFAULT_FALLBACK_NAME)
    }
}

impl Greeter {
    pub fn new(template: impl Into<String>, fallback_name: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            fallback_name: fallback_name.into(),
        }
    }

    pub fn from_config(config: &GreetingConfig) -> Self {
        Self::new(config.template.clone(), config.fallback_name.clone())
    }

    /// Greet `name`, trimmed.
    ///
    /// The result is not HTML-escaped; use [`Greeter::greet_for_web`] for
    /// markup contexts.
    pub fn greet(&self, name: &str) -> Result<String, InputError> {
        let name = require_text(name, "Name")?;
        self.render(name)
    }

    /// Greet `name`, falling back to the configured fallback name when
    /// `name` is missing or blank.
    ///
    /// Only template failures are returned as errors.
    pub fn safe_greet(&self, name: Option<&str>) -> Result<String, InputError> {
        match name.map(|name| self.greet(name)) {
            Some(Ok(greeting)) => Ok(greeting),
            Some(Err(InputError::Blank { .. })) | None => {
                warn!(
                    fallback = %self.fallback_name,
                    "Invalid input for greeting, using fallback name"
                );
                self.greet(&self.fallback_name)
            }
            Some(Err(e)) => Err(e),
        }
    }

    /// Greet `name` with the whole greeting HTML-escaped.
    ///
    /// Only `& < > " '` are replaced, so the result is safe inside element
    /// content and quoted attributes while `/` stays readable.
    pub fn greet_for_web(&self, name: &str) -> Result<String, InputError> {
        self.greet(name)
            .map(|greeting| html_escape::encode_quoted_attribute(&greeting).into_owned())
    }

    fn render(&self, name: &str) -> Result<String, InputError> {
        let mut context = Context::new();
        context.insert("name", name);

        Tera::one_off(&self.template, &context, false)
            .map_err(|e| InputError::Template(e.to_string()))
    }
}

/// Greet `name` with the default template.
///
/// ```
/// use mailform::example::greet;
///
/// assert_eq!(greet("  Bob  ").unwrap(), "Hello, Bob! Welcome to mailform.");
/// assert!(greet("   ").is_err());
/// ```
pub fn greet(name: &str) -> Result<String, InputError> {
    Greeter::default().greet(name)
}

/// Greet `name`, or `Guest` when `name` is missing or blank.
pub fn safe_greet(name: Option<&str>) -> Result<String, InputError> {
    Greeter::default().safe_greet(name)
}

/// Greet `name` with HTML-escaped output.
pub fn greet_for_web(name: &str) -> Result<String, InputError> {
    Greeter::default().greet_for_web(name)
}

/// Add two integers, failing instead of wrapping on overflow.
pub fn add_numbers(a: i64, b: i64) -> Result<i64, InputError> {
    a.checked_add(b).ok_or_else(|| {
        let err = InputError::Overflow { a, b };
        error!("Arithmetic validation failed: {}", err);
        err
    })
}

fn require_text<'a>(value: &'a str, param: &'static str) -> Result<&'a str, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank { param });
    }
    Ok(trimmed)
}
