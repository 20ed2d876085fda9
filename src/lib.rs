//! # mailform
//!
//! Syntactic email address validation, plus the small toolkit a new project
//! usually starts with.
//!
//! ## Overview
//!
//! The core of the crate is [`validators`]: a pure, linear-time check of an
//! address's shape (one `@`, a sane local part, a domain made of proper
//! labels and an alphabetic top-level label). Nothing is looked up on the
//! network. Around it sit a greeting/arithmetic [`example`] module,
//! [`string_utils`] for case conversion and whitespace cleanup, and
//! [`config`] for the `mailform` CLI.
//!
//! ## Modules
//!
//! - [`validators`] - Email format validation, single and batch
//! - [`example`] - Greeting and checked addition, with input validation
//! - [`string_utils`] - snake/camel/pascal/kebab case and text helpers
//! - [`config`] - Configuration loading and merging
//!
//! ## Example
//!
//! ```
//! use mailform::validators::{validate, validate_batch, ValidationError};
//!
//! assert_eq!(validate("user@example.com"), Ok(true));
//! assert_eq!(validate("user..name@example.com"), Ok(false));
//! assert_eq!(validate(&None::<&str>), Err(ValidationError::NotText));
//!
//! let results = validate_batch(["a@b.com", "bad"]);
//! assert!(results["a@b.com"]);
//! assert!(!results["bad"]);
//! ```

pub mod config;
pub mod example;
pub mod string_utils;
pub mod validators;

/// Default path constants for mailform configuration.
pub mod paths {
    /// Project configuration directory: `.mailform`
    pub const CONFIG_DIR: &str = ".mailform";
    /// Project configuration file: `.mailform/config.md`
    pub const CONFIG_FILE: &str = ".mailform/config.md";
    /// Global configuration file, relative to the home directory
    pub const GLOBAL_CONFIG_FILE: &str = ".config/mailform/config.md";
}
