//! Configuration management for mailform.
//!
//! Config files are markdown with YAML frontmatter. Two locations are read,
//! both optional:
//!
//! 1. Global config (`~/.config/mailform/config.md`)
//! 2. Project config (`.mailform/config.md`)
//!
//! Project values override global values field by field.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::example::Greeter;
use crate::paths;

pub mod defaults;

pub use defaults::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load the merged global and project configuration.
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(paths::CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config = PartialConfig::parse(content)?.merge_with(PartialConfig::default());
        config.validate()?;
        Ok(config)
    }

    /// Load merged configuration from the given global and project paths.
    /// Missing files are skipped.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would only fail later, at command time.
    pub fn validate(&self) -> Result<()> {
        if self.batch.workers == 0 {
            anyhow::bail!("batch.workers must be at least 1");
        }

        if self.greeting.fallback_name.trim().is_empty() {
            anyhow::bail!("greeting.fallback_name cannot be empty");
        }

        // Identical output for two different names means `name` is unused.
        let greeter = Greeter::from_config(&self.greeting);
        let first = greeter.greet("Ada").context("Invalid greeting.template")?;
        let second = greeter.greet("Grace").context("Invalid greeting.template")?;
        if first == second {
            anyhow::bail!("greeting.template must reference the {{{{ name }}}} variable");
        }

        Ok(())
    }
}

/// Path of the global config file, if a home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(paths::GLOBAL_CONFIG_FILE))
}

/// Split `---` delimited YAML frontmatter from the markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 3..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub greeting: Option<PartialGreetingConfig>,
    pub batch: Option<PartialBatchConfig>,
    pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialGreetingConfig {
    pub template: Option<String>,
    pub fallback_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialBatchConfig {
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_greeting = self.greeting.unwrap_or_default();
        let global_batch = self.batch.unwrap_or_default();
        let global_output = self.output.unwrap_or_default();
        let project_greeting = project.greeting.unwrap_or_default();
        let project_batch = project.batch.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();

        Config {
            greeting: GreetingConfig {
                // Project value > global value > default
                template: project_greeting
                    .template
                    .or(global_greeting.template)
                    .unwrap_or_else(defaults::default_template),
                fallback_name: project_greeting
                    .fallback_name
                    .or(global_greeting.fallback_name)
                    .unwrap_or_else(defaults::default_fallback_name),
            },
            batch: BatchConfig {
                workers: project_batch
                    .workers
                    .or(global_batch.workers)
                    .unwrap_or_else(defaults::default_workers),
            },
            output: OutputConfig {
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or_default(),
            },
        }
    }
}
