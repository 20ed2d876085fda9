//! `config` command: show the effective configuration.

use anyhow::{Context, Result};

use mailform::config::{self, Config};

use crate::cmd::ui::{Output, OutputMode};

pub fn cmd_config_show(out: &Output, config: &Config) -> Result<()> {
    if out.mode() == OutputMode::Json {
        let value = serde_json::to_value(config).context("Failed to serialize config")?;
        out.json(&value);
        return Ok(());
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
    out.info(&format!("# project: {}", mailform::paths::CONFIG_FILE));
    if let Some(global) = config::global_config_path() {
        out.info(&format!("# global:  {}", global.display()));
    }
    out.result(yaml.trim_end(), serde_json::Value::Null);
    Ok(())
}
