//! Utility commands (version, man page generation, completion).

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use serde_json::json;
use std::io;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::cmd::ui::Output;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_SHA: &str = env!("GIT_SHA");
const BUILD_DATE: &str = env!("BUILD_DATE");

/// Show version information.
///
/// JSON mode always includes build details; `verbose` only affects text.
pub fn cmd_version(out: &Output, verbose: bool) -> Result<()> {
    let mut text = format!("mailform {}", VERSION);
    if verbose {
        text.push_str(&format!("\ncommit: {}\nbuilt: {}", GIT_SHA, BUILD_DATE));
    }

    out.result(
        &text,
        json!({
            "name": "mailform",
            "version": VERSION,
            "commit": GIT_SHA,
            "built": BUILD_DATE,
        }),
    );
    Ok(())
}

/// Generate man page
pub fn cmd_man(out: &Output, out_dir: Option<&PathBuf>) -> Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let output_dir = out_dir
        .map(|p| p.to_owned())
        .unwrap_or_else(|| PathBuf::from("."));

    std::fs::create_dir_all(&output_dir)?;
    let man_path = output_dir.join("mailform.1");
    std::fs::write(&man_path, buffer)?;

    out.success(&format!("Man page written to: {}", man_path.display()));
    Ok(())
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "mailform", &mut io::stdout());
    Ok(())
}
