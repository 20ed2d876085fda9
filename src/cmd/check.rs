//! Email validation commands: `check` and `batch`.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use mailform::validators::{self, EmailCandidate};

use crate::cmd::ui::{Output, OutputMode};

/// Counts reported at the end of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub valid: usize,
    pub invalid: usize,
}

/// Check one address. Returns the verdict.
pub fn cmd_check(out: &Output, email: &str) -> Result<bool> {
    let valid = validators::validate_email_format(email);
    out.verdict(email, valid);
    Ok(valid)
}

/// Check addresses from the command line and, optionally, a file.
///
/// Each distinct input is reported once, in first-seen order.
pub fn cmd_batch(
    out: &Output,
    emails: &[String],
    file: Option<&Path>,
    workers: usize,
) -> Result<BatchSummary> {
    let mut candidates: Vec<Value> = emails.iter().cloned().map(Value::String).collect();

    if let Some(path) = file {
        let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string());
        candidates.extend(read_candidates(&path)?);
    }

    if candidates.is_empty() {
        anyhow::bail!(
            "No email addresses given.\n\n\
             Usage:\n  \
             mailform batch user@example.com other@example.org\n  \
             mailform batch --file <PATH>"
        );
    }

    debug!(count = candidates.len(), workers, "Running batch validation");
    let results = validators::validate_batch_parallel(candidates.as_slice(), workers);

    let mut summary = BatchSummary::default();
    let mut seen = HashSet::new();
    for candidate in &candidates {
        let key = candidate.batch_key();
        if !seen.insert(key.clone()) {
            continue;
        }

        let valid = results.get(&key).copied().unwrap_or(false);
        if valid {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
        out.verdict(&key, valid);
    }

    match out.mode() {
        OutputMode::Json => out.json(&json!({
            "valid": summary.valid,
            "invalid": summary.invalid,
        })),
        _ => out.info(&format!(
            "\n{} valid, {} invalid",
            summary.valid, summary.invalid
        )),
    }

    Ok(summary)
}

/// Read batch input from a file.
///
/// A file whose content starts with `[` must be a JSON array; its entries
/// may be of any JSON type. Anything else is read as one address per line,
/// skipping empty lines.
pub fn read_candidates(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read email list from {}", path.display()))?;

    parse_candidates(&content)
        .with_context(|| format!("Failed to parse email list in {}", path.display()))
}

fn parse_candidates(content: &str) -> Result<Vec<Value>> {
    if content.trim_start().starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(content).context("Expected a JSON array of addresses")?;
        return Ok(values);
    }

    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect())
}
