//! Structured output abstraction for mailform.
//!
//! Provides a unified interface for outputting messages in different modes:
//! - Human: Colored symbol-prefixed output for terminal display
//! - Json: Structured JSON objects for programmatic consumption
//! - Quiet: Only command results are emitted
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::Colorize;
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use mailform::config::OutputFormat;

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable colored output
    Human,
    /// JSON-formatted structured output
    Json,
    /// Silent mode - results only
    Quiet,
}

impl OutputMode {
    /// Pick the mode from command-line flags, falling back to the configured format.
    pub fn resolve(json: bool, quiet: bool, configured: OutputFormat) -> Self {
        if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else {
            match configured {
                OutputFormat::Human => OutputMode::Human,
                OutputFormat::Json => OutputMode::Json,
            }
        }
    }
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false, // Assume non-TTY for custom writers
        }
    }

    /// Output a validation verdict: "✓ {email}" in green or "✗ {email}" in red
    pub fn verdict(&self, email: &str, valid: bool) {
        match self.mode {
            OutputMode::Human => {
                let prefix = match (valid, self.is_tty) {
                    (true, true) => "✓".green().to_string(),
                    (false, true) => "✗".red().to_string(),
                    (true, false) => "✓".to_string(),
                    (false, false) => "✗".to_string(),
                };
                self.write_line(&format!("{} {}", prefix, email));
            }
            OutputMode::Json => {
                self.json(&json!({ "email": email, "valid": valid }));
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output the result of a command.
    ///
    /// Printed as plain text in human and quiet mode; `value` is written
    /// instead in JSON mode.
    pub fn result(&self, text: &str, value: serde_json::Value) {
        match self.mode {
            OutputMode::Human | OutputMode::Quiet => self.write_line(text),
            OutputMode::Json => self.json(&value),
        }
    }

    /// Output a success message: "✓ {msg}" in green
    pub fn success(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "✓".green().to_string()
                } else {
                    "✓".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => {
                self.write_json("success", msg);
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                self.write_line(msg);
            }
            OutputMode::Json => {
                self.write_json("info", msg);
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output detail text (indented, for subordinate info)
    pub fn detail(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                self.write_line(&format!("  {}", msg));
            }
            OutputMode::Json => {
                self.write_json("detail", msg);
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output a structured JSON event
    pub fn json(&self, value: &serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Write a JSON-formatted log line
    fn write_json(&self, level: &str, msg: &str) {
        self.json(&json!({
            "level": level,
            "msg": msg,
        }));
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}
