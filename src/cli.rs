//! CLI argument definitions for mailform.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailform")]
#[command(version)]
#[command(about = "Email format validation and project starter utilities", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    mailform check user@example.com\n    mailform batch a@b.com bad --json\n    mailform batch --file ~/lists/signups.json\n    mailform greet --safe \"  \"\n    mailform add --verbose 10 20"
)]
pub struct Cli {
    /// Emit one JSON object per line instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single email address (exit code 1 when invalid)
    Check {
        /// Address to check; surrounding whitespace is ignored
        email: String,
    },
    /// Check many email addresses at once (exit code 1 when any is invalid)
    Batch {
        /// Addresses to check
        emails: Vec<String>,
        /// Read addresses from a file: a JSON array or one address per line
        #[arg(long, short, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Worker threads (defaults to batch.workers from config)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
        workers: Option<u16>,
    },
    /// Greet a person
    Greet {
        /// Name of the person to greet
        name: String,
        /// Fall back to the configured name instead of failing on a blank name
        #[arg(long, conflicts_with = "web")]
        safe: bool,
        /// HTML-escape the greeting for web contexts
        #[arg(long)]
        web: bool,
    },
    /// Add two integers
    Add {
        /// First number
        #[arg(allow_negative_numbers = true)]
        a: i64,
        /// Second number
        #[arg(allow_negative_numbers = true)]
        b: i64,
        /// Show the calculation
        #[arg(long)]
        verbose: bool,
    },
    /// Text transformations
    Text {
        #[command(subcommand)]
        command: TextCommands,
    },
    /// Show the effective configuration
    Config,
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    #[command(hide = true)]
    Man {
        /// Output directory for the man page (defaults to current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

/// Subcommands for text transformations
#[derive(Subcommand)]
pub enum TextCommands {
    /// Convert to snake_case
    Snake { text: String },
    /// Convert to camelCase
    Camel { text: String },
    /// Convert to PascalCase
    Pascal { text: String },
    /// Convert to kebab-case
    Kebab { text: String },
    /// Count whitespace-separated words
    Words { text: String },
    /// Collapse runs of whitespace to single spaces
    Squash { text: String },
    /// Report whether text mixes upper and lower case
    Mixed { text: String },
    /// Truncate text to a maximum number of characters
    Truncate {
        text: String,
        /// Maximum length, suffix included
        #[arg(long, short)]
        max: usize,
        /// Appended when the text is shortened
        #[arg(long, default_value = "...")]
        suffix: String,
    },
}
