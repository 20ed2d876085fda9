//! CLI entry point and command handlers for mailform.

mod cli;
mod cmd;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mailform::config::{Config, OutputFormat};
use mailform::example::Greeter;

use cli::{Cli, Commands};
use cmd::ui::{Output, OutputMode};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    // Commands that must work even with a broken config
    match &cli.command {
        Commands::Version { verbose } => {
            let mode = OutputMode::resolve(cli.json, cli.quiet, OutputFormat::Human);
            return cmd::util::cmd_version(&Output::new(mode), *verbose);
        }
        Commands::Completion { shell } => return cmd::util::cmd_completion(*shell),
        _ => {}
    }

    let config = Config::load().context("Failed to load configuration")?;
    let out = Output::new(OutputMode::resolve(
        cli.json,
        cli.quiet,
        config.output.format,
    ));

    match cli.command {
        Commands::Check { email } => {
            if !cmd::check::cmd_check(&out, &email)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Batch {
            emails,
            file,
            workers,
        } => {
            let workers = workers.map(usize::from).unwrap_or(config.batch.workers);
            let summary = cmd::check::cmd_batch(&out, &emails, file.as_deref(), workers)?;
            if summary.invalid > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Greet { name, safe, web } => {
            let greeter = Greeter::from_config(&config.greeting);
            cmd::greet::cmd_greet(&out, &greeter, &name, safe, web)
        }
        Commands::Add { a, b, verbose } => cmd::greet::cmd_add(&out, a, b, verbose),
        Commands::Text { command } => cmd::text::cmd_text(&out, command),
        Commands::Config => cmd::config::cmd_config_show(&out, &config),
        Commands::Man { out_dir } => cmd::util::cmd_man(&out, out_dir.as_ref()),
        Commands::Version { .. } | Commands::Completion { .. } => Ok(()),
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects debug level for
/// this crate and everything else stays at warn.
fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("warn,mailform=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .try_init();
}
