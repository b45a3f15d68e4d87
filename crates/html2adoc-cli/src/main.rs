//! html2adoc - Convert HTML documentation fragments to AsciiDoc
//!
//! This is the main entry point for the CLI application.

mod cli;

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use anyhow::Context;
use cli::{BehaviorOptions, Cli};
use html2adoc::{AdocFormatter, FormatOptions};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse_args();

    init_tracing(&cli.behavior);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let formatter =
        AdocFormatter::with_options(FormatOptions::from(&cli.format)).context("Invalid formatting options")?;

    let html = read_input(cli)?;
    let adoc = formatter.format(&html);
    debug!(input_len = html.len(), output_len = adoc.len(), "conversion finished");

    match &cli.output {
        Some(path) => {
            fs::write(path, adoc).with_context(|| format!("Failed to write AsciiDoc to {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(adoc.as_bytes()).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    match cli.input_path() {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read HTML from {}", path.display()))
        }
        None => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read HTML from stdin")?;
            Ok(html)
        }
    }
}

fn init_tracing(behavior: &BehaviorOptions) {
    let level = if behavior.quiet {
        LevelFilter::ERROR
    } else {
        match behavior.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
