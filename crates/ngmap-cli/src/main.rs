use anyhow::Context;
use clap::Parser;
use ngmap_config::NgmapConfig;

mod cli;
mod commands;
mod output;
mod pipeline;
mod walk;

fn main() {
    if let Err(error) = run() {
        eprintln!("ngmap error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = NgmapConfig::load_from(flags.config.as_deref())
        .context("failed to load ngmap configuration")?;
    tracing::debug!(?config, "configuration loaded");

    commands::dispatch::dispatch(&cli.command, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("NGMAP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
