use std::io::{self, BufReader};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use repro_cli::commands::{evaluate, schedule, session, util::parse_reference_date};
use repro_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays clean for panels and JSON
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    // The calendar day is resolved once, here at the boundary.
    let today = Local::now().date_naive();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Session { script }) => match script {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                session::run(BufReader::new(file), &mut stdout, &config, today)?;
            }
            None => session::run(io::stdin().lock(), &mut stdout, &config, today)?,
        },
        Some(Commands::Evaluate { events, date, json }) => {
            let date = parse_reference_date(date, today)?;
            evaluate::run(&mut stdout, events, date, &config, *json)?;
        }
        Some(Commands::Schedule { kind, date }) => {
            let date = parse_reference_date(date, today)?;
            schedule::run(&mut stdout, *kind, date, &config.rules)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
