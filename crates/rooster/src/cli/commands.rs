use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use roosterapp::api::{ListQuery, RoosterApi};
use roosterapp::config::RoosterConfig;
use roosterapp::error::RoosterError;
use roosterapp::registry::Registry;
use roosterapp::seed::{self, SeedDocument};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use super::setup::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RoosterConfig::from_env().map_err(|e| anyhow!("invalid configuration: {e}"))?;
    tracing::debug!(?config, "configuration loaded");

    let api = RoosterApi::new(Registry::with_config(config));
    if let Some(path) = &cli.seed {
        let file = File::open(path)
            .with_context(|| format!("cannot open seed file {}", path.display()))?;
        let doc = SeedDocument::from_reader(BufReader::new(file)).map_err(RoosterError::from)?;
        let report = seed::load(api.registry(), doc);
        tracing::info!(
            loaded = report.total_loaded(),
            skipped = report.total_skipped(),
            path = %path.display(),
            "seeded"
        );
    }

    match cli.command {
        Commands::List {
            kind,
            offset,
            length,
        } => {
            let query = ListQuery::new(offset.as_deref(), length.as_deref());
            print_json(&api.read_all(kind, &query))
        }
        Commands::Get { kind, id } => print_json(&api.read_one(kind, &id)?),
        Commands::Create { kind, body } => {
            let body = if body == "-" {
                io::read_to_string(io::stdin()).context("cannot read body from stdin")?
            } else {
                body
            };
            print_json(&api.create(kind, &body)?)
        }
        Commands::Delete { kind, id } => {
            api.delete(kind, &id)?;
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
