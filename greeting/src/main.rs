//! Print a greeting assembled from defaults, `greeting.toml` and flags.
//!
//! Options are applied in that order, so `--noun` overrides the config file
//! and a repeated `--noun` overrides the ones before it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use greeting::config::{DEFAULT_CONFIG_FILE, load_config};
use greeting::{exit_codes, new_greeting, with_noun};
use serde_json::json;
use tracing::debug;

#[derive(Parser)]
#[command(name = "greeting", version, about = "Print a configurable greeting")]
struct Cli {
    /// Config file to read; a missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Noun to greet. May be repeated; the last one wins.
    #[arg(short, long)]
    noun: Vec<String>,
    /// Print `{"greeting": "..."}` instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() {
    greeting::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut options = load_config(&cli.config)?.options();
    options.extend(cli.noun.into_iter().map(with_noun));
    debug!(options = options.len(), "building greeting");

    let greeting = new_greeting(options).context("build greeting")?;
    if cli.json {
        let payload = serde_json::to_string(&json!({ "greeting": greeting }))
            .context("serialize json")?;
        println!("{}", payload);
    } else {
        println!("{}", greeting);
    }
    Ok(())
}
