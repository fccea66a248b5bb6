mod cli;
mod config;
mod error_handling;
mod grammar;
mod parser;
mod generator;

use std::process;

use clap::Parser;
use log::{error, info};

use cli::Cli;
use config::Config;
use error_handling::*;

fn run(config: &Config) -> GenResult<()> {
    let entries = parser::scan_file(&config.grammar)?;
    let tokens = entries.iter().filter(|e| e.is_token()).count();
    info!(
        "scanned {} definitions from {} ({} rules, {} tokens)",
        entries.len(),
        config.grammar.display(),
        entries.len() - tokens,
        tokens
    );

    let generated = generator::generate(&entries, config);
    std::fs::write(&config.output, generated).map_err(|e| output_error(e, &config.output))?;
    info!("wrote {}", config.output.display());

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from(Cli::parse());
    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(e.error.exit_code());
    }
}
