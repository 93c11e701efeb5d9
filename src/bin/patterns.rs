use std::env;
use std::io::{self, Write};

use anyhow::Context;
use colored::Colorize;
use design_patterns::{logger, run_all, Pattern, PatternsConfig};

fn print_usage() {
    println!("Usage: patterns [-v|--verbose] [PATTERN...]");
    println!();
    println!("Patterns:");
    for pattern in Pattern::ALL {
        println!("  {:<18}{}", pattern.name(), pattern.title());
    }
    println!();
    println!("Without PATTERN arguments the list from $PATTERNS_CONFIG or ./patterns.toml is used.");
}

fn main() -> anyhow::Result<()> {
    let mut verbose = false;
    let mut selected = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            name => match name.parse::<Pattern>() {
                Ok(pattern) => selected.push(pattern),
                Err(err) => {
                    eprintln!("{} {}", "error:".red().bold(), err);
                    std::process::exit(2);
                }
            },
        }
    }

    let mut config = PatternsConfig::discover().context("failed to load configuration")?;
    config.verbose |= verbose;
    if !selected.is_empty() {
        config.patterns = selected;
    }
    logger::init(config.verbose);

    match &config.source {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file, using defaults"),
    }
    tracing::debug!(?config, "runner configured");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_all(&mut out, &config).context("demo run failed")?;
    out.flush()?;
    Ok(())
}
