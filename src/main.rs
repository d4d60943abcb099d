//! sshconf CLI entry point.
//!
//! This binary provides the `sshconf` command for inspecting ssh client
//! configuration files. Set `RUST_LOG=sshconf=debug` to trace parsing and
//! resolution on stderr.

use clap::Parser;
use sshconf::cli::{Cli, Command};
use sshconf::error::Result;
use sshconf::{Config, Host, loader};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

/// Main application logic.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.file {
        Some(path) => loader::load_config(path)?,
        None => loader::load_default_config()?,
    };

    match cli.command {
        Command::Hosts => print_hosts(&config),
        Command::Resolve { hostname, toml } => print_resolved(&config, &hostname, toml)?,
        Command::Dump { output: Some(path) } => loader::dump_config(&config, &path)?,
        Command::Dump { output: None } => println!("{}", config),
        Command::Export => print!("{}", config.to_toml()?),
    }
    Ok(())
}

/// Print every host alias, one per line.
fn print_hosts(config: &Config) {
    for host in &config.hosts {
        println!("{}", host.alias);
    }
}

/// Print the effective properties of `hostname`.
fn print_resolved(config: &Config, hostname: &str, as_toml: bool) -> Result<()> {
    let properties = config.resolve(hostname)?;
    if as_toml {
        print!("{}", toml::to_string(&properties)?);
    } else {
        let resolved = Config::new(vec![Host::new(hostname, properties)]);
        println!("{}", resolved);
    }
    Ok(())
}
