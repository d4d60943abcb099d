//! Command-line interface for sshconf.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for sshconf.
///
/// # Examples
///
/// ```bash
/// # List the host sections of ~/.ssh/config
/// sshconf hosts
///
/// # Show the effective settings for a host
/// sshconf resolve myserver
///
/// # Re-render a config file in canonical form
/// sshconf -f ./ssh_config dump
/// ```
#[derive(Parser, Debug)]
#[command(name = "sshconf")]
#[command(version)]
#[command(about = "Parse, render and resolve OpenSSH client configuration files")]
#[command(long_about = "sshconf reads an ssh client config (~/.ssh/config by default),\n\
    validates every property against its type, and shows the effective\n\
    settings ssh would use for a given hostname.")]
pub struct Cli {
    /// Config file to read instead of the default location.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do with the loaded config.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List host aliases in file order.
    Hosts,

    /// Print the effective properties for a hostname.
    Resolve {
        /// The hostname to resolve.
        hostname: String,

        /// Print TOML instead of ssh_config syntax.
        #[arg(long)]
        toml: bool,
    },

    /// Print the config in canonical ssh_config syntax.
    Dump {
        /// Write to this file instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the config as TOML.
    Export,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_args() {
        let cli = Cli::parse_from(["sshconf", "-f", "/tmp/cfg", "resolve", "myserver", "--toml"]);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/cfg")));
        assert_eq!(
            cli.command,
            Command::Resolve {
                hostname: "myserver".into(),
                toml: true
            }
        );
    }

    #[test]
    fn test_global_file_after_subcommand() {
        let cli = Cli::parse_from(["sshconf", "hosts", "--file", "cfg"]);
        assert_eq!(cli.command, Command::Hosts);
        assert_eq!(cli.file, Some(PathBuf::from("cfg")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["sshconf"]).is_err());
    }
}
