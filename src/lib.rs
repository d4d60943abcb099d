//! # sshconf
//!
//! Parse, render and resolve OpenSSH client configuration files.
//!
//! sshconf turns the free-form `~/.ssh/config` dialect into a typed model of
//! hosts and their properties, renders that model back to canonical text, and
//! answers the question ssh itself asks: which settings apply to this
//! hostname?
//!
//! ## Quick Example
//!
//! ```
//! use sshconf::Config;
//!
//! let config: Config = "
//! Host my*
//!   User admin
//!   Port 56
//!
//! Host *
//!   User popa
//!   Port 2020
//! ".parse().unwrap();
//!
//! let props = config.resolve("myserver").unwrap();
//! assert_eq!(props.user.as_deref(), Some("admin"));
//! assert_eq!(props.port, Some(56));
//! // Everything no host sets falls back to the OpenSSH defaults.
//! assert_eq!(props.connection_attempts, Some(1));
//!
//! assert_eq!(config.to_string(), "Host my*\n  Port 56\n  User admin\nHost *\n  Port 2020\n  User popa");
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`tokenizer`]: Raw text to key/value tokens
//! - [`parser`]: Tokens to `Host` blocks of raw values
//! - [`value`]: Typed value grammars (`TimeFormat`, `IpQos`, keyword enums, ...)
//! - [`schema`]: The keyword to field table
//! - [`binder`]: Raw blocks to typed [`Properties`]
//! - [`encoder`]: [`Config`] back to text
//! - [`pattern`]: Host alias wildcards
//! - [`resolver`]: First-match-wins resolution over the defaults
//! - [`config`]: The [`Config`] and [`Host`] model
//! - [`loader`]: Config file discovery, loading and saving
//! - [`cli`]: Command-line argument parsing with clap
//! - [`error`]: Error types

pub mod binder;
pub mod cli;
pub mod config;
pub mod encoder;
pub mod error;
pub mod loader;
pub mod parser;
pub mod pattern;
pub mod properties;
pub mod resolver;
pub mod schema;
pub mod tokenizer;
pub mod value;

pub use config::{Config, Host};
pub use error::{DecodeError, ParseError, Result, SshconfError};
pub use properties::Properties;
