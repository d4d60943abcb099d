//! Configuration types for sshconf.
//!
//! A [`Config`] is an ordered list of [`Host`] sections, exactly as they
//! appear in an `ssh_config` file:
//!
//! ```text
//! Host myserv
//!   HostName 10.0.0.5
//!   User admin
//!   Port 2021
//!
//! Host *
//!   User popa
//! ```
//!
//! Order matters: when several hosts match a hostname, the first one that
//! sets a property wins (see [`Config::resolve`]).

use crate::binder;
use crate::encoder;
use crate::error::{Result, SshconfError};
use crate::pattern::HostPattern;
use crate::properties::Properties;
use crate::resolver;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One `Host` section: an alias with its properties.
///
/// # Example
///
/// ```
/// use sshconf::{Host, Properties};
///
/// let mut properties = Properties::new();
/// properties.user = Some("alice".into());
///
/// let host = Host::new("*.example.com  gateway", properties);
/// assert!(host.matches("www.example.com"));
/// assert!(host.matches("gateway"));
/// assert!(!host.matches("example.org"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    /// One or more whitespace-separated wildcard patterns.
    pub alias: String,
    /// Properties set by this section.
    #[serde(default)]
    pub properties: Properties,
    /// Compiled on first match; `None` if the alias failed to compile.
    #[serde(skip)]
    pattern: OnceCell<Option<HostPattern>>,
}

impl Host {
    pub fn new(alias: impl Into<String>, properties: Properties) -> Self {
        Self {
            alias: alias.into(),
            properties,
            pattern: OnceCell::new(),
        }
    }

    /// Whether `hostname` matches any pattern of the alias.
    pub fn matches(&self, hostname: &str) -> bool {
        let pattern = self.pattern.get_or_init(|| match HostPattern::new(&self.alias) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                tracing::warn!(alias = %self.alias, error = %err, "Host alias is not a valid pattern");
                None
            }
        });
        pattern.as_ref().is_some_and(|p| p.matches(hostname))
    }

    /// The individual patterns of the alias.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.alias.split_whitespace()
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        self.patterns().eq(other.patterns()) && self.properties == other.properties
    }
}

/// A whole ssh client config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Host sections in file order.
    #[serde(default)]
    pub hosts: Vec<Host>,
}

impl Config {
    pub fn new(hosts: Vec<Host>) -> Self {
        Self { hosts }
    }

    /// Parse `ssh_config` text.
    ///
    /// # Errors
    ///
    /// Returns [`SshconfError::Parse`] for malformed text and
    /// [`SshconfError::Decode`] for values of the wrong shape.
    pub fn parse(content: &str) -> Result<Self> {
        binder::decode(content)
    }

    /// Effective properties for `hostname`, defaults included.
    ///
    /// # Errors
    ///
    /// Returns [`SshconfError::Interchange`] if merging fails.
    pub fn resolve(&self, hostname: &str) -> Result<Properties> {
        resolver::resolve(self, hostname)
    }

    /// Hosts whose alias matches `hostname`, in file order.
    pub fn matching_hosts<'a>(&'a self, hostname: &'a str) -> impl Iterator<Item = &'a Host> {
        self.hosts.iter().filter(move |host| host.matches(hostname))
    }

    /// Find a host section by its exact alias.
    pub fn host(&self, alias: &str) -> Option<&Host> {
        self.hosts.iter().find(|host| host.alias == alias)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Deserialize from TOML produced by [`Config::to_toml`].
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl FromStr for Config {
    type Err = SshconfError;

    fn from_str(s: &str) -> Result<Self> {
        Config::parse(s)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::encode(self))
    }
}
