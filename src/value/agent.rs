//! Agent and connection sharing values that mix keywords with free text.

use super::{InvalidValue, TimeFormat};
use std::fmt;
use std::str::FromStr;

/// `AddKeysToAgent`: `yes`, `no`, `confirm`, `ask` or a key lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddKeysToAgent {
    Yes,
    No,
    Confirm,
    Ask,
    /// Keep keys in the agent for this long.
    Interval(TimeFormat),
}

impl fmt::Display for AddKeysToAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddKeysToAgent::Yes => f.write_str("yes"),
            AddKeysToAgent::No => f.write_str("no"),
            AddKeysToAgent::Confirm => f.write_str("confirm"),
            AddKeysToAgent::Ask => f.write_str("ask"),
            AddKeysToAgent::Interval(time) => write!(f, "{}", time),
        }
    }
}

impl FromStr for AddKeysToAgent {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(AddKeysToAgent::Yes),
            "no" => Ok(AddKeysToAgent::No),
            "confirm" => Ok(AddKeysToAgent::Confirm),
            "ask" => Ok(AddKeysToAgent::Ask),
            _ => s
                .parse()
                .map(AddKeysToAgent::Interval)
                .map_err(|_| InvalidValue::new("AddKeysToAgent", s)),
        }
    }
}

/// `ControlPersist`: `yes`, `no` or an idle timeout for the master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPersist {
    Yes,
    No,
    Interval(TimeFormat),
}

impl fmt::Display for ControlPersist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlPersist::Yes => f.write_str("yes"),
            ControlPersist::No => f.write_str("no"),
            ControlPersist::Interval(time) => write!(f, "{}", time),
        }
    }
}

impl FromStr for ControlPersist {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(ControlPersist::Yes),
            "no" => Ok(ControlPersist::No),
            _ => s
                .parse()
                .map(ControlPersist::Interval)
                .map_err(|_| InvalidValue::new("ControlPersist", s)),
        }
    }
}

/// `ForwardAgent`: a switch, an agent socket path, or `$VAR` naming the
/// environment variable that holds the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardAgent {
    Yes,
    No,
    Socket(String),
    /// Variable name, stored without the leading `$`.
    EnvironmentVariable(String),
}

impl fmt::Display for ForwardAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardAgent::Yes => f.write_str("yes"),
            ForwardAgent::No => f.write_str("no"),
            ForwardAgent::Socket(path) => f.write_str(path),
            ForwardAgent::EnvironmentVariable(name) => write!(f, "${}", name),
        }
    }
}

impl FromStr for ForwardAgent {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(ForwardAgent::Yes),
            "no" => Ok(ForwardAgent::No),
            _ => match agent_location(s) {
                Some(AgentLocation::Socket(path)) => Ok(ForwardAgent::Socket(path)),
                Some(AgentLocation::Variable(name)) => Ok(ForwardAgent::EnvironmentVariable(name)),
                None => Err(InvalidValue::new("ForwardAgent", s)),
            },
        }
    }
}

/// `IdentityAgent`: an agent socket path or `$VAR`.
///
/// The `none` keyword is handled by [`Setting`](super::Setting), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityAgent {
    Socket(String),
    EnvironmentVariable(String),
}

impl fmt::Display for IdentityAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityAgent::Socket(path) => f.write_str(path),
            IdentityAgent::EnvironmentVariable(name) => write!(f, "${}", name),
        }
    }
}

impl FromStr for IdentityAgent {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match agent_location(s) {
            Some(AgentLocation::Socket(path)) => Ok(IdentityAgent::Socket(path)),
            Some(AgentLocation::Variable(name)) => Ok(IdentityAgent::EnvironmentVariable(name)),
            None => Err(InvalidValue::new("IdentityAgent", s)),
        }
    }
}

enum AgentLocation {
    Socket(String),
    Variable(String),
}

fn agent_location(raw: &str) -> Option<AgentLocation> {
    match raw.strip_prefix('$') {
        Some("") => None,
        Some(name) => Some(AgentLocation::Variable(name.to_string())),
        None if raw.is_empty() => None,
        None => Some(AgentLocation::Socket(raw.to_string())),
    }
}

text_value!(AddKeysToAgent, ControlPersist, ForwardAgent, IdentityAgent);
