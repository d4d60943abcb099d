//! Port forwarding and tunnel device values.

use super::{InvalidValue, parse_unsigned, tokens};
use std::fmt;
use std::str::FromStr;

/// `LocalForward` / `RemoteForward`: `bind [host]`.
///
/// The two halves are kept as written, e.g. `5901` and
/// `computer.myHost.edu:5901`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forwarding {
    pub bind: String,
    pub host: Option<String>,
}

impl Forwarding {
    pub fn new(bind: impl Into<String>, host: Option<&str>) -> Self {
        Self {
            bind: bind.into(),
            host: host.map(str::to_string),
        }
    }
}

impl fmt::Display for Forwarding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{} {}", self.bind, host),
            None => f.write_str(&self.bind),
        }
    }
}

impl FromStr for Forwarding {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match tokens(s, ' ').as_slice() {
            [bind] => Ok(Self::new(*bind, None)),
            [bind, host] => Ok(Self::new(*bind, Some(*host))),
            _ => Err(InvalidValue::new("Forwarding", s)),
        }
    }
}

/// One side of a `TunnelDevice`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Device {
    /// Let ssh pick the next available device.
    #[default]
    Any,
    Id(u32),
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Any => f.write_str("any"),
            Device::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for Device {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "any" {
            return Ok(Device::Any);
        }
        parse_unsigned(s)
            .and_then(|n| u32::try_from(n).ok())
            .map(Device::Id)
            .ok_or_else(|| InvalidValue::new("Device", s))
    }
}

/// `TunnelDevice local[:remote]`; a missing remote means `any`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TunnelDevice {
    pub local: Device,
    pub remote: Device,
}

impl fmt::Display for TunnelDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.local, self.remote)
    }
}

impl FromStr for TunnelDevice {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |_| InvalidValue::new("TunnelDevice", s);
        match tokens(s, ':').as_slice() {
            [local] => Ok(Self {
                local: local.parse().map_err(invalid)?,
                remote: Device::Any,
            }),
            [local, remote] => Ok(Self {
                local: local.parse().map_err(invalid)?,
                remote: remote.parse().map_err(invalid)?,
            }),
            _ => Err(InvalidValue::new("TunnelDevice", s)),
        }
    }
}

text_value!(Forwarding, Device, TunnelDevice);
