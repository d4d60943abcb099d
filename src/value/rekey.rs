//! `RekeyLimit`: renegotiate the session key after a data volume or time.

use super::{InvalidValue, TimeFormat, tokens};
use std::fmt;
use std::str::FromStr;

/// Amount of data after which the session key is renegotiated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Throughput {
    /// The cipher's own default.
    #[default]
    Default,
    Bytes(u64),
    Kilobytes(u64),
    Megabytes(u64),
    Gigabytes(u64),
}

impl Throughput {
    /// The limit in bytes, `None` for the cipher default.
    pub fn bytes(&self) -> Option<u64> {
        match *self {
            Throughput::Default => None,
            Throughput::Bytes(n) => Some(n),
            Throughput::Kilobytes(n) => Some(n.saturating_mul(1 << 10)),
            Throughput::Megabytes(n) => Some(n.saturating_mul(1 << 20)),
            Throughput::Gigabytes(n) => Some(n.saturating_mul(1 << 30)),
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Throughput::Default => f.write_str("default"),
            Throughput::Bytes(n) => write!(f, "{}", n),
            Throughput::Kilobytes(n) => write!(f, "{}K", n),
            Throughput::Megabytes(n) => write!(f, "{}M", n),
            Throughput::Gigabytes(n) => write!(f, "{}G", n),
        }
    }
}

impl FromStr for Throughput {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            return Ok(Throughput::Default);
        }
        let invalid = || InvalidValue::new("Throughput", s);

        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, suffix) = s.split_at(split);
        if digits.is_empty() {
            return Err(invalid());
        }
        let n: u64 = digits.parse().map_err(|_| invalid())?;
        match suffix {
            "" => Ok(Throughput::Bytes(n)),
            "K" | "k" => Ok(Throughput::Kilobytes(n)),
            "M" | "m" => Ok(Throughput::Megabytes(n)),
            "G" | "g" => Ok(Throughput::Gigabytes(n)),
            _ => Err(invalid()),
        }
    }
}

/// `RekeyLimit throughput [timeout]`. A `none` timeout is stored as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RekeyLimit {
    pub throughput: Throughput,
    pub timeout: Option<TimeFormat>,
}

impl fmt::Display for RekeyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.timeout {
            Some(timeout) => write!(f, "{} {}", self.throughput, timeout),
            None => write!(f, "{} none", self.throughput),
        }
    }
}

impl FromStr for RekeyLimit {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |_| InvalidValue::new("RekeyLimit", s);
        let (throughput, timeout) = match tokens(s, ' ').as_slice() {
            [throughput] => (throughput.parse::<Throughput>().map_err(invalid)?, None),
            [throughput, "none"] => (throughput.parse::<Throughput>().map_err(invalid)?, None),
            [throughput, timeout] => (
                throughput.parse::<Throughput>().map_err(invalid)?,
                Some(timeout.parse::<TimeFormat>().map_err(invalid)?),
            ),
            _ => return Err(InvalidValue::new("RekeyLimit", s)),
        };
        Ok(Self {
            throughput,
            timeout,
        })
    }
}

text_value!(Throughput, RekeyLimit);
