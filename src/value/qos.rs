//! `IPQoS`: the type of service for interactive and bulk sessions.

use super::{InvalidValue, IpQosClass, tokens};
use std::fmt;
use std::str::FromStr;

/// One ToS slot: a named class or a raw numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Class(IpQosClass),
    /// Raw value, written in decimal or `0x` hex.
    Numeric(u32),
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Class(class) => f.write_str(class.as_str()),
            Quality::Numeric(value) => write!(f, "{}", value),
        }
    }
}

impl FromStr for Quality {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numeric = match s.strip_prefix("0x") {
            Some(hex) if !hex.is_empty() => u32::from_str_radix(hex, 16).ok(),
            Some(_) => None,
            None if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s.parse().ok(),
            None => {
                return s
                    .parse()
                    .map(Quality::Class)
                    .map_err(|_| InvalidValue::new("Quality", s));
            }
        };
        numeric
            .map(Quality::Numeric)
            .ok_or_else(|| InvalidValue::new("Quality", s))
    }
}

/// `IPQoS interactive [non-interactive]`.
///
/// `None` in a slot is the `none` keyword. When only one class is given the
/// non-interactive slot keeps its `cs1` default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpQos {
    pub interactive: Option<Quality>,
    pub non_interactive: Option<Quality>,
}

impl Default for IpQos {
    fn default() -> Self {
        Self {
            interactive: Some(Quality::Class(IpQosClass::Af21)),
            non_interactive: Some(Quality::Class(IpQosClass::Cs1)),
        }
    }
}

fn slot(raw: &str) -> Result<Option<Quality>, InvalidValue> {
    if raw == "none" {
        Ok(None)
    } else {
        raw.parse().map(Some)
    }
}

fn write_slot(f: &mut fmt::Formatter<'_>, quality: &Option<Quality>) -> fmt::Result {
    match quality {
        Some(quality) => write!(f, "{}", quality),
        None => f.write_str("none"),
    }
}

impl fmt::Display for IpQos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_slot(f, &self.interactive)?;
        f.write_str(" ")?;
        write_slot(f, &self.non_interactive)
    }
}

impl FromStr for IpQos {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |_| InvalidValue::new("IpQos", s);
        match tokens(s, ' ').as_slice() {
            [interactive] => Ok(Self {
                interactive: slot(interactive).map_err(invalid)?,
                ..Self::default()
            }),
            [interactive, non_interactive] => Ok(Self {
                interactive: slot(interactive).map_err(invalid)?,
                non_interactive: slot(non_interactive).map_err(invalid)?,
            }),
            _ => Err(InvalidValue::new("IpQos", s)),
        }
    }
}

text_value!(Quality, IpQos);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality() {
        assert_eq!("ef".parse(), Ok(Quality::Class(IpQosClass::Ef)));
        assert_eq!("0x20".parse(), Ok(Quality::Numeric(32)));
        assert_eq!("184".parse(), Ok(Quality::Numeric(184)));
        assert!("0x".parse::<Quality>().is_err());
        assert!("af99".parse::<Quality>().is_err());
    }

    #[test]
    fn test_ipqos_two_slots() {
        let qos: IpQos = "lowdelay throughput".parse().unwrap();
        assert_eq!(qos.interactive, Some(Quality::Class(IpQosClass::LowDelay)));
        assert_eq!(qos.non_interactive, Some(Quality::Class(IpQosClass::Throughput)));
        assert_eq!(qos.to_string(), "lowdelay throughput");
    }

    #[test]
    fn test_ipqos_single_slot_keeps_default() {
        let qos: IpQos = "af11".parse().unwrap();
        assert_eq!(qos.interactive, Some(Quality::Class(IpQosClass::Af11)));
        assert_eq!(qos.non_interactive, Some(Quality::Class(IpQosClass::Cs1)));
    }

    #[test]
    fn test_ipqos_none() {
        let qos: IpQos = "none none".parse().unwrap();
        assert_eq!(qos.interactive, None);
        assert_eq!(qos.non_interactive, None);
        assert_eq!(qos.to_string(), "none none");
        assert_eq!(IpQos::default().to_string(), "af21 cs1");
    }

    #[test]
    fn test_ipqos_rejects() {
        for raw in ["", "af21 cs1 ef", "fast"] {
            assert!(raw.parse::<IpQos>().is_err(), "{raw}");
        }
    }
}
