//! Value grammars for composite ssh properties.
//!
//! Every property type here is a small bidirectional codec: [`FromStr`]
//! parses the raw config text and [`Display`] renders the canonical form. The
//! same string form is used when the value goes through `serde`, so the
//! interchange representation of a composite value is exactly what you would
//! write in a config file.
//!
//! [`FromStr`]: std::str::FromStr
//! [`Display`]: std::fmt::Display

use thiserror::Error;

/// A raw string that doesn't fit a value grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} value '{value}'")]
pub struct InvalidValue {
    /// The grammar that rejected the value.
    pub kind: &'static str,
    /// The rejected text.
    pub value: String,
}

impl InvalidValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// A single config value that converts to and from its raw text.
///
/// The binder uses this to decode scalar fields and list elements, and the
/// encoder uses it to render them back.
pub trait Scalar: Sized {
    /// Type name reported in decode errors.
    const TYPE_NAME: &'static str;

    /// Parse the raw text of one value.
    fn from_raw(raw: &str) -> Result<Self, InvalidValue>;

    /// Render the canonical raw text.
    fn to_raw(&self) -> String;
}

impl Scalar for String {
    const TYPE_NAME: &'static str = "String";

    fn from_raw(raw: &str) -> Result<Self, InvalidValue> {
        Ok(raw.to_string())
    }

    fn to_raw(&self) -> String {
        self.clone()
    }
}

macro_rules! unsigned_scalar {
    ($($ty:ty),+) => {
        $(
            impl Scalar for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_raw(raw: &str) -> Result<Self, InvalidValue> {
                    parse_unsigned(raw)
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| InvalidValue::new(stringify!($ty), raw))
                }

                fn to_raw(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

unsigned_scalar!(u8, u16, u32, u64);

/// Implements [`Scalar`] and string-based serde for a type with
/// `FromStr<Err = InvalidValue>` and `Display`.
macro_rules! text_value {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::value::Scalar for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_raw(raw: &str) -> Result<Self, $crate::value::InvalidValue> {
                    raw.parse()
                }

                fn to_raw(&self) -> String {
                    self.to_string()
                }
            }

            impl ::serde::Serialize for $ty {
                fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                    raw.parse().map_err(::serde::de::Error::custom)
                }
            }
        )+
    };
}

pub(crate) use text_value;

mod agent;
mod forward;
mod keyword;
mod qos;
mod rekey;
mod setting;
mod time;

pub use agent::{AddKeysToAgent, ControlPersist, ForwardAgent, IdentityAgent};
pub use forward::{Device, Forwarding, TunnelDevice};
pub use keyword::{
    AddressFamily, CanonicalizeHostname, ControlMaster, FingerprintHash, IpQosClass, LogLevel,
    PreferredAuthentication, RequestTty, StrictHostKeyChecking, SyslogFacility, Tunnel, YesAskNo,
    YesNo,
};
pub use qos::{IpQos, Quality};
pub use rekey::{RekeyLimit, Throughput};
pub use setting::Setting;
pub use time::TimeFormat;

/// Parse an unsigned integer, honoring `0x`, `0b`, `0o` and leading-`0` octal prefixes.
pub(crate) fn parse_unsigned(raw: &str) -> Option<u64> {
    let (digits, radix) = if let Some(hex) = raw.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(binary) = raw.strip_prefix("0b") {
        (binary, 2)
    } else if let Some(octal) = raw.strip_prefix("0o") {
        (octal, 8)
    } else if raw.len() > 1 && raw.starts_with('0') {
        (&raw[1..], 8)
    } else {
        (raw, 10)
    };

    // from_str_radix tolerates a leading '+', the config format doesn't.
    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// Split on a delimiter, trim every piece, and drop the empty ones.
pub(crate) fn tokens(raw: &str, delimiter: char) -> Vec<&str> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unsigned_radix() {
        assert_eq!(parse_unsigned("42"), Some(42));
        assert_eq!(parse_unsigned("0"), Some(0));
        assert_eq!(parse_unsigned("0177"), Some(0o177));
        assert_eq!(parse_unsigned("0o177"), Some(127));
        assert_eq!(parse_unsigned("0xff"), Some(255));
        assert_eq!(parse_unsigned("0b101"), Some(5));
        assert_eq!(parse_unsigned("0x"), None);
        assert_eq!(parse_unsigned("+5"), None);
        assert_eq!(parse_unsigned("09"), None);
        assert_eq!(parse_unsigned("abc"), None);
        assert_eq!(parse_unsigned("-1"), None);
    }

    #[test]
    fn test_unsigned_scalar_bounds() {
        assert_eq!(u16::from_raw("8080"), Ok(8080));
        assert_eq!(u8::from_raw("0x10"), Ok(16));
        assert_eq!(
            u8::from_raw("256"),
            Err(InvalidValue::new("u8", "256"))
        );
        assert_eq!(
            u16::from_raw("abc"),
            Err(InvalidValue::new("u16", "abc"))
        );
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("A,B,C , D , E,", ','), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(tokens("  3M   10m ", ' '), vec!["3M", "10m"]);
        assert!(tokens("", ' ').is_empty());
    }
}
