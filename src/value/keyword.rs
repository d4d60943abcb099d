//! Properties whose value is one keyword out of a fixed set.

use super::InvalidValue;
use std::fmt;
use std::str::FromStr;

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )+
        }

        impl $name {
            /// The keyword as written in a config file.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(InvalidValue::new(stringify!($name), s)),
                }
            }
        }

        text_value!($name);
    };
}

/// A plain boolean switch.
///
/// Besides `yes` and `no` this accepts `true` and `false`. Case matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    /// `yes`
    Yes,
    /// `no`
    No,
}

impl YesNo {
    pub fn as_bool(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        })
    }
}

impl FromStr for YesNo {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" | "true" => Ok(YesNo::Yes),
            "no" | "false" => Ok(YesNo::No),
            _ => Err(InvalidValue::new("YesNo", s)),
        }
    }
}

text_value!(YesNo);

keyword_enum! {
    /// `yes`, `ask` or `no` (`UpdateHostKeys`, `VerifyHostKeyDNS`).
    YesAskNo {
        Yes => "yes",
        Ask => "ask",
        No => "no",
    }
}

keyword_enum! {
    /// Address family used when connecting.
    AddressFamily {
        Any => "any",
        Inet => "inet",
        Inet6 => "inet6",
    }
}

keyword_enum! {
    CanonicalizeHostname {
        Yes => "yes",
        No => "no",
        Always => "always",
    }
}

keyword_enum! {
    /// Connection sharing mode.
    ControlMaster {
        Yes => "yes",
        No => "no",
        Ask => "ask",
        Auto => "auto",
        AutoAsk => "autoask",
    }
}

keyword_enum! {
    FingerprintHash {
        Md5 => "md5",
        Sha256 => "sha256",
    }
}

keyword_enum! {
    /// Verbosity of the ssh client log.
    LogLevel {
        Quiet => "QUIET",
        Fatal => "FATAL",
        Error => "ERROR",
        Info => "INFO",
        Verbose => "VERBOSE",
        Debug => "DEBUG",
        Debug1 => "DEBUG1",
        Debug2 => "DEBUG2",
        Debug3 => "DEBUG3",
    }
}

keyword_enum! {
    /// One entry of `PreferredAuthentications`.
    PreferredAuthentication {
        GssapiWithMic => "gssapi-with-mic",
        Hostbased => "hostbased",
        Publickey => "publickey",
        KeyboardInteractive => "keyboard-interactive",
        Password => "password",
    }
}

keyword_enum! {
    RequestTty {
        No => "no",
        Yes => "yes",
        Force => "force",
        Auto => "auto",
    }
}

keyword_enum! {
    /// Host key verification policy.
    StrictHostKeyChecking {
        Yes => "yes",
        AcceptNew => "accept-new",
        Off => "off",
        No => "no",
        Ask => "ask",
    }
}

keyword_enum! {
    SyslogFacility {
        Daemon => "DAEMON",
        User => "USER",
        Auth => "AUTH",
        Local0 => "LOCAL0",
        Local1 => "LOCAL1",
        Local2 => "LOCAL2",
        Local3 => "LOCAL3",
        Local4 => "LOCAL4",
        Local5 => "LOCAL5",
        Local6 => "LOCAL6",
        Local7 => "LOCAL7",
    }
}

keyword_enum! {
    /// Tunnel device forwarding mode.
    Tunnel {
        Yes => "yes",
        PointToPoint => "point-to-point",
        Ethernet => "ethernet",
        No => "no",
    }
}

keyword_enum! {
    /// A DSCP / ToS class name used by `IPQoS`.
    IpQosClass {
        Af11 => "af11",
        Af12 => "af12",
        Af13 => "af13",
        Af21 => "af21",
        Af22 => "af22",
        Af23 => "af23",
        Af31 => "af31",
        Af32 => "af32",
        Af33 => "af33",
        Af41 => "af41",
        Af42 => "af42",
        Af43 => "af43",
        Cs0 => "cs0",
        Cs1 => "cs1",
        Cs2 => "cs2",
        Cs3 => "cs3",
        Cs4 => "cs4",
        Cs5 => "cs5",
        Cs6 => "cs6",
        Cs7 => "cs7",
        Ef => "ef",
        Le => "le",
        LowDelay => "lowdelay",
        Throughput => "throughput",
        Reliability => "reliability",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_accepts_booleans_case_sensitively() {
        assert_eq!("yes".parse(), Ok(YesNo::Yes));
        assert_eq!("no".parse(), Ok(YesNo::No));
        assert_eq!("true".parse(), Ok(YesNo::Yes));
        assert_eq!("false".parse(), Ok(YesNo::No));
        assert!("No".parse::<YesNo>().is_err());
        assert!("TRUE".parse::<YesNo>().is_err());
        assert!("maybe".parse::<YesNo>().is_err());
        assert_eq!(YesNo::from(true).to_string(), "yes");
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!("accept-new".parse(), Ok(StrictHostKeyChecking::AcceptNew));
        assert!("Accept-New".parse::<StrictHostKeyChecking>().is_err());
        assert_eq!("LOCAL7".parse(), Ok(SyslogFacility::Local7));
        assert!("local7".parse::<SyslogFacility>().is_err());
    }

    #[test]
    fn test_keyword_display() {
        assert_eq!(Tunnel::PointToPoint.to_string(), "point-to-point");
        assert_eq!(PreferredAuthentication::GssapiWithMic.as_str(), "gssapi-with-mic");
        assert_eq!(LogLevel::Debug3.to_string(), "DEBUG3");
    }

    #[test]
    fn test_unknown_keyword_error() {
        assert_eq!(
            "sometimes".parse::<ControlMaster>(),
            Err(InvalidValue::new("ControlMaster", "sometimes"))
        );
    }
}
