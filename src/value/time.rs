//! The `TIME FORMATS` grammar from sshd_config(5).

use super::InvalidValue;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A time interval such as `90`, `10m` or `1w3d`.
///
/// A bare number means seconds. Otherwise the value is a sequence of
/// `<n><unit>` components with units `w`, `d`, `h`, `m`, `s` in that order,
/// each at most once. Components are kept separately so the value renders
/// back the way it was written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeFormat {
    pub weeks: Option<u64>,
    pub days: Option<u64>,
    pub hours: Option<u64>,
    pub minutes: Option<u64>,
    pub seconds: Option<u64>,
}

const UNITS: [char; 5] = ['w', 'd', 'h', 'm', 's'];

impl TimeFormat {
    /// An interval of `n` seconds.
    pub fn seconds(n: u64) -> Self {
        Self {
            seconds: Some(n),
            ..Self::default()
        }
    }

    /// An interval of `n` minutes.
    pub fn minutes(n: u64) -> Self {
        Self {
            minutes: Some(n),
            ..Self::default()
        }
    }

    /// Total length of the interval.
    pub fn as_duration(&self) -> Duration {
        let secs = [
            (self.weeks, 7 * 24 * 3600),
            (self.days, 24 * 3600),
            (self.hours, 3600),
            (self.minutes, 60),
            (self.seconds, 1),
        ]
        .iter()
        .filter_map(|(n, scale)| n.map(|n| n.saturating_mul(*scale)))
        .fold(0u64, u64::saturating_add);
        Duration::from_secs(secs)
    }

    fn slot(&mut self, unit: usize) -> &mut Option<u64> {
        match unit {
            0 => &mut self.weeks,
            1 => &mut self.days,
            2 => &mut self.hours,
            3 => &mut self.minutes,
            _ => &mut self.seconds,
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [self.weeks, self.days, self.hours, self.minutes, self.seconds];
        for (n, unit) in parts.iter().zip(UNITS) {
            if let Some(n) = n {
                write!(f, "{}{}", n, unit)?;
            }
        }
        Ok(())
    }
}

impl FromStr for TimeFormat {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidValue::new("TimeFormat", s);

        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse().map(Self::seconds).map_err(|_| invalid());
        }

        let mut result = Self::default();
        let mut next_unit = 0;
        let mut digits = String::new();
        for c in s.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            let unit = UNITS
                .iter()
                .position(|u| *u == c.to_ascii_lowercase())
                .ok_or_else(invalid)?;
            if unit < next_unit || digits.is_empty() {
                return Err(invalid());
            }
            let n = digits.parse().map_err(|_| invalid())?;
            *result.slot(unit) = Some(n);
            next_unit = unit + 1;
            digits.clear();
        }

        if !digits.is_empty() || next_unit == 0 {
            return Err(invalid());
        }
        Ok(result)
    }
}

text_value!(TimeFormat);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components() {
        let t: TimeFormat = "1w3d".parse().unwrap();
        assert_eq!(
            t,
            TimeFormat {
                weeks: Some(1),
                days: Some(3),
                ..Default::default()
            }
        );
        assert_eq!(t.to_string(), "1w3d");
        assert_eq!(t.as_duration(), Duration::from_secs(10 * 24 * 3600));

        let t: TimeFormat = "1h30M".parse().unwrap();
        assert_eq!(t.to_string(), "1h30m");
        assert_eq!(t.as_duration(), Duration::from_secs(5400));
    }

    #[test]
    fn test_bare_seconds() {
        let t: TimeFormat = "90".parse().unwrap();
        assert_eq!(t, TimeFormat::seconds(90));
        assert_eq!(t.to_string(), "90s");
        assert_eq!("90s".parse::<TimeFormat>().unwrap(), t);
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["", "m", "10x", "5m1h", "1m1m", "10m5", "-5", "1 m"] {
            assert!(raw.parse::<TimeFormat>().is_err(), "{raw}");
        }
    }
}
