//! Hostname resolution.
//!
//! Resolving a hostname collects the properties of every matching host,
//! then layers them over [`Properties::defaults`] so that the first match in
//! file order wins per field.
//!
//! # Example
//!
//! ```
//! use sshconf::Config;
//!
//! let config = Config::parse("Host my*\n  User admin\n  Port 56\n\nHost *\n  User popa\n  Port 2020\n").unwrap();
//!
//! let props = config.resolve("myserver").unwrap();
//! assert_eq!(props.user.as_deref(), Some("admin"));
//! assert_eq!(props.port, Some(56));
//!
//! let props = config.resolve("other").unwrap();
//! assert_eq!(props.user.as_deref(), Some("popa"));
//! ```
//!
//! Merging goes through the `toml` value model: both sides become tables and
//! every key present on the right replaces the one on the left. Unset fields
//! are never serialized, so they never override. Lists and maps are replaced
//! as a whole.

use crate::config::Config;
use crate::error::{Result, SshconfError};
use crate::properties::Properties;

fn to_table(properties: &Properties) -> Result<toml::Table> {
    match toml::Value::try_from(properties)? {
        toml::Value::Table(table) => Ok(table),
        other => Err(SshconfError::Interchange(format!(
            "properties serialized to a {} instead of a table",
            other.type_str()
        ))),
    }
}

/// Overlay every field `overlay` sets on top of `base`.
///
/// # Errors
///
/// Returns [`SshconfError::Interchange`] if either side can't round trip
/// through `toml`.
pub fn merge(base: &Properties, overlay: &Properties) -> Result<Properties> {
    let mut merged = to_table(base)?;
    merged.extend(to_table(overlay)?);
    Ok(toml::Value::Table(merged).try_into()?)
}

/// A deep copy that shares nothing with the source.
pub fn duplicate(properties: &Properties) -> Result<Properties> {
    Ok(toml::Value::Table(to_table(properties)?).try_into()?)
}

/// Resolve the effective properties for `hostname`.
///
/// # Errors
///
/// Returns [`SshconfError::Interchange`] if merging fails.
pub fn resolve(config: &Config, hostname: &str) -> Result<Properties> {
    let matched: Vec<_> = config.matching_hosts(hostname).collect();
    tracing::debug!(
        hostname,
        matched = ?matched.iter().map(|h| h.alias.as_str()).collect::<Vec<_>>(),
        "Resolving host"
    );

    if matched.is_empty() {
        return duplicate(Properties::defaults());
    }

    let mut result = duplicate(Properties::defaults())?;
    for host in matched.iter().rev() {
        result = merge(&result, &host.properties)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Host;
    use crate::value::{Setting, YesNo};
    use std::collections::BTreeMap;

    fn config(content: &str) -> Config {
        Config::parse(content).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let config = config(
            "Host my*\n  User admin\n  Port 56\n\nHost *\n  User popa\n  Port 2020\n  Compression yes\n",
        );

        let props = resolve(&config, "myserver").unwrap();
        assert_eq!(props.user.as_deref(), Some("admin"));
        assert_eq!(props.port, Some(56));
        assert_eq!(props.compression, Some(YesNo::Yes));
        assert_eq!(props.strict_host_key_checking, Properties::defaults().strict_host_key_checking);

        let props = resolve(&config, "other").unwrap();
        assert_eq!(props.user.as_deref(), Some("popa"));
        assert_eq!(props.port, Some(2020));
    }

    #[test]
    fn test_no_match_gives_defaults() {
        let config = config("Host myserv\n  Port 1\n");
        let props = resolve(&config, "elsewhere").unwrap();
        assert_eq!(&props, Properties::defaults());
    }

    #[test]
    fn test_explicit_none_overrides_later_value() {
        let config = config("Host a\n  ControlPath none\nHost *\n  ControlPath ~/.ssh/%r@%h\n");
        let props = resolve(&config, "a").unwrap();
        assert!(props.control_path.is_explicit_none());

        let props = resolve(&config, "b").unwrap();
        assert_eq!(props.control_path.value().map(String::as_str), Some("~/.ssh/%r@%h"));
    }

    #[test]
    fn test_lists_and_maps_replace_wholesale() {
        let config = config(
            "Host a\n  IdentityFile ~/.ssh/a\n  SetEnv A=1\nHost *\n  IdentityFile ~/.ssh/b\n  IdentityFile ~/.ssh/c\n  SetEnv B=2\n",
        );
        let props = resolve(&config, "a").unwrap();
        assert_eq!(props.identity_file, Some(vec!["~/.ssh/a".to_string()]));
        assert_eq!(
            props.set_env,
            Some(BTreeMap::from([("A".to_string(), "1".to_string())]))
        );
    }

    #[test]
    fn test_resolve_is_idempotent_and_independent() {
        let config = config("Host *\n  User popa\n");
        let mut first = resolve(&config, "x").unwrap();
        let second = resolve(&config, "x").unwrap();
        assert_eq!(first, second);

        first.user = Some("changed".into());
        first.port = Some(1);
        assert_eq!(resolve(&config, "x").unwrap(), second);
        assert_eq!(config.hosts[0].properties.user.as_deref(), Some("popa"));
        assert_eq!(Properties::defaults().port, Some(22));
    }

    #[test]
    fn test_merge() {
        let mut base = Properties::new();
        base.user = Some("base".into());
        base.port = Some(1);
        base.escape_char = Setting::Value("~".into());

        let mut overlay = Properties::new();
        overlay.port = Some(2);
        overlay.escape_char = Setting::None;

        let merged = merge(&base, &overlay).unwrap();
        assert_eq!(merged.user.as_deref(), Some("base"));
        assert_eq!(merged.port, Some(2));
        assert!(merged.escape_char.is_explicit_none());
    }

    #[test]
    fn test_duplicate() {
        let host = Host::new("*", Properties::defaults().clone());
        let copy = duplicate(&host.properties).unwrap();
        assert_eq!(copy, host.properties);
    }
}
