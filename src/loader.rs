//! Config file discovery, loading and saving.
//!
//! The search order for the default config is:
//!
//! 1. `~/.ssh/config`
//! 2. `/etc/ssh/ssh_config`
//!
//! If neither exists, `~/.ssh/config` is returned as the location for a new
//! config.

use crate::config::Config;
use crate::encoder;
use crate::error::{Result, SshconfError};
use std::path::{Path, PathBuf};

/// System-wide client config.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/ssh/ssh_config";

/// Determine the config file path.
///
/// # Errors
///
/// Returns [`SshconfError::NoHomeDir`] if the home directory cannot be
/// determined.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(SshconfError::NoHomeDir)?;
    let user = home.join(".ssh").join("config");
    if user.exists() {
        return Ok(user);
    }

    let system = PathBuf::from(SYSTEM_CONFIG_PATH);
    if system.exists() {
        return Ok(system);
    }

    Ok(user)
}

/// Expand a leading `~` or `~/` to the home directory.
///
/// Paths without a leading tilde, and `~user` forms, are returned unchanged.
pub fn expand_tilde(path: &str) -> Result<PathBuf> {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => &rest[1..],
        _ => return Ok(PathBuf::from(path)),
    };
    let home = dirs::home_dir().ok_or(SshconfError::NoHomeDir)?;
    Ok(if rest.is_empty() { home } else { home.join(rest) })
}

fn expand_path(path: &Path) -> Result<PathBuf> {
    match path.to_str() {
        Some(raw) => expand_tilde(raw),
        None => Ok(path.to_path_buf()),
    }
}

/// Load and parse a config file from the given path. A leading `~` is
/// expanded to the home directory.
///
/// # Errors
///
/// - [`SshconfError::NoHomeDir`] if `~` can't be expanded
/// - [`SshconfError::ConfigNotFound`] if the file doesn't exist
/// - [`SshconfError::Load`] if reading fails
/// - [`SshconfError::Parse`] / [`SshconfError::Decode`] for invalid content
pub fn load_config(path: &Path) -> Result<Config> {
    let path = expand_path(path)?;
    let path = path.as_path();
    if !path.exists() {
        return Err(SshconfError::ConfigNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path).map_err(|source| SshconfError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Loading ssh config");
    Config::parse(&contents)
}

/// Load config from the default path.
///
/// Convenience wrapper that combines [`default_config_path`] and [`load_config`].
pub fn load_default_config() -> Result<Config> {
    let path = default_config_path()?;
    load_config(&path)
}

/// Render `config` as text and write it to `path`, creating parent
/// directories as needed. A leading `~` is expanded as in [`load_config`].
pub fn dump_config(config: &Config, path: &Path) -> Result<()> {
    let path = expand_path(path)?;
    let path = path.as_path();
    let dump_err = |source| SshconfError::Dump {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(dump_err)?;
    }

    let mut contents = encoder::encode(config);
    contents.push('\n');
    std::fs::write(path, contents).map_err(dump_err)?;
    tracing::debug!(path = %path.display(), hosts = config.hosts.len(), "Dumped ssh config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde("~").unwrap(), home);
        assert_eq!(expand_tilde("~/.ssh/id_rsa").unwrap(), home.join(".ssh/id_rsa"));
        assert_eq!(expand_tilde("/etc/ssh").unwrap(), PathBuf::from("/etc/ssh"));
        assert_eq!(expand_tilde("~other/x").unwrap(), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde("relative").unwrap(), PathBuf::from("relative"));
    }

    #[test]
    fn test_load_expands_tilde() {
        let home = dirs::home_dir().unwrap();
        let err = load_config(Path::new("~/.sshconf-missing/config")).unwrap_err();
        match err {
            SshconfError::ConfigNotFound(path) => {
                assert_eq!(path, home.join(".sshconf-missing/config"))
            }
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/sshconf/config")).unwrap_err();
        assert!(matches!(err, SshconfError::ConfigNotFound(_)));
    }
}
