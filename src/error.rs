//! Error types for sshconf.
//!
//! Each layer of the pipeline has its own error: [`ParseError`] for the
//! tokenizer and block parser, [`DecodeError`] for the typed binder. Both
//! roll up into [`SshconfError`], which also covers file I/O and the `toml`
//! interchange used for cloning and merging properties.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while tokenizing or parsing the text format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A key token (`Host` or a property name) was empty or blank.
    #[error("Empty key token")]
    EmptyKeyToken,

    /// A value token (host alias or property value) was missing.
    #[error("Empty value token")]
    EmptyValueToken,

    /// A key was followed by something other than whitespace or `=`.
    #[error("Illegal delimiter {delimiter:?} after key '{after}'")]
    IllegalTokensDelimiter {
        /// The key right before the offending character.
        after: String,
        /// The offending character.
        delimiter: char,
    },

    /// A token arrived in a place the grammar doesn't allow it.
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    /// A `Host` line with a blank alias.
    #[error("No alias for host")]
    NoAliasForHost,

    /// A `Host` section without a single property.
    #[error("No properties for host")]
    NoPropertiesForHost,

    /// Parser invariant violation.
    #[error("Internal parser error: {0}")]
    Internal(String),
}

/// Errors raised while binding parsed blocks to typed [`Properties`](crate::Properties).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A raw value could not be converted to the field's type.
    #[error("Unable to decode '{value}' at '{path}' as {target}")]
    UnableToDecode {
        /// Slash-separated path of the value, e.g. `port` or `localforward/1`.
        path: String,
        /// The raw string that failed.
        value: String,
        /// Name of the target type.
        target: &'static str,
    },

    /// A value was requested for a key that has none.
    #[error("No value to decode{}", .key.as_ref().map(|k| format!(" for key '{}'", k)).unwrap_or_default())]
    NoValueToDecode {
        /// The key, when known.
        key: Option<String>,
    },

    /// Binder invariant violation (a bug, not bad input).
    #[error("Internal decoder error: {0}")]
    Internal(String),
}

/// All possible errors that can occur in sshconf.
#[derive(Error, Debug)]
pub enum SshconfError {
    /// The text could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ParseError),

    /// A parsed value could not be bound to its typed field.
    #[error("Failed to decode config: {0}")]
    Decode(#[from] DecodeError),

    /// Config file does not exist at the expected path.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Could not determine the user's home directory.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Failed to read a config file.
    #[error("Unable to load config from {path}: {source}")]
    Load {
        /// The file that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Failed to write a config file.
    #[error("Unable to dump config to {path}: {source}")]
    Dump {
        /// The file that was written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Conversion to or from the `toml` interchange format failed.
    #[error("Interchange error: {0}")]
    Interchange(String),
}

impl From<toml::ser::Error> for SshconfError {
    fn from(err: toml::ser::Error) -> Self {
        SshconfError::Interchange(err.to_string())
    }
}

impl From<toml::de::Error> for SshconfError {
    fn from(err: toml::de::Error) -> Self {
        SshconfError::Interchange(err.to_string())
    }
}

/// Convenient Result type alias for sshconf operations.
pub type Result<T> = std::result::Result<T, SshconfError>;
