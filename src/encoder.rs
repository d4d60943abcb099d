//! Renders a [`Config`] back to `ssh_config` text.
//!
//! Hosts come out in stored order. Inside a host, recognized properties are
//! sorted by lowercased keyword and unparsed keys follow in key order:
//!
//! ```text
//! Host myserv
//!   Port 2021
//!   User alice
//! ```
//!
//! Lines are joined with `\n` and there is no trailing newline.

use crate::config::{Config, Host};
use crate::schema::{FIELDS, Field};
use crate::value::{Scalar, Setting};
use std::collections::BTreeMap;

/// Rendered `Key value` lines of one host.
#[derive(Debug, Default)]
pub(crate) struct Lines {
    lines: Vec<String>,
}

impl Lines {
    fn push(&mut self, key: &str, value: &str) {
        self.lines.push(format!("  {} {}", quoted_key(key), quoted(value)));
    }

    pub(crate) fn scalar<T: Scalar>(&mut self, field: &Field, value: &Option<T>) {
        if let Some(value) = value {
            self.push(field.name, &value.to_raw());
        }
    }

    pub(crate) fn setting<T: Scalar>(&mut self, field: &Field, value: &Setting<T>) {
        if let Some(raw) = value.to_raw() {
            self.push(field.name, &raw);
        }
    }

    pub(crate) fn list<T: Scalar>(&mut self, field: &Field, value: &Option<Vec<T>>) {
        let Some(values) = value else {
            return;
        };
        match field.delimiter().and_then(|d| d.separator()) {
            Some(separator) => {
                let separator = separator.to_string();
                let joined = values
                    .iter()
                    .map(Scalar::to_raw)
                    .collect::<Vec<_>>()
                    .join(separator.as_str());
                self.push(field.name, &joined);
            }
            None => {
                for value in values {
                    self.push(field.name, &value.to_raw());
                }
            }
        }
    }

    pub(crate) fn map(&mut self, field: &Field, value: &Option<BTreeMap<String, String>>) {
        for (key, value) in value.iter().flatten() {
            self.push(field.name, &format!("{}={}", key, value));
        }
    }

    fn unparsed(&mut self, unparsed: &Option<BTreeMap<String, Vec<String>>>) {
        for (key, values) in unparsed.iter().flatten() {
            for value in values {
                self.push(key, value);
            }
        }
    }
}

/// Unquoted keys end at the first non-alphanumeric char, so anything else
/// must be quoted to read back as the same key.
fn quoted_key(key: &str) -> String {
    if !key.is_empty() && key.chars().all(char::is_alphanumeric) {
        key.to_string()
    } else {
        format!("\"{}\"", key)
    }
}

/// Wrap a value in double quotes when the tokenizer would otherwise lose
/// part of it.
fn quoted(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
        || value.starts_with('=')
        || (value.len() >= 2 && value.starts_with('"') && value.ends_with('"'));
    if needs_quotes {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

fn encode_host(host: &Host, out: &mut Vec<String>) {
    out.push(format!("Host {}", host.alias));

    let mut lines = Lines::default();
    for field in FIELDS {
        (field.render)(field, &host.properties, &mut lines);
    }
    lines.unparsed(&host.properties.unparsed);
    out.append(&mut lines.lines);
}

/// Render the whole config.
pub fn encode(config: &Config) -> String {
    let mut out = Vec::new();
    for host in &config.hosts {
        encode_host(host, &mut out);
    }
    out.join("\n")
}
