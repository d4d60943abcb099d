//! Host alias wildcard patterns.
//!
//! A `Host` alias is a whitespace-separated list of patterns. `*` matches any
//! run of characters (including none), `?` matches exactly one, and everything
//! else is literal. A hostname matches the alias when it matches at least one
//! pattern in full. Matching is case-sensitive.

use regex::Regex;

/// The compiled form of a host alias.
#[derive(Debug, Clone)]
pub struct HostPattern {
    regex: Regex,
}

impl HostPattern {
    /// Compile every pattern of an alias into one anchored regex.
    pub fn new(alias: &str) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = alias.split_whitespace().map(translate).collect();
        let regex = Regex::new(&format!("^(?:{})$", alternatives.join("|")))?;
        Ok(Self { regex })
    }

    pub fn matches(&self, hostname: &str) -> bool {
        self.regex.is_match(hostname)
    }
}

/// Translate one wildcard pattern to regex syntax.
fn translate(pattern: &str) -> String {
    regex::escape(pattern).replace(r"\*", ".*").replace(r"\?", ".")
}
