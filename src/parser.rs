//! Block parser: groups tokens into `Host` sections.
//!
//! The parser only knows about structure. Values stay raw strings, keyed by
//! the lowercased property name, with every occurrence kept in file order.
//! Turning them into typed values is the binder's job.
//!
//! ```
//! use sshconf::parser::parse;
//!
//! let blocks = parse("Host myserv\n  User alice\n  Port 2021\n").unwrap();
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].alias, "myserv");
//! assert_eq!(blocks[0].values("port"), Some(&["2021".to_string()][..]));
//! ```

use crate::error::ParseError;
use crate::tokenizer::{Token, Tokens};
use std::collections::BTreeMap;

/// The keyword that opens a host section.
pub const HOST_KEYWORD: &str = "Host";

/// All raw occurrences of one property inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProperty {
    /// The key as first written in the file.
    pub name: String,
    /// Every value, in file order.
    pub values: Vec<String>,
}

/// One `Host` section with its raw, untyped properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    /// The alias exactly as written (may hold several patterns).
    pub alias: String,
    /// Properties keyed by lowercased name.
    pub properties: BTreeMap<String, RawProperty>,
}

impl ParsedBlock {
    fn new(alias: String) -> Self {
        Self {
            alias,
            properties: BTreeMap::new(),
        }
    }

    /// All raw values for a property name (any case).
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.properties
            .get(&name.to_lowercase())
            .map(|p| p.values.as_slice())
    }

    fn push(&mut self, name: &str, value: String) {
        self.properties
            .entry(name.to_lowercase())
            .or_insert_with(|| RawProperty {
                name: name.to_string(),
                values: Vec::new(),
            })
            .values
            .push(value);
    }
}

/// A whole config file as an ordered list of blocks.
pub type ParsedConfig = Vec<ParsedBlock>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectingHost,
    ExpectingAlias,
    ExpectingPropertyName,
    ExpectingPropertyValue,
}

#[derive(Debug, Default)]
struct ParseContext {
    result: ParsedConfig,
    current: Option<ParsedBlock>,
    property_name: Option<String>,
}

impl ParseContext {
    fn handle_host(&mut self, token: Token) -> Result<(), ParseError> {
        if !is_host_keyword(&token) {
            return Err(unexpected(&token));
        }
        if let Some(block) = self.current.take() {
            if block.properties.is_empty() {
                return Err(ParseError::NoPropertiesForHost);
            }
            tracing::trace!(alias = %block.alias, properties = block.properties.len(), "Parsed host block");
            self.result.push(block);
        }
        self.property_name = None;
        Ok(())
    }

    fn handle_alias(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            Token::Value(alias) if alias.trim().is_empty() => Err(ParseError::NoAliasForHost),
            Token::Value(alias) => {
                self.current = Some(ParsedBlock::new(alias));
                Ok(())
            }
            other => Err(unexpected(&other)),
        }
    }

    fn handle_property_name(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            Token::Key(name) => {
                self.property_name = Some(name);
                Ok(())
            }
            other => Err(unexpected(&other)),
        }
    }

    fn handle_property_value(&mut self, token: Token) -> Result<(), ParseError> {
        let name = self.property_name.take().ok_or_else(|| {
            ParseError::Internal(format!("There is no property name for {:?}", token))
        })?;
        let block = self
            .current
            .as_mut()
            .ok_or_else(|| ParseError::Internal(format!("There is no host for property '{}'", name)))?;

        match token {
            Token::Value(value) => {
                block.push(&name, value);
                Ok(())
            }
            other => Err(unexpected(&other)),
        }
    }
}

fn is_host_keyword(token: &Token) -> bool {
    matches!(token, Token::Key(key) if key == HOST_KEYWORD)
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken(format!("{:?}", token))
}

/// Parse config text into its host blocks.
///
/// # Errors
///
/// Fails fast with the first [`ParseError`]; no partial result is returned.
pub fn parse(content: &str) -> Result<ParsedConfig, ParseError> {
    let mut state = State::ExpectingHost;
    let mut context = ParseContext::default();

    for token in Tokens::new(content) {
        if let Token::Invalid(error) = token {
            return Err(error);
        }

        if state == State::ExpectingPropertyName && is_host_keyword(&token) {
            state = State::ExpectingHost;
        }

        state = match state {
            State::ExpectingHost => {
                context.handle_host(token)?;
                State::ExpectingAlias
            }
            State::ExpectingAlias => {
                context.handle_alias(token)?;
                State::ExpectingPropertyName
            }
            State::ExpectingPropertyName => {
                context.handle_property_name(token)?;
                State::ExpectingPropertyValue
            }
            State::ExpectingPropertyValue => {
                context.handle_property_value(token)?;
                State::ExpectingPropertyName
            }
        };
    }

    // End of input closes the last open block the same way a new `Host` would.
    context.handle_host(Token::Key(HOST_KEYWORD.to_string()))?;

    tracing::debug!(blocks = context.result.len(), "Parsed ssh config");
    Ok(context.result)
}
