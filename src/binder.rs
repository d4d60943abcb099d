//! Typed binder: turns parsed blocks into [`Properties`].
//!
//! Decoding walks the field table in [`crate::schema`]. For every field the
//! [`DecodingContext`] looks up the raw occurrences in the block, pushes a
//! frame describing what is being decoded, converts the raw text, and pops the
//! frame again. The frame stack gives every error a path such as
//! `localforward/1` or `setenv/LANG`. Keys no field asks for end up in
//! [`Properties::unparsed`].

use crate::config::{Config, Host};
use crate::error::{self, DecodeError};
use crate::parser::{self, ParsedBlock};
use crate::properties::Properties;
use crate::schema::{FIELDS, Field};
use crate::value::{Scalar, Setting, tokens};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Scalar,
    List,
    ListElement,
    Map,
    MapEntry,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    name: String,
    value: Option<String>,
}

/// Decoding state for one block.
#[derive(Debug)]
pub(crate) struct DecodingContext<'a> {
    block: &'a ParsedBlock,
    stack: Vec<Frame>,
    consumed: HashSet<&'a str>,
}

impl<'a> DecodingContext<'a> {
    pub(crate) fn new(block: &'a ParsedBlock) -> Self {
        Self {
            block,
            stack: Vec::new(),
            consumed: HashSet::new(),
        }
    }

    /// Slash-joined names of every open frame.
    fn path(&self) -> String {
        self.stack
            .iter()
            .map(|frame| frame.name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn push(&mut self, kind: FrameKind, name: &str, value: Option<&str>) -> Result<(), DecodeError> {
        if kind == FrameKind::ListElement
            && self.stack.last().map(|frame| frame.kind) != Some(FrameKind::List)
        {
            return Err(DecodeError::Internal(format!(
                "list element '{}' pushed outside of a list",
                name
            )));
        }
        self.stack.push(Frame {
            kind,
            name: name.to_string(),
            value: value.map(str::to_string),
        });
        Ok(())
    }

    fn pop(&mut self) -> Result<Frame, DecodeError> {
        self.stack
            .pop()
            .ok_or_else(|| DecodeError::Internal("pop on an empty decoding stack".to_string()))
    }

    fn current_value(&self) -> Result<&str, DecodeError> {
        let frame = self
            .stack
            .last()
            .ok_or_else(|| DecodeError::Internal("no frame to decode from".to_string()))?;
        frame
            .value
            .as_deref()
            .ok_or_else(|| DecodeError::NoValueToDecode {
                key: Some(frame.name.clone()),
            })
    }

    /// Decode the value of the top frame.
    fn decode_current<T>(
        &self,
        target: &'static str,
        convert: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, DecodeError> {
        let raw = self.current_value()?;
        convert(raw).ok_or_else(|| DecodeError::UnableToDecode {
            path: self.path(),
            value: raw.to_string(),
            target,
        })
    }

    /// Raw occurrences of a field, marking the key as consumed.
    fn lookup(&mut self, field: &Field) -> Result<Option<&'a [String]>, DecodeError> {
        let key = field.name.to_ascii_lowercase();
        let Some((key, property)) = self.block.properties.get_key_value(&key) else {
            return Ok(None);
        };
        self.consumed.insert(key.as_str());
        if property.values.is_empty() {
            return Err(DecodeError::NoValueToDecode { key: Some(key.clone()) });
        }
        Ok(Some(&property.values))
    }

    fn last_occurrence(&mut self, field: &Field) -> Result<Option<&'a str>, DecodeError> {
        Ok(self
            .lookup(field)?
            .and_then(|values| values.last())
            .map(String::as_str))
    }

    pub(crate) fn scalar<T: Scalar>(&mut self, field: &Field) -> Result<Option<T>, DecodeError> {
        let Some(raw) = self.last_occurrence(field)? else {
            return Ok(None);
        };
        self.push(FrameKind::Scalar, &field.name.to_ascii_lowercase(), Some(raw))?;
        let value = self.decode_current(T::TYPE_NAME, |raw| T::from_raw(raw).ok())?;
        self.pop()?;
        Ok(Some(value))
    }

    pub(crate) fn setting<T: Scalar>(&mut self, field: &Field) -> Result<Setting<T>, DecodeError> {
        let Some(raw) = self.last_occurrence(field)? else {
            return Ok(Setting::NotSet);
        };
        self.push(FrameKind::Scalar, &field.name.to_ascii_lowercase(), Some(raw))?;
        let value = self.decode_current(T::TYPE_NAME, |raw| Setting::from_raw(raw).ok())?;
        self.pop()?;
        Ok(value)
    }

    pub(crate) fn list<T: Scalar>(&mut self, field: &Field) -> Result<Option<Vec<T>>, DecodeError> {
        let Some(values) = self.lookup(field)? else {
            return Ok(None);
        };
        let elements: Vec<&str> = match field.delimiter().and_then(|d| d.separator()) {
            Some(separator) => values
                .last()
                .map(|raw| tokens(raw, separator))
                .unwrap_or_default(),
            None => values.iter().map(String::as_str).collect(),
        };

        self.push(FrameKind::List, &field.name.to_ascii_lowercase(), None)?;
        let mut result = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            self.push(FrameKind::ListElement, &index.to_string(), Some(element))?;
            result.push(self.decode_current(T::TYPE_NAME, |raw| T::from_raw(raw).ok())?);
            self.pop()?;
        }
        self.pop()?;
        Ok(Some(result))
    }

    /// `SetEnv`-style pairs: each occurrence is `key=value` or `key value`.
    pub(crate) fn map(
        &mut self,
        field: &Field,
    ) -> Result<Option<BTreeMap<String, String>>, DecodeError> {
        let Some(values) = self.lookup(field)? else {
            return Ok(None);
        };

        self.push(FrameKind::Map, &field.name.to_ascii_lowercase(), None)?;
        let mut result = BTreeMap::new();
        for raw in values {
            let Some((key, value)) = split_pair(raw) else {
                tracing::trace!(field = field.name, raw = %raw, "Skipping incomplete pair");
                continue;
            };
            self.push(FrameKind::MapEntry, key, Some(value))?;
            let value = self.decode_current(String::TYPE_NAME, |raw| String::from_raw(raw).ok())?;
            self.pop()?;
            result.insert(key.to_string(), value);
        }
        self.pop()?;

        Ok(if result.is_empty() { None } else { Some(result) })
    }

    /// Everything no field consumed, keyed by the key's first spelling.
    fn unparsed(&self) -> Option<BTreeMap<String, Vec<String>>> {
        let unparsed: BTreeMap<String, Vec<String>> = self
            .block
            .properties
            .iter()
            .filter(|(key, _)| !self.consumed.contains(key.as_str()))
            .map(|(_, property)| (property.name.clone(), property.values.clone()))
            .collect();
        if unparsed.is_empty() {
            None
        } else {
            Some(unparsed)
        }
    }
}

/// Split `key=value` or `key value` at the first separator.
fn split_pair(raw: &str) -> Option<(&str, &str)> {
    let (key, rest) = raw.split_once(|c: char| c == '=' || c.is_whitespace())?;
    let key = key.trim();
    let value = rest.trim();
    if key.is_empty() || value.is_empty() {
        None
    } else {
        Some((key, value))
    }
}

/// Bind one parsed block to typed properties.
///
/// # Errors
///
/// The first field that fails to convert aborts the whole block.
pub fn decode_block(block: &ParsedBlock) -> Result<Properties, DecodeError> {
    let mut context = DecodingContext::new(block);
    let mut properties = Properties::default();

    for field in FIELDS {
        (field.bind)(field, &mut context, &mut properties)?;
    }
    if !context.stack.is_empty() {
        return Err(DecodeError::Internal(format!(
            "decoding stack not empty after block '{}': {}",
            block.alias,
            context.path()
        )));
    }

    properties.unparsed = context.unparsed();
    if let Some(unparsed) = &properties.unparsed {
        tracing::debug!(
            alias = %block.alias,
            keys = ?unparsed.keys().collect::<Vec<_>>(),
            "Unrecognized properties kept as unparsed"
        );
    }
    Ok(properties)
}

/// Parse and bind config text.
///
/// # Errors
///
/// Returns the first parse or decode error; nothing is returned on failure.
pub fn decode(content: &str) -> error::Result<Config> {
    let blocks = parser::parse(content)?;
    let hosts = blocks
        .iter()
        .map(|block| Ok(Host::new(block.alias.clone(), decode_block(block)?)))
        .collect::<error::Result<Vec<_>>>()?;
    tracing::debug!(hosts = hosts.len(), "Decoded ssh config");
    Ok(Config::new(hosts))
}
