//! Lexical tokenizer for the ssh config text format.
//!
//! The tokenizer is a plain [`Iterator`] that alternates between reading a key
//! and reading a value. Comments and blank lines are skipped before every key.
//! The first error becomes a single [`Token::Invalid`] and ends the stream.

use crate::error::ParseError;

/// One lexical unit of an ssh config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A key: `Host` or a property name, as written.
    Key(String),
    /// The value belonging to the preceding key.
    Value(String),
    /// Tokenization failed; nothing follows.
    Invalid(ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectingKey,
    ExpectingValue,
    End,
}

/// Lazy token stream over a config string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    remaining: &'a str,
    state: State,
}

impl<'a> Tokens<'a> {
    /// Create a token stream over `content`.
    pub fn new(content: &'a str) -> Self {
        Self {
            remaining: content,
            state: State::ExpectingKey,
        }
    }

    fn fail(&mut self, error: ParseError) -> Token {
        self.state = State::End;
        Token::Invalid(error)
    }

    /// Skip whitespace, line breaks, and `#` comments up to the next key.
    fn skip_to_key(&mut self) {
        loop {
            self.remaining = self.remaining.trim_start();
            match self.remaining.strip_prefix('#') {
                Some(comment) => {
                    self.remaining = comment.find('\n').map_or("", |i| &comment[i..]);
                }
                None => break,
            }
        }
    }

    fn next_key(&mut self) -> Option<Token> {
        self.skip_to_key();
        if self.remaining.is_empty() {
            self.state = State::End;
            return None;
        }

        let (raw, rest) = if let Some(quoted) = self.remaining.strip_prefix('"') {
            match quoted.find('"') {
                Some(end) => (&quoted[..end], &quoted[end + 1..]),
                None => return Some(self.fail(ParseError::EmptyKeyToken)),
            }
        } else {
            let end = self
                .remaining
                .find(|c: char| !c.is_alphanumeric())
                .unwrap_or(self.remaining.len());
            self.remaining.split_at(end)
        };

        let key = raw.trim();
        if key.is_empty() {
            return Some(self.fail(ParseError::EmptyKeyToken));
        }

        if let Some(delimiter) = rest.chars().next() {
            if !delimiter.is_whitespace() && delimiter != '=' {
                return Some(self.fail(ParseError::IllegalTokensDelimiter {
                    after: key.to_string(),
                    delimiter,
                }));
            }
        }

        self.remaining = rest;
        self.state = State::ExpectingValue;
        Some(Token::Key(key.to_string()))
    }

    fn next_value(&mut self) -> Token {
        let line_end = self.remaining.find('\n').unwrap_or(self.remaining.len());
        let (line, rest) = self.remaining.split_at(line_end);
        self.remaining = rest;

        let line = line.trim_start();
        let line = line.strip_prefix('=').unwrap_or(line).trim();
        if line.is_empty() {
            return self.fail(ParseError::EmptyValueToken);
        }

        self.state = State::ExpectingKey;
        Token::Value(unquoted(line).to_string())
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.state {
            State::ExpectingKey => self.next_key(),
            State::ExpectingValue => Some(self.next_value()),
            State::End => None,
        }
    }
}

/// Strip one surrounding pair of double quotes, if present.
pub(crate) fn unquoted(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
