//! Path strings
//!
//! [`format`] renders segments as `lines[0].sku`: plain property names are
//! dotted, indices are bracketed, and property names that would be ambiguous
//! in dotted form are bracketed as JSON strings (`meta["x.y"]`,
//! `codes["404"]`). [`parse`] reads the same syntax back, so the two are
//! inverses of each other.
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::segment::Segment;
use std::fmt::Write;

/// Render segments as a path string. Never fails.
pub fn format(segments: &[Segment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Index(n) => {
                let _ = write!(out, "[{n}]");
            }
            Segment::Key(key) if is_plain_key(key) => {
                if i > 0 {
                    out.push('.');
                }
                out.push_str(key);
            }
            Segment::Key(key) => {
                out.push('[');
                push_quoted(&mut out, key);
                out.push(']');
            }
        }
    }
    out
}

/// Parse a path string produced by [`format`]
pub fn parse(input: &str) -> Result<Vec<Segment>> {
    PathParser::new(input).parse()
}

/// Keys that render without brackets
fn is_plain_key(key: &str) -> bool {
    let mut bytes = key.bytes();
    match bytes.next() {
        Some(first) if is_key_start(first) => bytes.all(is_key_continue),
        _ => false,
    }
}

fn is_key_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_key_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'-'
}

fn push_quoted(out: &mut String, key: &str) {
    out.push('"');
    for c in key.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

struct PathParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PathParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(mut self) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();
        while let Some(b) = self.peek() {
            match b {
                b'[' => segments.push(self.bracket()?),
                b'.' if !segments.is_empty() => {
                    self.pos += 1;
                    segments.push(self.key()?);
                }
                _ if segments.is_empty() => segments.push(self.key()?),
                _ => return Err(self.error(format!("expected '.' or '[', found '{}'", b as char))),
            }
        }
        Ok(segments)
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn key(&mut self) -> Result<Segment> {
        let start = self.pos;
        match self.peek() {
            Some(b) if is_key_start(b) => self.pos += 1,
            Some(b) => return Err(self.error(format!("expected a property name, found '{}'", b as char))),
            None => return Err(self.error("expected a property name, found end of input")),
        }
        while self.peek().is_some_and(is_key_continue) {
            self.pos += 1;
        }
        Ok(Segment::Key(self.input[start..self.pos].to_string()))
    }

    fn bracket(&mut self) -> Result<Segment> {
        self.pos += 1;
        let segment = match self.peek() {
            Some(b'"') => self.quoted()?,
            Some(b) if b == b'-' || b.is_ascii_digit() => self.index()?,
            Some(b) => return Err(self.error(format!("expected an index or a quoted key, found '{}'", b as char))),
            None => return Err(self.error("unterminated '['")),
        };
        if self.peek() != Some(b']') {
            return Err(self.error("expected ']'"));
        }
        self.pos += 1;
        Ok(segment)
    }

    fn index(&mut self) -> Result<Segment> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.input[start..self.pos];
        digits
            .parse::<i64>()
            .map(Segment::Index)
            .map_err(|_| Error::syntax(format!("invalid index '{digits}'"), start, self.input))
    }

    fn quoted(&mut self) -> Result<Segment> {
        let start = self.pos;
        self.pos += 1;
        loop {
            match self.peek() {
                Some(b'"') => break,
                Some(b'\\') => self.pos += 2,
                Some(_) => self.pos += 1,
                None => return Err(Error::syntax("unterminated string", start, self.input)),
            }
        }
        self.pos += 1;
        let literal = &self.input[start..self.pos];
        serde_json::from_str::<String>(literal)
            .map(Segment::Key)
            .map_err(|e| Error::syntax(format!("invalid string {literal}: {e}"), start, self.input))
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::syntax(message, self.pos, self.input)
    }
}
