//!
//! The style document: an ordered, line-faithful view of a parsed style file.
//!
//! A [`StyleDocument`] keeps blank lines, standalone comments and directives
//! in source order, so a file can be parsed, inspected and written back
//! without shuffling anything around. Writing goes through [`fmt::Display`]
//! and always produces the canonical form of each line.

use crate::directive::Directive;
use crate::parser::{self, ParseError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors from style file IO and conversion entry points. Pure parse errors
/// are [`ParseError`]; this type wraps them with the file they came from.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path}: {source}")]
    Parse { path: String, source: ParseError },
    #[error("File already exists at {path}")]
    FileExists { path: String },
    #[error("Unsupported config format for {path} (expected .json, .jsonc, .yaml, .yml or .toml)")]
    UnsupportedFormat { path: String },
    #[error("Failed to import {path}: {message}")]
    Import { path: String, message: String },
}

/// One line of a style file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Blank,
    Comment(String),
    Directive(Directive),
}

/// A line together with its 1-based position in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub item: Item,
}

/// An ordered style file. Construct one by parsing, or build one up with the
/// `push_*` methods (the importer does the latter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDocument {
    lines: Vec<SourceLine>,
}

impl StyleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict parse: the first syntax error aborts.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        parser::parse_document(content).map(|lines| Self { lines })
    }

    /// Lenient parse: unparseable lines are dropped and reported, everything
    /// else is kept. Used by `check`, which wants all errors at once.
    pub fn parse_lenient(content: &str) -> (Self, Vec<ParseError>) {
        let (lines, errors) = parser::parse_document_lenient(content);
        (Self { lines }, errors)
    }

    /// Read and strictly parse a style file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StyleError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|source| StyleError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the canonical serialization to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StyleError> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| StyleError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Directives in source order, without their line numbers.
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.lines.iter().filter_map(|line| match &line.item {
            Item::Directive(d) => Some(d),
            _ => None,
        })
    }

    /// Directives in source order, with the line each one came from.
    pub fn directive_lines(&self) -> impl Iterator<Item = (usize, &Directive)> {
        self.lines.iter().filter_map(|line| match &line.item {
            Item::Directive(d) => Some((line.number, d)),
            _ => None,
        })
    }

    pub fn directive_count(&self) -> usize {
        self.directives().count()
    }

    pub fn push_directive(&mut self, directive: Directive) {
        let number = self.next_number();
        self.lines.push(SourceLine {
            number,
            item: Item::Directive(directive),
        });
    }

    pub fn push_comment(&mut self, text: impl Into<String>) {
        let number = self.next_number();
        self.lines.push(SourceLine {
            number,
            item: Item::Comment(text.into()),
        });
    }

    pub fn push_blank(&mut self) {
        let number = self.next_number();
        self.lines.push(SourceLine {
            number,
            item: Item::Blank,
        });
    }

    fn next_number(&self) -> usize {
        self.lines.last().map_or(1, |line| line.number + 1)
    }
}

impl fmt::Display for StyleDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            match &line.item {
                Item::Blank => writeln!(f)?,
                Item::Comment(text) if text.is_empty() => writeln!(f, "#")?,
                Item::Comment(text) => writeln!(f, "# {text}")?,
                Item::Directive(d) => writeln!(f, "{d}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for StyleDocument {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
