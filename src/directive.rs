//!
//! This module defines the rule directive model: the parsed form of one style-file
//! line, plus the option value types directives can carry.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Ordered option map attached to a `rule` directive.
pub type ParamMap = IndexMap<String, ParamValue>;

/// A single option value in a `rule` directive.
///
/// The grammar admits integers, booleans, single- or double-quoted strings,
/// Ruby symbols (`:dash`) and flat arrays of those. Symbols and strings are
/// interchangeable for the consuming linter, but the distinction is kept so
/// serialization reproduces what was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Bool(bool),
    Str(String),
    Symbol(String),
    Array(Vec<ParamValue>),
}

/// Coarse value families used when checking option values against a rule's
/// parameter specs. Strings and symbols collapse into `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    Bool,
    Text,
    Array,
}

impl ParamKind {
    /// Bare kind name, for listings.
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::Int => "integer",
            ParamKind::Bool => "boolean",
            ParamKind::Text => "string",
            ParamKind::Array => "array",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKind::Int => "an integer",
            ParamKind::Bool => "a boolean",
            ParamKind::Text => "a string or symbol",
            ParamKind::Array => "an array",
        };
        write!(f, "{name}")
    }
}

impl ParamValue {
    /// The value family this value belongs to.
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::Bool(_) => ParamKind::Bool,
            ParamValue::Str(_) | ParamValue::Symbol(_) => ParamKind::Text,
            ParamValue::Array(_) => ParamKind::Array,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Textual content for both strings and symbols.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) | ParamValue::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a JSON value for export. Symbols become plain strings,
    /// which is how the neighbouring linters spell the same options.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ParamValue::Int(n) => serde_json::Value::from(*n),
            ParamValue::Bool(b) => serde_json::Value::from(*b),
            ParamValue::Str(s) | ParamValue::Symbol(s) => serde_json::Value::from(s.as_str()),
            ParamValue::Array(items) => serde_json::Value::Array(items.iter().map(ParamValue::to_json).collect()),
        }
    }

    /// Convert to a TOML value for export, with the same symbol flattening
    /// as [`ParamValue::to_json`].
    pub fn to_toml(&self) -> toml::Value {
        match self {
            ParamValue::Int(n) => toml::Value::Integer(*n),
            ParamValue::Bool(b) => toml::Value::Boolean(*b),
            ParamValue::Str(s) | ParamValue::Symbol(s) => toml::Value::String(s.clone()),
            ParamValue::Array(items) => toml::Value::Array(items.iter().map(ParamValue::to_toml).collect()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            // The grammar has no escape syntax, so pick whichever quote the
            // string does not contain. A string holding both kinds has no
            // writable form; the parser never produces one and the importers
            // drop such values.
            ParamValue::Str(s) => {
                if s.contains('\'') && !s.contains('"') {
                    write!(f, "\"{s}\"")
                } else {
                    write!(f, "'{s}'")
                }
            }
            ParamValue::Symbol(s) => write!(f, ":{s}"),
            ParamValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Int(n) => serializer.serialize_i64(*n),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Str(s) | ParamValue::Symbol(s) => serializer.serialize_str(s),
            ParamValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// What a directive does, per the style-file grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `all` — enable the complete default rule set.
    All,
    /// `rule 'MDxxx', :key => value, …` — enable one rule, optionally
    /// overriding its parameters.
    Rule { id: String, params: ParamMap },
    /// `exclude_rule 'MDxxx'` — disable one rule.
    ExcludeRule { id: String },
    /// `tag :name` — enable every rule carrying the tag.
    Tag { name: String },
    /// `exclude_tag :name` — disable every rule carrying the tag.
    ExcludeTag { name: String },
}

/// One parsed directive line: what it does plus the end-of-line rationale,
/// if any. The comment is free text for humans and is preserved verbatim
/// through serialization; it never influences evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub comment: Option<String>,
}

impl Directive {
    pub fn new(kind: DirectiveKind) -> Self {
        Self { kind, comment: None }
    }

    pub fn with_comment(kind: DirectiveKind, comment: impl Into<String>) -> Self {
        Self {
            kind,
            comment: Some(comment.into()),
        }
    }

    /// The rule identifier this directive names, if it names one.
    pub fn rule_id(&self) -> Option<&str> {
        match &self.kind {
            DirectiveKind::Rule { id, .. } | DirectiveKind::ExcludeRule { id } => Some(id),
            _ => None,
        }
    }

    /// The directive keyword as written in a style file.
    pub fn keyword(&self) -> &'static str {
        match &self.kind {
            DirectiveKind::All => "all",
            DirectiveKind::Rule { .. } => "rule",
            DirectiveKind::ExcludeRule { .. } => "exclude_rule",
            DirectiveKind::Tag { .. } => "tag",
            DirectiveKind::ExcludeTag { .. } => "exclude_tag",
        }
    }

    /// Whether evaluating this directive can add rules to the enabled set.
    pub fn is_enabling(&self) -> bool {
        matches!(
            self.kind,
            DirectiveKind::All | DirectiveKind::Rule { .. } | DirectiveKind::Tag { .. }
        )
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DirectiveKind::All => write!(f, "all")?,
            DirectiveKind::Rule { id, params } => {
                write!(f, "rule '{id}'")?;
                for (key, value) in params {
                    write!(f, ", :{key} => {value}")?;
                }
            }
            DirectiveKind::ExcludeRule { id } => write!(f, "exclude_rule '{id}'")?,
            DirectiveKind::Tag { name } => write!(f, "tag :{name}")?,
            DirectiveKind::ExcludeTag { name } => write!(f, "exclude_tag :{name}")?,
        }
        match &self.comment {
            Some(comment) if comment.is_empty() => write!(f, " #")?,
            Some(comment) => write!(f, " # {comment}")?,
            None => {}
        }
        Ok(())
    }
}
