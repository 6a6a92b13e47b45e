//!
//! Line-oriented parser for mdl style files.
//!
//! The grammar is small: one directive per line, `#` comments, and Ruby-ish
//! option syntax on `rule` lines (`:key => value` or `key: value`). The parser
//! is a hand-rolled cursor so every error carries the 1-based line and column
//! where parsing stopped, which is what editors and the `check` command want.

use crate::directive::{Directive, DirectiveKind, ParamMap, ParamValue};
use crate::style::{Item, SourceLine};
use thiserror::Error;

/// A syntax error with its position in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unknown directive keyword `{0}`")]
    UnknownKeyword(String),
    #[error("missing rule identifier after `{directive}`")]
    MissingIdentifier { directive: &'static str },
    #[error("missing tag name after `{directive}`")]
    MissingTag { directive: &'static str },
    #[error("unterminated quoted string")]
    UnterminatedString,
    #[error("unclosed array value")]
    UnclosedArray,
    #[error("malformed option: expected `:key => value` or `key: value`")]
    MalformedOption,
    #[error("expected an option value")]
    ExpectedValue,
    #[error("invalid option value `{0}`")]
    InvalidValue(String),
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

/// Parse a whole style file, stopping at the first syntax error.
pub fn parse_document(content: &str) -> Result<Vec<SourceLine>, ParseError> {
    let mut lines = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let number = idx + 1;
        let item = parse_line(raw, number)?;
        lines.push(SourceLine { number, item });
    }
    Ok(lines)
}

/// Parse a whole style file, collecting syntax errors instead of stopping.
/// Lines that fail to parse are dropped from the document; the surviving
/// lines keep their original numbers.
pub fn parse_document_lenient(content: &str) -> (Vec<SourceLine>, Vec<ParseError>) {
    let mut lines = Vec::new();
    let mut errors = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let number = idx + 1;
        match parse_line(raw, number) {
            Ok(item) => lines.push(SourceLine { number, item }),
            Err(e) => errors.push(e),
        }
    }
    (lines, errors)
}

/// Parse a single line. `number` is the 1-based line number used in errors.
pub fn parse_line(text: &str, number: usize) -> Result<Item, ParseError> {
    let mut cur = Cursor::new(text, number);
    cur.skip_spaces();
    match cur.peek() {
        None => return Ok(Item::Blank),
        Some('#') => {
            cur.bump();
            return Ok(Item::Comment(cur.rest().trim().to_string()));
        }
        _ => {}
    }

    let keyword_col = cur.column();
    let keyword = cur.take_while(is_ident_char);
    if keyword.is_empty() {
        let found = cur.peek().map(String::from).unwrap_or_default();
        return Err(cur.error_at(keyword_col, ParseErrorKind::UnknownKeyword(found)));
    }

    let kind = match keyword.as_str() {
        "all" => DirectiveKind::All,
        "rule" => {
            let id = parse_rule_id(&mut cur, "rule")?;
            let params = parse_options(&mut cur)?;
            DirectiveKind::Rule { id, params }
        }
        "exclude_rule" => {
            let id = parse_rule_id(&mut cur, "exclude_rule")?;
            DirectiveKind::ExcludeRule { id }
        }
        "tag" => {
            let name = parse_tag_name(&mut cur, "tag")?;
            DirectiveKind::Tag { name }
        }
        "exclude_tag" => {
            let name = parse_tag_name(&mut cur, "exclude_tag")?;
            DirectiveKind::ExcludeTag { name }
        }
        _ => {
            return Err(cur.error_at(keyword_col, ParseErrorKind::UnknownKeyword(keyword)));
        }
    };

    let comment = parse_line_end(&mut cur)?;
    Ok(Item::Directive(Directive { kind, comment }))
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_rule_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
}

/// Rule identifier: quoted (`'MD013'`, `"MD013"`) or bare (`MD013`).
fn parse_rule_id(cur: &mut Cursor, directive: &'static str) -> Result<String, ParseError> {
    cur.skip_spaces();
    let col = cur.column();
    match cur.peek() {
        None | Some('#') => Err(cur.error_at(col, ParseErrorKind::MissingIdentifier { directive })),
        Some(q @ ('\'' | '"')) => {
            cur.bump();
            let id = cur.take_until_quote(q, col)?;
            if id.is_empty() {
                Err(cur.error_at(col, ParseErrorKind::MissingIdentifier { directive }))
            } else {
                Ok(id)
            }
        }
        Some(c) if is_rule_id_char(c) => Ok(cur.take_while(is_rule_id_char)),
        Some(_) => Err(cur.error_at(col, ParseErrorKind::MissingIdentifier { directive })),
    }
}

/// Tag name: symbol (`:whitespace`), quoted or bare.
fn parse_tag_name(cur: &mut Cursor, directive: &'static str) -> Result<String, ParseError> {
    cur.skip_spaces();
    let col = cur.column();
    match cur.peek() {
        None | Some('#') => Err(cur.error_at(col, ParseErrorKind::MissingTag { directive })),
        Some(':') => {
            cur.bump();
            let name = cur.take_while(is_ident_char);
            if name.is_empty() {
                Err(cur.error_at(col, ParseErrorKind::MissingTag { directive }))
            } else {
                Ok(name)
            }
        }
        Some(q @ ('\'' | '"')) => {
            cur.bump();
            let name = cur.take_until_quote(q, col)?;
            if name.is_empty() {
                Err(cur.error_at(col, ParseErrorKind::MissingTag { directive }))
            } else {
                Ok(name)
            }
        }
        Some(c) if is_ident_char(c) => Ok(cur.take_while(is_ident_char)),
        Some(_) => Err(cur.error_at(col, ParseErrorKind::MissingTag { directive })),
    }
}

/// Comma-separated options after a rule identifier. Duplicate keys keep the
/// last occurrence, as a Ruby hash literal would.
fn parse_options(cur: &mut Cursor) -> Result<ParamMap, ParseError> {
    let mut params = ParamMap::new();
    loop {
        cur.skip_spaces();
        if cur.peek() != Some(',') {
            return Ok(params);
        }
        cur.bump();
        let (key, value) = parse_option(cur)?;
        params.insert(key, value);
    }
}

fn parse_option(cur: &mut Cursor) -> Result<(String, ParamValue), ParseError> {
    cur.skip_spaces();
    let col = cur.column();
    let key = match cur.peek() {
        // :key => value
        Some(':') => {
            cur.bump();
            let key = cur.take_while(is_ident_char);
            if key.is_empty() {
                return Err(cur.error_at(col, ParseErrorKind::MalformedOption));
            }
            expect_arrow(cur)?;
            key
        }
        // 'key' => value
        Some(q @ ('\'' | '"')) => {
            cur.bump();
            let key = cur.take_until_quote(q, col)?;
            if key.is_empty() {
                return Err(cur.error_at(col, ParseErrorKind::MalformedOption));
            }
            expect_arrow(cur)?;
            key
        }
        // key: value (hash colon binds to the name, no space before it)
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            let key = cur.take_while(is_ident_char);
            if cur.peek() != Some(':') {
                return Err(cur.error(ParseErrorKind::MalformedOption));
            }
            cur.bump();
            key
        }
        _ => return Err(cur.error_at(col, ParseErrorKind::MalformedOption)),
    };
    let value = parse_value(cur, false)?;
    Ok((key, value))
}

fn expect_arrow(cur: &mut Cursor) -> Result<(), ParseError> {
    cur.skip_spaces();
    if cur.peek() == Some('=') && cur.peek_ahead(1) == Some('>') {
        cur.bump();
        cur.bump();
        Ok(())
    } else {
        Err(cur.error(ParseErrorKind::MalformedOption))
    }
}

fn parse_value(cur: &mut Cursor, in_array: bool) -> Result<ParamValue, ParseError> {
    cur.skip_spaces();
    let col = cur.column();
    match cur.peek() {
        None | Some('#') => Err(cur.error_at(col, ParseErrorKind::ExpectedValue)),
        Some(q @ ('\'' | '"')) => {
            cur.bump();
            Ok(ParamValue::Str(cur.take_until_quote(q, col)?))
        }
        Some(':') => {
            cur.bump();
            let name = cur.take_while(is_ident_char);
            if name.is_empty() {
                Err(cur.error_at(col, ParseErrorKind::InvalidValue(":".to_string())))
            } else {
                Ok(ParamValue::Symbol(name))
            }
        }
        Some('[') if !in_array => parse_array(cur),
        Some('[') => Err(cur.error_at(col, ParseErrorKind::InvalidValue("[".to_string()))),
        Some(c) if c.is_ascii_digit() || c == '-' => parse_int(cur, col),
        Some(c) if c.is_ascii_alphabetic() => {
            let word = cur.take_while(is_ident_char);
            match word.as_str() {
                "true" => Ok(ParamValue::Bool(true)),
                "false" => Ok(ParamValue::Bool(false)),
                _ => Err(cur.error_at(col, ParseErrorKind::InvalidValue(word))),
            }
        }
        Some(c) => Err(cur.error_at(col, ParseErrorKind::InvalidValue(String::from(c)))),
    }
}

fn parse_array(cur: &mut Cursor) -> Result<ParamValue, ParseError> {
    let open_col = cur.column();
    cur.bump();
    let mut items = Vec::new();
    cur.skip_spaces();
    if cur.peek() == Some(']') {
        cur.bump();
        return Ok(ParamValue::Array(items));
    }
    loop {
        items.push(parse_value(cur, true)?);
        cur.skip_spaces();
        match cur.peek() {
            Some(',') => {
                cur.bump();
            }
            Some(']') => {
                cur.bump();
                return Ok(ParamValue::Array(items));
            }
            None => return Err(cur.error_at(open_col, ParseErrorKind::UnclosedArray)),
            Some(c) => return Err(cur.error(ParseErrorKind::InvalidValue(String::from(c)))),
        }
    }
}

fn parse_int(cur: &mut Cursor, col: usize) -> Result<ParamValue, ParseError> {
    let mut text = String::new();
    if cur.peek() == Some('-') {
        cur.bump();
        text.push('-');
    }
    text.push_str(&cur.take_while(|c| c.is_ascii_digit()));
    // Catch tokens like `2.5` or `2x` instead of stopping at the digits
    let tail = cur.take_while(|c| is_ident_char(c) || c == '.');
    if !tail.is_empty() || text == "-" {
        text.push_str(&tail);
        return Err(cur.error_at(col, ParseErrorKind::InvalidValue(text)));
    }
    match text.parse::<i64>() {
        Ok(n) => Ok(ParamValue::Int(n)),
        Err(_) => Err(cur.error_at(col, ParseErrorKind::InvalidValue(text))),
    }
}

/// Consume the end of a directive line: nothing, or a trailing comment.
fn parse_line_end(cur: &mut Cursor) -> Result<Option<String>, ParseError> {
    cur.skip_spaces();
    match cur.peek() {
        None => Ok(None),
        Some('#') => {
            cur.bump();
            Ok(Some(cur.rest().trim().to_string()))
        }
        Some(_) => {
            let col = cur.column();
            let rest = cur.rest().trim_end().to_string();
            Err(cur.error_at(col, ParseErrorKind::TrailingInput(rest)))
        }
    }
}

/// Character cursor over one line. Columns are 1-based character offsets,
/// so they stay correct for multi-byte input.
struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Cursor {
    fn new(text: &str, line: usize) -> Self {
        Self {
            chars: text.trim_end_matches('\r').chars().collect(),
            pos: 0,
            line,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn column(&self) -> usize {
        self.pos + 1
    }

    fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.pos += 1;
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Consume up to and including the closing quote. `open_col` is where the
    /// opening quote sat, which is the position reported if the line ends first.
    fn take_until_quote(&mut self, quote: char, open_col: usize) -> Result<String, ParseError> {
        let mut out = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(out),
                Some(c) => out.push(c),
                None => return Err(self.error_at(open_col, ParseErrorKind::UnterminatedString)),
            }
        }
    }

    fn rest(&mut self) -> String {
        let out: String = self.chars[self.pos..].iter().collect();
        self.pos = self.chars.len();
        out
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(self.column(), kind)
    }

    fn error_at(&self, column: usize, kind: ParseErrorKind) -> ParseError {
        ParseError {
            line: self.line,
            column,
            kind,
        }
    }
}
