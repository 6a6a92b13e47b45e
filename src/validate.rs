//!
//! Semantic validation of style documents.
//!
//! Parsing accepts anything grammatically well formed; this pass reports the
//! things that are legal but wrong or suspicious: unknown rules and tags,
//! options a rule does not take, values of the wrong type, exclusions that
//! cannot do anything, and orderings whose intent is ambiguous.

use crate::directive::DirectiveKind;
use crate::parser::ParseError;
use crate::registry;
use crate::style::StyleDocument;
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

static MD_ID_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^md\d{1,3}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    Syntax,
    UnknownRule,
    UnknownTag,
    UnknownOption,
    OptionTypeMismatch,
    DuplicateExclusion,
    ExcludeAfterConfigure,
    ConfigureAfterExclude,
    IneffectiveExclusion,
    EmptySelection,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::Syntax => "syntax",
            WarningKind::UnknownRule => "unknown-rule",
            WarningKind::UnknownTag => "unknown-tag",
            WarningKind::UnknownOption => "unknown-option",
            WarningKind::OptionTypeMismatch => "option-type-mismatch",
            WarningKind::DuplicateExclusion => "duplicate-exclusion",
            WarningKind::ExcludeAfterConfigure => "exclude-after-configure",
            WarningKind::ConfigureAfterExclude => "configure-after-exclude",
            WarningKind::IneffectiveExclusion => "ineffective-exclusion",
            WarningKind::EmptySelection => "empty-selection",
        }
    }

    /// Everything validation reports is advisory; error severity is reserved
    /// for lines the parser rejected.
    fn severity(&self) -> Severity {
        match self {
            WarningKind::Syntax => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

/// One finding against a style file, with its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleWarning {
    pub line: usize,
    pub column: usize,
    pub kind: WarningKind,
    pub severity: Severity,
    pub message: String,
}

impl StyleWarning {
    fn new(line: usize, kind: WarningKind, message: String) -> Self {
        Self {
            line,
            column: 1,
            kind,
            severity: kind.severity(),
            message,
        }
    }

    /// Wrap a parse error as a finding so `check` can report syntax and
    /// semantic problems in one stream.
    pub fn from_parse_error(err: &ParseError) -> Self {
        Self {
            line: err.line,
            column: err.column,
            kind: WarningKind::Syntax,
            severity: Severity::Error,
            message: err.kind.to_string(),
        }
    }
}

/// Parse leniently and validate, returning every finding sorted by position.
/// This is the engine behind the `check` command.
pub fn check_content(content: &str) -> Vec<StyleWarning> {
    let (doc, parse_errors) = StyleDocument::parse_lenient(content);
    let mut warnings: Vec<StyleWarning> = parse_errors.iter().map(StyleWarning::from_parse_error).collect();
    warnings.extend(validate(&doc));
    warnings.sort_by_key(|w| (w.line, w.column));
    warnings
}

/// Validate a parsed document. Findings come back in line order, except the
/// whole-file empty-selection notice which sorts with line 1.
pub fn validate(doc: &StyleDocument) -> Vec<StyleWarning> {
    let mut warnings = Vec::new();

    // Mirror of the resolution state, kept per line so findings can say
    // whether an exclusion or override actually did anything at that point.
    let mut enabled: HashSet<&'static str> = HashSet::new();
    let mut configured: IndexMap<&'static str, usize> = IndexMap::new();
    let mut excluded_at: IndexMap<&'static str, usize> = IndexMap::new();

    for (line, directive) in doc.directive_lines() {
        match &directive.kind {
            DirectiveKind::All => {
                for info in registry::all_rules() {
                    enabled.insert(info.id);
                }
                excluded_at.clear();
            }
            DirectiveKind::Tag { name } => {
                if !registry::known_tag(name) {
                    warnings.push(StyleWarning::new(
                        line,
                        WarningKind::UnknownTag,
                        format!("unknown tag `{name}`"),
                    ));
                    continue;
                }
                for info in registry::rules_with_tag(name) {
                    enabled.insert(info.id);
                    excluded_at.shift_remove(info.id);
                }
            }
            DirectiveKind::ExcludeTag { name } => {
                if !registry::known_tag(name) {
                    warnings.push(StyleWarning::new(
                        line,
                        WarningKind::UnknownTag,
                        format!("unknown tag `{name}`"),
                    ));
                    continue;
                }
                let mut removed_any = false;
                for info in registry::rules_with_tag(name) {
                    if enabled.remove(info.id) {
                        removed_any = true;
                    }
                    if let Some(configured_line) = configured.shift_remove(info.id) {
                        warnings.push(StyleWarning::new(
                            line,
                            WarningKind::ExcludeAfterConfigure,
                            format!(
                                "{} was configured on line {configured_line}; excluding it discards that configuration",
                                info.id
                            ),
                        ));
                    }
                }
                if !removed_any {
                    warnings.push(StyleWarning::new(
                        line,
                        WarningKind::IneffectiveExclusion,
                        format!("excluding tag `{name}` has no effect here; none of its rules are enabled"),
                    ));
                }
            }
            DirectiveKind::Rule { id, params } => {
                let Some(info) = registry::resolve(id) else {
                    warnings.push(unknown_rule(line, id));
                    continue;
                };
                if let Some(excluded_line) = excluded_at.shift_remove(info.id) {
                    warnings.push(StyleWarning::new(
                        line,
                        WarningKind::ConfigureAfterExclude,
                        format!("{} was excluded on line {excluded_line}; configuring it re-enables it", info.id),
                    ));
                }
                for (key, value) in params {
                    match info.param(key) {
                        None => {
                            let known = if info.params.is_empty() {
                                "it takes no options".to_string()
                            } else {
                                let names: Vec<String> =
                                    info.params.iter().map(|p| format!("`{}`", p.name)).collect();
                                format!("known options are {}", names.join(", "))
                            };
                            warnings.push(StyleWarning::new(
                                line,
                                WarningKind::UnknownOption,
                                format!("{} has no option `{key}`; {known}", info.id),
                            ));
                        }
                        Some(spec) if value.kind() != spec.kind => {
                            warnings.push(StyleWarning::new(
                                line,
                                WarningKind::OptionTypeMismatch,
                                format!("option `{key}` of {} expects {}, got {value}", info.id, spec.kind),
                            ));
                        }
                        Some(_) => {}
                    }
                }
                enabled.insert(info.id);
                configured.insert(info.id, line);
            }
            DirectiveKind::ExcludeRule { id } => {
                let Some(info) = registry::resolve(id) else {
                    warnings.push(unknown_rule(line, id));
                    continue;
                };
                if let Some(first_line) = excluded_at.get(info.id) {
                    warnings.push(StyleWarning::new(
                        line,
                        WarningKind::DuplicateExclusion,
                        format!("{} is already excluded on line {first_line}", info.id),
                    ));
                } else if !enabled.remove(info.id) {
                    warnings.push(StyleWarning::new(
                        line,
                        WarningKind::IneffectiveExclusion,
                        format!("excluding {} has no effect here; nothing has enabled it yet", info.id),
                    ));
                }
                if let Some(configured_line) = configured.shift_remove(info.id) {
                    warnings.push(StyleWarning::new(
                        line,
                        WarningKind::ExcludeAfterConfigure,
                        format!(
                            "{} was configured on line {configured_line}; excluding it discards that configuration",
                            info.id
                        ),
                    ));
                }
                excluded_at.entry(info.id).or_insert(line);
            }
        }
    }

    if enabled.is_empty() {
        warnings.push(StyleWarning::new(
            1,
            WarningKind::EmptySelection,
            "style selects no rules".to_string(),
        ));
    }

    warnings.sort_by_key(|w| (w.line, w.column));
    warnings
}

fn unknown_rule(line: usize, id: &str) -> StyleWarning {
    let message = if MD_ID_SHAPE.is_match(id) {
        format!("unknown rule {}", id.to_ascii_uppercase())
    } else {
        format!("unknown rule or alias `{id}`")
    };
    StyleWarning::new(line, WarningKind::UnknownRule, message)
}
