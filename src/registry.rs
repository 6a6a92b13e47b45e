//!
//! Static registry of the markdown lint rules a style file can reference.
//!
//! Each rule carries its canonical `MDxxx` identifier, its human-readable
//! alias, the tags used by `tag`/`exclude_tag` directives, and the parameter
//! specs that `rule` options are checked against. Lookup goes through a
//! compile-time perfect hash over every identifier and alias.

use crate::directive::{ParamKind, ParamMap, ParamValue};
use phf::phf_map;
use std::collections::BTreeSet;

/// Metadata for one lint rule.
#[derive(Debug)]
pub struct RuleInfo {
    pub id: &'static str,
    pub alias: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub params: &'static [ParamSpec],
}

/// One configurable parameter of a rule: its name, value family and default.
#[derive(Debug)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    default: DefaultValue,
}

#[derive(Debug)]
enum DefaultValue {
    Int(i64),
    Bool(bool),
    Str(&'static str),
    Symbol(&'static str),
}

impl ParamSpec {
    pub fn default_value(&self) -> ParamValue {
        match self.default {
            DefaultValue::Int(n) => ParamValue::Int(n),
            DefaultValue::Bool(b) => ParamValue::Bool(b),
            DefaultValue::Str(s) => ParamValue::Str(s.to_string()),
            DefaultValue::Symbol(s) => ParamValue::Symbol(s.to_string()),
        }
    }
}

impl RuleInfo {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// The rule's parameters at their default values, in declared order.
    pub fn default_params(&self) -> ParamMap {
        self.params.iter().map(|p| (p.name.to_string(), p.default_value())).collect()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

const fn p_int(name: &'static str, default: i64) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Int,
        default: DefaultValue::Int(default),
    }
}

const fn p_bool(name: &'static str, default: bool) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Bool,
        default: DefaultValue::Bool(default),
    }
}

const fn p_str(name: &'static str, default: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Text,
        default: DefaultValue::Str(default),
    }
}

const fn p_sym(name: &'static str, default: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Text,
        default: DefaultValue::Symbol(default),
    }
}

static RULES: &[RuleInfo] = &[
    RuleInfo {
        id: "MD001",
        alias: "header-increment",
        description: "Header levels should only increment by one level at a time",
        tags: &["headers"],
        params: &[],
    },
    RuleInfo {
        id: "MD002",
        alias: "first-header-h1",
        description: "First header should be a top level header",
        tags: &["headers"],
        params: &[p_int("level", 1)],
    },
    RuleInfo {
        id: "MD003",
        alias: "header-style",
        description: "Header style",
        tags: &["headers"],
        params: &[p_sym("style", "any")],
    },
    RuleInfo {
        id: "MD004",
        alias: "ul-style",
        description: "Unordered list style",
        tags: &["bullet", "ul"],
        params: &[p_sym("style", "consistent")],
    },
    RuleInfo {
        id: "MD005",
        alias: "list-indent",
        description: "Inconsistent indentation for list items at the same level",
        tags: &["bullet", "ul", "indentation"],
        params: &[],
    },
    RuleInfo {
        id: "MD006",
        alias: "ul-start-left",
        description: "Consider starting bulleted lists at the beginning of the line",
        tags: &["bullet", "ul", "indentation"],
        params: &[],
    },
    RuleInfo {
        id: "MD007",
        alias: "ul-indent",
        description: "Unordered list indentation",
        tags: &["bullet", "ul", "indentation"],
        params: &[p_int("indent", 2)],
    },
    RuleInfo {
        id: "MD009",
        alias: "no-trailing-spaces",
        description: "Trailing spaces",
        tags: &["whitespace"],
        params: &[p_int("br_spaces", 2)],
    },
    RuleInfo {
        id: "MD010",
        alias: "no-hard-tabs",
        description: "Hard tabs",
        tags: &["whitespace", "hard_tab"],
        params: &[p_bool("ignore_code_blocks", false)],
    },
    RuleInfo {
        id: "MD011",
        alias: "no-reversed-links",
        description: "Reversed link syntax",
        tags: &["links"],
        params: &[],
    },
    RuleInfo {
        id: "MD012",
        alias: "no-multiple-blanks",
        description: "Multiple consecutive blank lines",
        tags: &["whitespace", "blank_lines"],
        params: &[p_int("maximum", 1)],
    },
    RuleInfo {
        id: "MD013",
        alias: "line-length",
        description: "Line length",
        tags: &["line_length"],
        params: &[p_int("line_length", 80), p_bool("code_blocks", true), p_bool("tables", true)],
    },
    RuleInfo {
        id: "MD014",
        alias: "commands-show-output",
        description: "Dollar signs used before commands without showing output",
        tags: &["code"],
        params: &[],
    },
    RuleInfo {
        id: "MD018",
        alias: "no-missing-space-atx",
        description: "No space after hash on atx style header",
        tags: &["headers", "atx", "spaces"],
        params: &[],
    },
    RuleInfo {
        id: "MD019",
        alias: "no-multiple-space-atx",
        description: "Multiple spaces after hash on atx style header",
        tags: &["headers", "atx", "spaces"],
        params: &[],
    },
    RuleInfo {
        id: "MD020",
        alias: "no-missing-space-closed-atx",
        description: "No space inside hashes on closed atx style header",
        tags: &["headers", "atx_closed", "spaces"],
        params: &[],
    },
    RuleInfo {
        id: "MD021",
        alias: "no-multiple-space-closed-atx",
        description: "Multiple spaces inside hashes on closed atx style header",
        tags: &["headers", "atx_closed", "spaces"],
        params: &[],
    },
    RuleInfo {
        id: "MD022",
        alias: "blanks-around-headers",
        description: "Headers should be surrounded by blank lines",
        tags: &["headers", "blank_lines"],
        params: &[],
    },
    RuleInfo {
        id: "MD023",
        alias: "header-start-left",
        description: "Headers must start at the beginning of the line",
        tags: &["headers", "spaces"],
        params: &[],
    },
    RuleInfo {
        id: "MD024",
        alias: "no-duplicate-header",
        description: "Multiple headers with the same content",
        tags: &["headers"],
        params: &[p_bool("allow_different_nesting", false)],
    },
    RuleInfo {
        id: "MD025",
        alias: "single-h1",
        description: "Multiple top level headers in the same document",
        tags: &["headers"],
        params: &[p_int("level", 1)],
    },
    RuleInfo {
        id: "MD026",
        alias: "no-trailing-punctuation",
        description: "Trailing punctuation in header",
        tags: &["headers"],
        params: &[p_str("punctuation", ".,;:!?")],
    },
    RuleInfo {
        id: "MD027",
        alias: "no-multiple-space-blockquote",
        description: "Multiple spaces after blockquote symbol",
        tags: &["blockquote", "whitespace", "indentation"],
        params: &[],
    },
    RuleInfo {
        id: "MD028",
        alias: "no-blanks-blockquote",
        description: "Blank line inside blockquote",
        tags: &["blockquote", "whitespace"],
        params: &[],
    },
    RuleInfo {
        id: "MD029",
        alias: "ol-prefix",
        description: "Ordered list item prefix",
        tags: &["ol"],
        params: &[p_sym("style", "one")],
    },
    RuleInfo {
        id: "MD030",
        alias: "list-marker-space",
        description: "Spaces after list markers",
        tags: &["ol", "ul", "whitespace"],
        params: &[
            p_int("ul_single", 1),
            p_int("ol_single", 1),
            p_int("ul_multi", 1),
            p_int("ol_multi", 1),
        ],
    },
    RuleInfo {
        id: "MD031",
        alias: "blanks-around-fences",
        description: "Fenced code blocks should be surrounded by blank lines",
        tags: &["code", "blank_lines"],
        params: &[],
    },
    RuleInfo {
        id: "MD032",
        alias: "blanks-around-lists",
        description: "Lists should be surrounded by blank lines",
        tags: &["bullet", "ul", "ol", "blank_lines"],
        params: &[],
    },
    RuleInfo {
        id: "MD033",
        alias: "no-inline-html",
        description: "Inline HTML",
        tags: &["html"],
        params: &[p_str("allowed_elements", "")],
    },
    RuleInfo {
        id: "MD034",
        alias: "no-bare-urls",
        description: "Bare URL used",
        tags: &["links"],
        params: &[],
    },
    RuleInfo {
        id: "MD035",
        alias: "hr-style",
        description: "Horizontal rule style",
        tags: &["hr"],
        params: &[p_sym("style", "consistent")],
    },
    RuleInfo {
        id: "MD036",
        alias: "no-emphasis-as-header",
        description: "Emphasis used instead of a header",
        tags: &["headers", "emphasis"],
        params: &[p_str("punctuation", ".,;:!?")],
    },
    RuleInfo {
        id: "MD037",
        alias: "no-space-in-emphasis",
        description: "Spaces inside emphasis markers",
        tags: &["whitespace", "emphasis"],
        params: &[],
    },
    RuleInfo {
        id: "MD038",
        alias: "no-space-in-code",
        description: "Spaces inside code span elements",
        tags: &["whitespace", "code"],
        params: &[],
    },
    RuleInfo {
        id: "MD039",
        alias: "no-space-in-links",
        description: "Spaces inside link text",
        tags: &["whitespace", "links"],
        params: &[],
    },
    RuleInfo {
        id: "MD040",
        alias: "fenced-code-language",
        description: "Fenced code blocks should have a language specified",
        tags: &["code", "language"],
        params: &[],
    },
    RuleInfo {
        id: "MD041",
        alias: "first-line-h1",
        description: "First line in file should be a top level header",
        tags: &["headers"],
        params: &[p_int("level", 1)],
    },
    RuleInfo {
        id: "MD046",
        alias: "code-block-style",
        description: "Code block style",
        tags: &["code"],
        params: &[p_sym("style", "fenced")],
    },
    RuleInfo {
        id: "MD047",
        alias: "single-trailing-newline",
        description: "File should end with a single newline character",
        tags: &["blank_lines"],
        params: &[],
    },
];

/// Lowercased identifier and alias, each mapping to an index into `RULES`.
static LOOKUP: phf::Map<&'static str, usize> = phf_map! {
    "md001" => 0, "header-increment" => 0,
    "md002" => 1, "first-header-h1" => 1,
    "md003" => 2, "header-style" => 2,
    "md004" => 3, "ul-style" => 3,
    "md005" => 4, "list-indent" => 4,
    "md006" => 5, "ul-start-left" => 5,
    "md007" => 6, "ul-indent" => 6,
    "md009" => 7, "no-trailing-spaces" => 7,
    "md010" => 8, "no-hard-tabs" => 8,
    "md011" => 9, "no-reversed-links" => 9,
    "md012" => 10, "no-multiple-blanks" => 10,
    "md013" => 11, "line-length" => 11,
    "md014" => 12, "commands-show-output" => 12,
    "md018" => 13, "no-missing-space-atx" => 13,
    "md019" => 14, "no-multiple-space-atx" => 14,
    "md020" => 15, "no-missing-space-closed-atx" => 15,
    "md021" => 16, "no-multiple-space-closed-atx" => 16,
    "md022" => 17, "blanks-around-headers" => 17,
    "md023" => 18, "header-start-left" => 18,
    "md024" => 19, "no-duplicate-header" => 19,
    "md025" => 20, "single-h1" => 20,
    "md026" => 21, "no-trailing-punctuation" => 21,
    "md027" => 22, "no-multiple-space-blockquote" => 22,
    "md028" => 23, "no-blanks-blockquote" => 23,
    "md029" => 24, "ol-prefix" => 24,
    "md030" => 25, "list-marker-space" => 25,
    "md031" => 26, "blanks-around-fences" => 26,
    "md032" => 27, "blanks-around-lists" => 27,
    "md033" => 28, "no-inline-html" => 28,
    "md034" => 29, "no-bare-urls" => 29,
    "md035" => 30, "hr-style" => 30,
    "md036" => 31, "no-emphasis-as-header" => 31,
    "md037" => 32, "no-space-in-emphasis" => 32,
    "md038" => 33, "no-space-in-code" => 33,
    "md039" => 34, "no-space-in-links" => 34,
    "md040" => 35, "fenced-code-language" => 35,
    "md041" => 36, "first-line-h1" => 36,
    "md046" => 37, "code-block-style" => 37,
    "md047" => 38, "single-trailing-newline" => 38,
};

/// All known rules in identifier order.
pub fn all_rules() -> &'static [RuleInfo] {
    RULES
}

/// Look up a rule by identifier or alias. Matching is case-insensitive and
/// treats underscores in aliases as hyphens, so `MD007`, `md007`, `ul-indent`
/// and `ul_indent` all find the same rule.
pub fn resolve(query: &str) -> Option<&'static RuleInfo> {
    let normalized = query.to_ascii_lowercase().replace('_', "-");
    LOOKUP.get(normalized.as_str()).map(|&idx| &RULES[idx])
}

/// The canonical `MDxxx` identifier for a query, if the rule is known.
pub fn canonical_id(query: &str) -> Option<&'static str> {
    resolve(query).map(|rule| rule.id)
}

/// All rules carrying `tag`, in identifier order. Tag matching is
/// case-insensitive; tag names keep their underscores.
pub fn rules_with_tag(tag: &str) -> Vec<&'static RuleInfo> {
    let normalized = tag.to_ascii_lowercase();
    RULES.iter().filter(|rule| rule.has_tag(&normalized)).collect()
}

pub fn known_tag(tag: &str) -> bool {
    !rules_with_tag(tag).is_empty()
}

/// Every tag used by at least one rule, sorted.
pub fn all_tags() -> Vec<&'static str> {
    let tags: BTreeSet<&'static str> = RULES.iter().flat_map(|rule| rule.tags.iter().copied()).collect();
    tags.into_iter().collect()
}
