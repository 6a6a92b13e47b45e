//!
//! Conversion between style files and the config formats of neighbouring
//! markdown linters.
//!
//! Export goes from a resolved [`EffectiveStyle`] to markdownlint JSON or
//! rumdl TOML. Import reads those formats back into a [`StyleDocument`],
//! warning about and skipping anything a style file cannot express rather
//! than failing the whole conversion.

use crate::directive::{Directive, DirectiveKind, ParamMap, ParamValue};
use crate::registry;
use crate::resolve::EffectiveStyle;
use crate::style::{StyleDocument, StyleError};
use indexmap::IndexMap;
use log::warn;
use std::fs;
use std::path::Path;
use toml_edit::DocumentMut;

/// Target formats for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdownlint,
    RumdlToml,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdownlint" | "json" => Ok(ExportFormat::Markdownlint),
            "rumdl" | "toml" => Ok(ExportFormat::RumdlToml),
            _ => Err(format!("unknown export format '{s}' (expected markdownlint or rumdl)")),
        }
    }
}

impl ExportFormat {
    /// Filename used when the caller does not name one.
    pub fn default_filename(&self) -> &'static str {
        match self {
            ExportFormat::Markdownlint => ".markdownlint.json",
            ExportFormat::RumdlToml => ".rumdl.toml",
        }
    }

    pub fn render(&self, style: &EffectiveStyle) -> String {
        match self {
            ExportFormat::Markdownlint => to_markdownlint_json_string(style),
            ExportFormat::RumdlToml => to_rumdl_toml(style),
        }
    }
}

/// Render an effective style as a markdownlint config object. The `default`
/// key mirrors whether the style enabled everything; exclusions become
/// `false` entries; parameter overrides become per-rule objects; rules
/// enabled without `all` become `true` entries.
pub fn to_markdownlint_json(style: &EffectiveStyle) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert("default".to_string(), serde_json::Value::Bool(style.enabled_all()));
    for id in style.excluded() {
        map.insert(id.clone(), serde_json::Value::Bool(false));
    }
    for rule in style.rules() {
        if !rule.overrides.is_empty() {
            let params: serde_json::Map<String, serde_json::Value> =
                rule.overrides.iter().map(|(k, v)| (k.clone(), v.to_json())).collect();
            map.insert(rule.id.clone(), serde_json::Value::Object(params));
        } else if !style.enabled_all() {
            map.insert(rule.id.clone(), serde_json::Value::Bool(true));
        }
    }
    serde_json::Value::Object(map)
}

pub fn to_markdownlint_json_string(style: &EffectiveStyle) -> String {
    let value = to_markdownlint_json(style);
    // Object keys keep insertion order, so this is deterministic
    let mut out = serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

/// Render an effective style as a rumdl config. Without `all`, the enabled
/// rules go into `global.enable`; exclusions go into `global.disable`;
/// overrides become `[MDxxx]` tables.
pub fn to_rumdl_toml(style: &EffectiveStyle) -> String {
    let mut doc = DocumentMut::new();

    let mut global = toml_edit::Table::new();
    if !style.enabled_all() {
        let mut enable = toml_edit::Array::new();
        for rule in style.rules() {
            enable.push(rule.id.as_str());
        }
        global["enable"] = toml_edit::value(enable);
    }
    if !style.excluded().is_empty() {
        let mut disable = toml_edit::Array::new();
        for id in style.excluded() {
            disable.push(id.as_str());
        }
        global["disable"] = toml_edit::value(disable);
    }
    if !global.is_empty() {
        doc.insert("global", toml_edit::Item::Table(global));
    }

    for rule in style.rules() {
        if rule.overrides.is_empty() {
            continue;
        }
        let mut table = toml_edit::Table::new();
        for (key, value) in &rule.overrides {
            table[key.as_str()] = toml_edit::value(param_to_toml_edit(value));
        }
        doc.insert(rule.id.as_str(), toml_edit::Item::Table(table));
    }

    doc.to_string()
}

fn param_to_toml_edit(value: &ParamValue) -> toml_edit::Value {
    match value {
        ParamValue::Int(n) => toml_edit::Value::from(*n),
        ParamValue::Bool(b) => toml_edit::Value::from(*b),
        ParamValue::Str(s) | ParamValue::Symbol(s) => toml_edit::Value::from(s.as_str()),
        ParamValue::Array(items) => {
            let mut arr = toml_edit::Array::new();
            for item in items {
                arr.push(param_to_toml_edit(item));
            }
            toml_edit::Value::Array(arr)
        }
    }
}

/// A parsed foreign config, ready to turn into a style document.
#[derive(Debug)]
pub enum ForeignConfig {
    Markdownlint(MarkdownlintConfig),
    Rumdl(RumdlConfig),
}

impl ForeignConfig {
    /// Build a style document expressing the same selection. `source` is the
    /// filename recorded in the generated header comment, if any.
    pub fn to_style_document(&self, source: Option<&str>) -> StyleDocument {
        match self {
            ForeignConfig::Markdownlint(config) => config.to_style_document(source),
            ForeignConfig::Rumdl(config) => config.to_style_document(source),
        }
    }
}

/// Read a markdownlint or rumdl config, choosing the parser by extension.
/// Extensionless files (`.markdownlintrc` and friends) are tried as JSON
/// first, then YAML.
pub fn load_foreign_config(path: impl AsRef<Path>) -> Result<ForeignConfig, StyleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| StyleError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match ext.as_deref() {
        Some("json" | "jsonc") => Ok(ForeignConfig::Markdownlint(parse_markdownlint_json(&content, path)?)),
        Some("yaml" | "yml") => Ok(ForeignConfig::Markdownlint(parse_markdownlint_yaml(&content, path)?)),
        Some("toml") => Ok(ForeignConfig::Rumdl(parse_rumdl_toml(&content, path)?)),
        None => parse_markdownlint_json(&content, path)
            .or_else(|_| parse_markdownlint_yaml(&content, path))
            .map(ForeignConfig::Markdownlint)
            .map_err(|_| StyleError::Import {
                path: path.display().to_string(),
                message: "not valid JSON or YAML".to_string(),
            }),
        Some(_) => Err(StyleError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

fn parse_markdownlint_json(content: &str, path: &Path) -> Result<MarkdownlintConfig, StyleError> {
    serde_json::from_str::<IndexMap<String, serde_yml::Value>>(content)
        .map(MarkdownlintConfig)
        .map_err(|e| StyleError::Import {
            path: path.display().to_string(),
            message: format!("invalid JSON: {e}"),
        })
}

fn parse_markdownlint_yaml(content: &str, path: &Path) -> Result<MarkdownlintConfig, StyleError> {
    serde_yml::from_str::<IndexMap<String, serde_yml::Value>>(content)
        .map(MarkdownlintConfig)
        .map_err(|e| StyleError::Import {
            path: path.display().to_string(),
            message: format!("invalid YAML: {e}"),
        })
}

fn parse_rumdl_toml(content: &str, path: &Path) -> Result<RumdlConfig, StyleError> {
    toml::from_str::<toml::Table>(content)
        .map(RumdlConfig)
        .map_err(|e| StyleError::Import {
            path: path.display().to_string(),
            message: format!("invalid TOML: {e}"),
        })
}

/// A markdownlint config: rule identifiers or aliases mapped to `false`,
/// `true` or an object of parameters, plus the `default` switch.
#[derive(Debug)]
pub struct MarkdownlintConfig(pub IndexMap<String, serde_yml::Value>);

impl MarkdownlintConfig {
    pub fn to_style_document(&self, source: Option<&str>) -> StyleDocument {
        let mut doc = StyleDocument::new();
        if let Some(name) = source {
            doc.push_comment(format!("Imported from {name}"));
            doc.push_blank();
        }

        let default_on = match self.0.get("default") {
            Some(value) => value.as_bool().unwrap_or(true),
            None => true,
        };
        if default_on {
            doc.push_directive(Directive::new(DirectiveKind::All));
        }

        for (key, value) in &self.0 {
            if key == "default" {
                continue;
            }
            if matches!(key.as_str(), "extends" | "$schema") {
                warn!("ignoring unsupported key `{key}`");
                continue;
            }
            let Some(info) = registry::resolve(key) else {
                warn!("skipping unknown rule `{key}`");
                continue;
            };
            match value {
                serde_yml::Value::Bool(false) => {
                    // Redundant when nothing is on by default
                    if default_on {
                        doc.push_directive(Directive::new(DirectiveKind::ExcludeRule {
                            id: info.id.to_string(),
                        }));
                    }
                }
                serde_yml::Value::Bool(true) => {
                    if !default_on {
                        doc.push_directive(Directive::new(DirectiveKind::Rule {
                            id: info.id.to_string(),
                            params: ParamMap::new(),
                        }));
                    }
                }
                serde_yml::Value::Mapping(mapping) => {
                    let mut params = ParamMap::new();
                    for (k, v) in mapping {
                        let Some(name) = k.as_str() else {
                            warn!("skipping non-string option key of {}", info.id);
                            continue;
                        };
                        match param_from_yaml(v) {
                            Some(param) => {
                                params.insert(name.to_string(), param);
                            }
                            None => warn!("skipping option `{name}` of {}: unsupported value", info.id),
                        }
                    }
                    doc.push_directive(Directive::new(DirectiveKind::Rule {
                        id: info.id.to_string(),
                        params,
                    }));
                }
                other => warn!("skipping {}: unsupported value {other:?}", info.id),
            }
        }
        doc
    }
}

/// Whether a foreign string value can be written back out. The style grammar
/// has no escape syntax, so a string containing both quote characters has no
/// spellable form.
fn writable_string(s: &str) -> bool {
    !(s.contains('\'') && s.contains('"'))
}

fn param_from_yaml(value: &serde_yml::Value) -> Option<ParamValue> {
    match value {
        serde_yml::Value::Bool(b) => Some(ParamValue::Bool(*b)),
        serde_yml::Value::Number(n) => n.as_i64().map(ParamValue::Int),
        serde_yml::Value::String(s) => writable_string(s).then(|| ParamValue::Str(s.clone())),
        serde_yml::Value::Sequence(items) => {
            let mut out = Vec::new();
            for item in items {
                match param_from_yaml(item) {
                    Some(ParamValue::Array(_)) | None => return None,
                    Some(v) => out.push(v),
                }
            }
            Some(ParamValue::Array(out))
        }
        _ => None,
    }
}

/// A rumdl config: `global.enable`/`global.disable` plus `[MDxxx]` tables.
#[derive(Debug)]
pub struct RumdlConfig(pub toml::Table);

impl RumdlConfig {
    pub fn to_style_document(&self, source: Option<&str>) -> StyleDocument {
        let mut doc = StyleDocument::new();
        if let Some(name) = source {
            doc.push_comment(format!("Imported from {name}"));
            doc.push_blank();
        }

        // Collect [MDxxx] tables first so enable-list entries carry their
        // parameters on the same line
        let mut overrides: IndexMap<String, ParamMap> = IndexMap::new();
        for (key, value) in &self.0 {
            if key == "global" {
                continue;
            }
            let Some(info) = registry::resolve(key) else {
                warn!("skipping unknown rule table `[{key}]`");
                continue;
            };
            let toml::Value::Table(table) = value else {
                warn!("skipping `{key}`: expected a table");
                continue;
            };
            let mut params = ParamMap::new();
            for (name, v) in table {
                match param_from_toml(v) {
                    Some(param) => {
                        params.insert(name.clone(), param);
                    }
                    None => warn!("skipping option `{name}` of {}: unsupported value", info.id),
                }
            }
            overrides.insert(info.id.to_string(), params);
        }

        let global = self.0.get("global").and_then(toml::Value::as_table);
        let enable = global.and_then(|g| g.get("enable")).map(string_items);
        let disable = global.and_then(|g| g.get("disable")).map(string_items).unwrap_or_default();

        let disabled: Vec<String> = disable
            .iter()
            .map(|id| registry::canonical_id(id).map(str::to_string).unwrap_or_else(|| id.clone()))
            .collect();

        match enable {
            Some(ids) => {
                // An enable list is a whitelist; `all` has no place here
                for id in ids {
                    let canonical = registry::canonical_id(&id).map(str::to_string).unwrap_or(id);
                    if disabled.contains(&canonical) {
                        continue;
                    }
                    let params = overrides.shift_remove(&canonical).unwrap_or_default();
                    doc.push_directive(Directive::new(DirectiveKind::Rule { id: canonical, params }));
                }
                for (id, _) in overrides {
                    warn!("[{id}] is configured but not in the enable list");
                }
            }
            None => {
                doc.push_directive(Directive::new(DirectiveKind::All));
                for id in disabled {
                    doc.push_directive(Directive::new(DirectiveKind::ExcludeRule { id }));
                }
                for (id, params) in overrides {
                    doc.push_directive(Directive::new(DirectiveKind::Rule { id, params }));
                }
            }
        }
        doc
    }
}

fn string_items(value: &toml::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}

fn param_from_toml(value: &toml::Value) -> Option<ParamValue> {
    match value {
        toml::Value::Boolean(b) => Some(ParamValue::Bool(*b)),
        toml::Value::Integer(n) => Some(ParamValue::Int(*n)),
        toml::Value::String(s) => writable_string(s).then(|| ParamValue::Str(s.clone())),
        toml::Value::Array(items) => {
            let mut out = Vec::new();
            for item in items {
                match param_from_toml(item) {
                    Some(ParamValue::Array(_)) | None => return None,
                    Some(v) => out.push(v),
                }
            }
            Some(ParamValue::Array(out))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn style_of(content: &str) -> EffectiveStyle {
        EffectiveStyle::resolve(&StyleDocument::parse(content).unwrap())
    }

    const DEFAULT_STYLE: &str = "\
all
exclude_rule 'MD013'
exclude_rule 'MD036'
exclude_rule 'MD026'
exclude_rule 'MD029'
rule 'MD007', :indent => 2
";

    #[test]
    fn test_markdownlint_export_of_default_style() {
        let json = to_markdownlint_json(&style_of(DEFAULT_STYLE));
        assert_eq!(
            json,
            serde_json::json!({
                "default": true,
                "MD013": false,
                "MD036": false,
                "MD026": false,
                "MD029": false,
                "MD007": { "indent": 2 }
            })
        );
    }

    #[test]
    fn test_markdownlint_export_key_order() {
        let out = to_markdownlint_json_string(&style_of(DEFAULT_STYLE));
        let default_pos = out.find("\"default\"").unwrap();
        let md013_pos = out.find("\"MD013\"").unwrap();
        let md007_pos = out.find("\"MD007\"").unwrap();
        assert!(default_pos < md013_pos && md013_pos < md007_pos);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_markdownlint_export_without_all() {
        let json = to_markdownlint_json(&style_of("tag :ol\nrule 'MD029', :style => :ordered\n"));
        assert_eq!(
            json,
            serde_json::json!({
                "default": false,
                "MD029": { "style": "ordered" },
                "MD030": true,
                "MD032": true
            })
        );
    }

    #[test]
    fn test_rumdl_export_of_default_style() {
        let out = to_rumdl_toml(&style_of(DEFAULT_STYLE));
        let parsed: toml::Table = toml::from_str(&out).unwrap();

        let global = parsed["global"].as_table().unwrap();
        assert!(global.get("enable").is_none(), "`all` styles do not whitelist");
        let disable: Vec<&str> = global["disable"].as_array().unwrap().iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(disable, vec!["MD013", "MD036", "MD026", "MD029"]);

        assert_eq!(parsed["MD007"]["indent"].as_integer(), Some(2));
    }

    #[test]
    fn test_rumdl_export_with_enable_list() {
        let out = to_rumdl_toml(&style_of("tag :ol\n"));
        let parsed: toml::Table = toml::from_str(&out).unwrap();
        let enable: Vec<&str> = parsed["global"]["enable"].as_array().unwrap().iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(enable, vec!["MD029", "MD030", "MD032"]);
    }

    #[test]
    fn test_rumdl_export_of_plain_all_is_empty() {
        assert_eq!(to_rumdl_toml(&style_of("all\n")), "");
    }

    #[test]
    fn test_rumdl_export_value_types() {
        let out = to_rumdl_toml(&style_of(
            "all\nrule 'MD013', :line_length => 100, :code_blocks => false\nrule 'MD033', :allowed_elements => ['br', 'hr']\n",
        ));
        let parsed: toml::Table = toml::from_str(&out).unwrap();
        assert_eq!(parsed["MD013"]["line_length"].as_integer(), Some(100));
        assert_eq!(parsed["MD013"]["code_blocks"].as_bool(), Some(false));
        let elements: Vec<&str> = parsed["MD033"]["allowed_elements"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(elements, vec!["br", "hr"]);
    }

    #[test]
    fn test_markdownlint_import_with_default_true() {
        let config = MarkdownlintConfig(
            serde_json::from_str(r#"{ "default": true, "MD013": false, "MD007": { "indent": 2 } }"#).unwrap(),
        );
        let doc = config.to_style_document(None);
        assert_eq!(doc.to_string(), "all\nexclude_rule 'MD013'\nrule 'MD007', :indent => 2\n");
    }

    #[test]
    fn test_markdownlint_import_with_default_false() {
        let config = MarkdownlintConfig(
            serde_json::from_str(r#"{ "default": false, "MD001": true, "MD007": { "indent": 3 }, "MD013": false }"#)
                .unwrap(),
        );
        let doc = config.to_style_document(None);
        assert_eq!(doc.to_string(), "rule 'MD001'\nrule 'MD007', :indent => 3\n");
    }

    #[test]
    fn test_markdownlint_import_resolves_aliases() {
        let config =
            MarkdownlintConfig(serde_json::from_str(r#"{ "ul-indent": { "indent": 4 }, "line-length": false }"#).unwrap());
        let doc = config.to_style_document(None);
        assert_eq!(doc.to_string(), "all\nexclude_rule 'MD013'\nrule 'MD007', :indent => 4\n");
    }

    #[test]
    fn test_markdownlint_import_skips_what_it_cannot_express() {
        let config = MarkdownlintConfig(
            serde_json::from_str(
                r#"{ "default": true, "MD999": false, "extends": "base.json", "MD007": { "indent": 2, "nested": { "x": 1 } } }"#,
            )
            .unwrap(),
        );
        let doc = config.to_style_document(None);
        assert_eq!(doc.to_string(), "all\nrule 'MD007', :indent => 2\n");
    }

    #[test]
    fn test_markdownlint_import_drops_strings_with_both_quote_kinds() {
        // `.,;:!?'"` has no spellable form in a style file, so the option is
        // skipped and the rule kept; a single quote kind is fine
        let config = MarkdownlintConfig(
            serde_json::from_str(
                r#"{ "default": true, "MD026": { "punctuation": ".,;:!?'\"" }, "MD033": { "allowed_elements": ["br", "it's a \"q\""] }, "MD036": { "punctuation": "'" } }"#,
            )
            .unwrap(),
        );
        let doc = config.to_style_document(None);
        assert_eq!(
            doc.to_string(),
            "all\nrule 'MD026'\nrule 'MD033'\nrule 'MD036', :punctuation => \"'\"\n"
        );
        // What import emits, the parser must accept
        let reparsed = StyleDocument::parse(&doc.to_string()).unwrap();
        assert_eq!(reparsed.directive_count(), doc.directive_count());
    }

    #[test]
    fn test_markdownlint_import_header_comment() {
        let config = MarkdownlintConfig(serde_json::from_str(r#"{ "default": true }"#).unwrap());
        let doc = config.to_style_document(Some(".markdownlint.json"));
        assert_eq!(doc.to_string(), "# Imported from .markdownlint.json\n\nall\n");
    }

    #[test]
    fn test_rumdl_import_with_disable() {
        let config = RumdlConfig(
            toml::from_str("[global]\ndisable = [\"MD013\", \"MD029\"]\n\n[MD007]\nindent = 2\n").unwrap(),
        );
        let doc = config.to_style_document(None);
        assert_eq!(
            doc.to_string(),
            "all\nexclude_rule 'MD013'\nexclude_rule 'MD029'\nrule 'MD007', :indent => 2\n"
        );
    }

    #[test]
    fn test_rumdl_import_with_enable_list() {
        let config = RumdlConfig(
            toml::from_str("[global]\nenable = [\"MD029\", \"MD030\"]\ndisable = [\"MD030\"]\n\n[MD029]\nstyle = \"ordered\"\n")
                .unwrap(),
        );
        let doc = config.to_style_document(None);
        assert_eq!(doc.to_string(), "rule 'MD029', :style => 'ordered'\n");
    }

    #[test]
    fn test_rumdl_import_drops_strings_with_both_quote_kinds() {
        let config = RumdlConfig(
            toml::from_str(
                r#"
[MD026]
punctuation = ".,;:!?'\""
"#,
            )
            .unwrap(),
        );
        let doc = config.to_style_document(None);
        assert_eq!(doc.to_string(), "all\nrule 'MD026'\n");
        assert!(StyleDocument::parse(&doc.to_string()).is_ok());
    }

    #[test]
    fn test_export_import_round_trip() {
        let original = style_of(DEFAULT_STYLE);
        let json = to_markdownlint_json_string(&original);
        let config = MarkdownlintConfig(serde_json::from_str(&json).unwrap());
        let back = EffectiveStyle::resolve(&config.to_style_document(None));

        assert_eq!(back.enabled_count(), original.enabled_count());
        assert_eq!(back.excluded(), original.excluded());
        assert_eq!(
            back.get("MD007").unwrap().overrides,
            original.get("MD007").unwrap().overrides
        );
    }

    #[test]
    fn test_load_foreign_config_dispatch() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("config.json");
        fs::write(&json_path, r#"{ "default": true }"#).unwrap();
        assert!(matches!(
            load_foreign_config(&json_path).unwrap(),
            ForeignConfig::Markdownlint(_)
        ));

        let yaml_path = dir.path().join("config.yaml");
        fs::write(&yaml_path, "default: true\nMD013: false\n").unwrap();
        let ForeignConfig::Markdownlint(config) = load_foreign_config(&yaml_path).unwrap() else {
            panic!("expected markdownlint config");
        };
        assert_eq!(config.0.len(), 2);

        let toml_path = dir.path().join("config.toml");
        fs::write(&toml_path, "[global]\ndisable = [\"MD013\"]\n").unwrap();
        assert!(matches!(load_foreign_config(&toml_path).unwrap(), ForeignConfig::Rumdl(_)));

        let rc_path = dir.path().join("markdownlintrc");
        fs::write(&rc_path, r#"{ "default": false }"#).unwrap();
        assert!(matches!(
            load_foreign_config(&rc_path).unwrap(),
            ForeignConfig::Markdownlint(_)
        ));

        let txt_path = dir.path().join("config.txt");
        fs::write(&txt_path, "whatever").unwrap();
        assert!(matches!(
            load_foreign_config(&txt_path).unwrap_err(),
            StyleError::UnsupportedFormat { .. }
        ));

        let bad_path = dir.path().join("bad.json");
        fs::write(&bad_path, "{ not json").unwrap();
        assert!(matches!(load_foreign_config(&bad_path).unwrap_err(), StyleError::Import { .. }));
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!(ExportFormat::from_str("markdownlint"), Ok(ExportFormat::Markdownlint));
        assert_eq!(ExportFormat::from_str("JSON"), Ok(ExportFormat::Markdownlint));
        assert_eq!(ExportFormat::from_str("rumdl"), Ok(ExportFormat::RumdlToml));
        assert_eq!(ExportFormat::from_str("toml"), Ok(ExportFormat::RumdlToml));
        assert!(ExportFormat::from_str("ini").is_err());
    }
}
