//! Handler for the `resolve` command.

use colored::*;

use mdlstyle_lib::exit_codes::exit;
use mdlstyle_lib::{EffectiveStyle, ParamMap, StyleDocument, StyleError, registry};

/// Resolved rule for JSON output.
#[derive(serde::Serialize)]
struct ResolvedRule {
    id: String,
    #[serde(skip_serializing_if = "ParamMap::is_empty")]
    overrides: ParamMap,
}

/// Resolved selection for JSON output.
#[derive(serde::Serialize)]
struct ResolvedStyle {
    all: bool,
    enabled: Vec<ResolvedRule>,
    excluded: Vec<String>,
}

/// Handle the resolve command: show the effective rule selection of a style file.
pub fn handle_resolve(path: &str, output: &str) {
    let doc = match StyleDocument::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{}: {e}", "Error".red().bold());
            match e {
                StyleError::Parse { .. } => exit::issues_found(),
                _ => exit::tool_error(),
            }
        }
    };
    let style = EffectiveStyle::resolve(&doc);

    match output.to_lowercase().as_str() {
        "json" => {
            let resolved = ResolvedStyle {
                all: style.enabled_all(),
                enabled: style
                    .rules()
                    .map(|rule| ResolvedRule {
                        id: rule.id.clone(),
                        overrides: rule.overrides.clone(),
                    })
                    .collect(),
                excluded: style.excluded().to_vec(),
            };
            match serde_json::to_string_pretty(&resolved) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing to JSON: {e}");
                    exit::tool_error();
                }
            }
        }
        _ => {
            println!("Effective style from {path}:");
            println!();
            println!("Enabled rules ({}):", style.enabled_count());
            for rule in style.rules() {
                let summary = registry::resolve(&rule.id).map(|info| info.description).unwrap_or("unknown rule");
                if rule.overrides.is_empty() {
                    println!("  {} - {summary}", rule.id);
                } else {
                    let overrides = rule
                        .overrides
                        .iter()
                        .map(|(key, value)| format!("{key} => {value}"))
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("  {} - {summary} ({overrides})", rule.id);
                }
            }
            if !style.excluded().is_empty() {
                println!();
                println!("Excluded rules ({}):", style.excluded().len());
                for id in style.excluded() {
                    let summary = registry::resolve(id).map(|info| info.description).unwrap_or("unknown rule");
                    println!("  {id} - {summary}");
                }
            }
        }
    }
}
