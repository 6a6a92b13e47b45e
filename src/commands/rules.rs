//! Handler for the `rules` command.

use mdlstyle_lib::exit_codes::exit;
use mdlstyle_lib::registry;

/// Rule metadata for JSON output.
#[derive(serde::Serialize)]
struct RuleListing {
    /// Rule id (e.g., "MD001")
    id: String,
    /// mdl alias in kebab-case (e.g., "header-increment")
    alias: String,
    /// Short description of what the rule checks
    summary: String,
    /// Tags this rule belongs to
    tags: Vec<String>,
    /// Configurable options with their defaults
    options: Vec<OptionListing>,
}

#[derive(serde::Serialize)]
struct OptionListing {
    name: String,
    kind: String,
    default: serde_json::Value,
}

/// Handle the rules command: list known rules, optionally filtered by tag.
pub fn handle_rules(tag: Option<&str>, output: &str) {
    if let Some(tag_filter) = tag
        && !registry::known_tag(tag_filter)
    {
        eprintln!("Invalid tag: '{tag_filter}'");
        eprintln!("Valid tags: {}", registry::all_tags().join(", "));
        exit::tool_error();
    }

    let rules: Vec<&registry::RuleInfo> = match tag {
        Some(tag_filter) => registry::rules_with_tag(tag_filter),
        None => registry::all_rules().iter().collect(),
    };

    match output.to_lowercase().as_str() {
        "json" => {
            let listings: Vec<RuleListing> = rules.iter().map(|info| build_listing(info)).collect();
            match serde_json::to_string_pretty(&listings) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing to JSON: {e}");
                    exit::tool_error();
                }
            }
        }
        _ => {
            let filter_info = match tag {
                Some(tag_filter) => format!(" (tag={tag_filter})"),
                None => String::new(),
            };
            println!("Available rules{filter_info}:");
            for info in &rules {
                println!("  {} - {}", info.id, info.description);
            }
            println!();
            println!("Total: {} rules", rules.len());
        }
    }
}

fn build_listing(info: &registry::RuleInfo) -> RuleListing {
    RuleListing {
        id: info.id.to_string(),
        alias: info.alias.to_string(),
        summary: info.description.to_string(),
        tags: info.tags.iter().map(|tag| tag.to_string()).collect(),
        options: info
            .params
            .iter()
            .map(|spec| OptionListing {
                name: spec.name.to_string(),
                kind: spec.kind.name().to_string(),
                default: spec.default_value().to_json(),
            })
            .collect(),
    }
}
