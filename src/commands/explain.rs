//! Handler for the `explain` command.

use colored::*;

use mdlstyle_lib::exit_codes::exit;
use mdlstyle_lib::registry;
use mdlstyle_lib::{Directive, DirectiveKind};

/// Handle the explain command: show reference information for one rule.
pub fn handle_explain(rule_query: &str) {
    let Some(info) = registry::resolve(rule_query) else {
        eprintln!("{}: Rule '{}' not found.", "Error".red().bold(), rule_query);
        eprintln!("\nUse 'mdlstyle rules' to see all available rules.");
        exit::tool_error();
    };

    println!("{}", format!("{} - {}", info.id, info.description).bold());
    println!();
    println!("Alias: {}", info.alias);
    println!("Tags: {}", info.tags.join(", "));

    if !info.params.is_empty() {
        println!();
        println!("Options:");
        for spec in info.params {
            println!("  {} ({}, default {})", spec.name, spec.kind.name(), spec.default_value());
        }
    }

    println!();
    println!("Example:");
    let example = Directive::new(DirectiveKind::Rule {
        id: info.id.to_string(),
        params: info.default_params(),
    });
    println!("  {example}");
}
