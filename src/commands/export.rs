//! Handler for the `export` command.

use colored::*;
use std::fs;
use std::path::Path;

use mdlstyle_lib::convert::ExportFormat;
use mdlstyle_lib::exit_codes::exit;
use mdlstyle_lib::{EffectiveStyle, StyleDocument, StyleError};

/// Handle the export command: render a style file as a foreign linter config.
pub fn handle_export(file: &str, format: &str, output: Option<&str>, dry_run: bool, force: bool) {
    let format: ExportFormat = match format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{}: {e}", "Error".red().bold());
            exit::tool_error();
        }
    };

    let doc = match StyleDocument::load(file) {
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
    let content = format.render(&style);

    if dry_run {
        print!("{content}");
        return;
    }

    let output_path = output.unwrap_or_else(|| format.default_filename());
    if Path::new(output_path).exists() && !force {
        eprintln!(
            "{}: Output file '{output_path}' already exists (use --force to overwrite)",
            "Error".red().bold()
        );
        exit::tool_error();
    }

    match fs::write(output_path, content) {
        Ok(()) => println!("Exported '{file}' to '{output_path}'"),
        Err(e) => {
            eprintln!("{}: Failed to write to '{output_path}': {e}", "Error".red().bold());
            exit::tool_error();
        }
    }
}
