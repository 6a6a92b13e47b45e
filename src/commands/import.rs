//! Handler for the `import` command.

use colored::*;
use std::fs;
use std::path::Path;

use mdlstyle_lib::convert;
use mdlstyle_lib::exit_codes::exit;

/// Handle the import command: convert a foreign linter config into a style file.
pub fn handle_import(file: &str, output: Option<&str>, dry_run: bool, force: bool) {
    let config = match convert::load_foreign_config(file) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e}", "Import error".red().bold());
            exit::tool_error();
        }
    };

    let doc = config.to_style_document(Some(file));
    let content = doc.to_string();

    if dry_run {
        print!("{content}");
        return;
    }

    let output_path = output.unwrap_or("style.rb");
    if Path::new(output_path).exists() && !force {
        eprintln!(
            "{}: Output file '{output_path}' already exists (use --force to overwrite)",
            "Error".red().bold()
        );
        exit::tool_error();
    }

    match fs::write(output_path, content) {
        Ok(()) => {
            println!("Converted '{file}' to '{output_path}'");
            println!("You can now use: mdlstyle check {output_path}");
        }
        Err(e) => {
            eprintln!("{}: Failed to write to '{output_path}': {e}", "Error".red().bold());
            exit::tool_error();
        }
    }
}
