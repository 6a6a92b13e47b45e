//! Handler for the `init` command.

use colored::*;

use mdlstyle_lib::exit_codes::exit;
use mdlstyle_lib::init::create_default_style;

/// Handle the init command: write a starter style file.
pub fn handle_init(path: Option<&str>, force: bool, quiet: bool) {
    let path = path.unwrap_or("style.rb");

    match create_default_style(path, force) {
        Ok(true) => {
            if !quiet {
                println!("Created default style file: {path}");
            }
        }
        Ok(false) => {
            eprintln!(
                "{}: '{path}' already exists (use --force to overwrite)",
                "Error".red().bold()
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: {e}", "Error".red().bold());
            exit::tool_error();
        }
    }
}
