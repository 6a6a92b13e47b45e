//! Handler for the `completions` command.

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use colored::*;
use std::io::stdout;

use mdlstyle_lib::exit_codes::exit;

const SHELLS: &[(&str, &str)] = &[
    ("bash", "Bourne Again SHell"),
    ("zsh", "Z shell"),
    ("fish", "Friendly Interactive SHell"),
    ("powershell", "PowerShell"),
    ("elvish", "Elvish shell"),
];

/// Generate shell completion scripts.
pub fn handle_completions(shell: Option<Shell>, list: bool) {
    if list {
        println!("Available shells:");
        for (name, description) in SHELLS {
            println!("  {name:<12} {description}");
        }
        return;
    }

    let shell = shell.or_else(shell_from_env).unwrap_or_else(|| {
        eprintln!(
            "{}: Could not detect shell from $SHELL environment variable",
            "Error".red().bold()
        );
        eprintln!();
        eprintln!("Specify a shell explicitly, e.g. `mdlstyle completions zsh`,");
        eprintln!("or use --list to see all available shells");
        exit::tool_error();
    });

    generate(shell, &mut crate::Cli::command(), "mdlstyle", &mut stdout());
}

fn shell_from_env() -> Option<Shell> {
    let shell_path = std::env::var("SHELL").ok()?;
    let name = std::path::Path::new(&shell_path).file_name()?.to_str()?;
    match name {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "pwsh" | "powershell" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
