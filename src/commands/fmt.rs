//! Handler for the `fmt` command.

use colored::*;
use std::fs;

use mdlstyle_lib::StyleDocument;
use mdlstyle_lib::exit_codes::exit;
use mdlstyle_lib::output::OutputWriter;

/// Handle the fmt command: rewrite style files in canonical form.
pub fn handle_fmt(paths: &[String], check: bool, use_stdout: bool, quiet: bool) {
    let writer = OutputWriter::new(quiet);
    let mut changed = 0usize;
    let mut unchanged = 0usize;

    for path in paths {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{}: Failed to read '{path}': {e}", "Error".red().bold());
                exit::tool_error();
            }
        };
        let doc = match StyleDocument::parse(&content) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("{}: {path}: {e}", "Error".red().bold());
                exit::issues_found();
            }
        };
        let canonical = doc.to_string();

        if use_stdout {
            writer.write(&canonical).unwrap_or_else(|e| {
                eprintln!("Error writing output: {e}");
            });
            continue;
        }

        if canonical == content {
            unchanged += 1;
            continue;
        }
        changed += 1;

        if check {
            writer.writeln(&format!("Would reformat: {path}")).unwrap_or_else(|e| {
                eprintln!("Error writing output: {e}");
            });
        } else {
            if let Err(e) = fs::write(path, &canonical) {
                eprintln!("{}: Failed to write '{path}': {e}", "Error".red().bold());
                exit::tool_error();
            }
            writer.writeln_info(&format!("Reformatted: {path}")).unwrap_or_else(|e| {
                eprintln!("Error writing output: {e}");
            });
        }
    }

    if use_stdout {
        return;
    }

    let changed_text = if changed == 1 { "file" } else { "files" };
    let unchanged_text = if unchanged == 1 { "file" } else { "files" };
    if check {
        if changed > 0 {
            writer
                .writeln_info(&format!(
                    "{changed} {changed_text} would be reformatted, {unchanged} {unchanged_text} already formatted"
                ))
                .unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                });
            exit::issues_found();
        }
        writer
            .writeln_info(&format!("{unchanged} {unchanged_text} already formatted"))
            .unwrap_or_else(|e| {
                eprintln!("Error writing output: {e}");
            });
    } else {
        writer
            .writeln_info(&format!(
                "{changed} {changed_text} reformatted, {unchanged} {unchanged_text} left unchanged"
            ))
            .unwrap_or_else(|e| {
                eprintln!("Error writing output: {e}");
            });
    }
}
