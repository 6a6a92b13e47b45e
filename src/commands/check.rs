//! Handler for the `check` command.

use colored::*;
use std::fs;
use std::time::Instant;

use mdlstyle_lib::exit_codes::exit;
use mdlstyle_lib::output::formatters::json::format_all_warnings_as_json;
use mdlstyle_lib::output::{OutputFormat, OutputWriter};
use mdlstyle_lib::{StyleWarning, check_content};

/// Handle the check command: parse and validate style files, reporting findings.
pub fn handle_check(paths: &[String], output: &str, quiet: bool) {
    let format: OutputFormat = match output.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{}: {e}", "Error".red().bold());
            exit::tool_error();
        }
    };

    let start_time = Instant::now();
    let writer = OutputWriter::new(quiet);
    let mut results: Vec<(String, Vec<StyleWarning>)> = Vec::new();

    for path in paths {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{}: Failed to read '{path}': {e}", "Error".red().bold());
                exit::tool_error();
            }
        };
        results.push((path.clone(), check_content(&content)));
    }

    let total_issues: usize = results.iter().map(|(_, warnings)| warnings.len()).sum();
    let files_with_issues = results.iter().filter(|(_, warnings)| !warnings.is_empty()).count();

    match format {
        OutputFormat::Json => {
            writer
                .writeln(&format_all_warnings_as_json(&results))
                .unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                });
        }
        OutputFormat::Text => {
            let formatter = format.create_formatter();
            for (path, warnings) in &results {
                if warnings.is_empty() {
                    continue;
                }
                let formatted = formatter.format_warnings(warnings, path);
                if !formatted.is_empty() {
                    writer.writeln(&formatted).unwrap_or_else(|e| {
                        eprintln!("Error writing output: {e}");
                    });
                }
            }

            let duration_ms = start_time.elapsed().as_millis();
            let file_text = if results.len() == 1 { "file" } else { "files" };
            let summary = if total_issues > 0 {
                let files_display = if files_with_issues == results.len() {
                    format!("{files_with_issues}")
                } else {
                    format!("{files_with_issues}/{}", results.len())
                };
                format!(
                    "\n{} Found {total_issues} issues in {files_display} {file_text} ({duration_ms}ms)",
                    "Issues:".yellow().bold()
                )
            } else {
                format!(
                    "\n{} No issues found in {} {file_text} ({duration_ms}ms)",
                    "Success:".green().bold(),
                    results.len()
                )
            };
            writer.writeln_info(&summary).unwrap_or_else(|e| {
                eprintln!("Error writing output: {e}");
            });
        }
    }

    if total_issues > 0 {
        exit::issues_found();
    }
}
