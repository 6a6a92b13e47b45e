//! JSON output formatter

use crate::output::OutputFormatter;
use crate::validate::StyleWarning;
use serde_json::{Value, json};

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_warnings(&self, warnings: &[StyleWarning], file_path: &str) -> String {
        let json_warnings: Vec<Value> = warnings.iter().map(|w| warning_to_json(file_path, w)).collect();
        serde_json::to_string_pretty(&json_warnings).unwrap_or_default()
    }
}

/// Format findings from multiple files as a single JSON document
pub fn format_all_warnings_as_json(all_warnings: &[(String, Vec<StyleWarning>)]) -> String {
    let json_warnings: Vec<Value> = all_warnings
        .iter()
        .flat_map(|(file_path, warnings)| warnings.iter().map(|w| warning_to_json(file_path, w)))
        .collect();
    serde_json::to_string_pretty(&json_warnings).unwrap_or_default()
}

fn warning_to_json(file_path: &str, warning: &StyleWarning) -> Value {
    json!({
        "file": file_path,
        "line": warning.line,
        "column": warning.column,
        "kind": warning.kind,
        "severity": warning.severity,
        "message": warning.message,
    })
}
