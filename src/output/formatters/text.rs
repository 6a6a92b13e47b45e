//! Default text output formatter with colors

use crate::output::OutputFormatter;
use crate::validate::{Severity, StyleWarning};
use colored::*;

/// Default human-readable formatter with colors
pub struct TextFormatter {
    use_colors: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_warnings(&self, warnings: &[StyleWarning], file_path: &str) -> String {
        let mut output = String::new();

        for warning in warnings {
            let kind = format!("[{}]", warning.kind.as_str());

            // Format: file:line:column: [kind] message
            let line = format!(
                "{}:{}:{}: {} {}",
                if self.use_colors {
                    file_path.blue().underline().to_string()
                } else {
                    file_path.to_string()
                },
                if self.use_colors {
                    warning.line.to_string().cyan().to_string()
                } else {
                    warning.line.to_string()
                },
                if self.use_colors {
                    warning.column.to_string().cyan().to_string()
                } else {
                    warning.column.to_string()
                },
                if self.use_colors {
                    match warning.severity {
                        Severity::Error => kind.red().to_string(),
                        Severity::Warning => kind.yellow().to_string(),
                    }
                } else {
                    kind
                },
                warning.message,
            );

            output.push_str(&line);
            output.push('\n');
        }

        if output.ends_with('\n') {
            output.pop();
        }

        output
    }

    fn use_colors(&self) -> bool {
        self.use_colors
    }
}
