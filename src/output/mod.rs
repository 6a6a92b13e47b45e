//! Output formatting for check results
//!
//! Findings can be rendered as human-readable text or as JSON for tooling.

use crate::validate::StyleWarning;
use std::io::{self, Write};

pub mod formatters;

pub use formatters::*;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a collection of findings for one file
    fn format_warnings(&self, warnings: &[StyleWarning], file_path: &str) -> String;

    /// Whether this formatter should use colors
    fn use_colors(&self) -> bool {
        false
    }
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format with colors
    Text,
    /// JSON array of findings
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "full" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl OutputFormat {
    /// Create a formatter instance for this format
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Output writer that keeps findings and chatter apart: findings always
/// print, informational lines are dropped in quiet mode.
pub struct OutputWriter {
    quiet: bool,
}

impl OutputWriter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn write(&self, content: &str) -> io::Result<()> {
        print!("{content}");
        io::stdout().flush()
    }

    pub fn writeln(&self, content: &str) -> io::Result<()> {
        println!("{content}");
        Ok(())
    }

    pub fn writeln_info(&self, content: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        println!("{content}");
        Ok(())
    }
}
