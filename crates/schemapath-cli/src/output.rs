//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), including the
//! per-path results of the check command.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::{CheckReport, PathOutcome};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a check report
    fn format_check_report(&self, report: &CheckReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // For human format, use pretty JSON as fallback
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_check_report(&self, report: &CheckReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_check_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        self.emit(&formatted)
    }

    fn emit(&mut self, formatted: &str) -> Result<()> {
        trace!(bytes = formatted.len(), "Outputting data");

        // YAML documents already end with a newline
        match self.format {
            OutputFormat::Yaml => self.write(formatted),
            _ => self.writeln(formatted),
        }
    }

    /// Write a check report. Human output colors each line by outcome.
    pub fn check_report(&mut self, report: &CheckReport) -> Result<()> {
        if self.format != OutputFormat::Human {
            let formatted = self.format.format_check_report(report)?;
            return self.emit(&formatted);
        }

        for outcome in &report.results {
            let line = format_outcome_human(outcome);
            if outcome.valid {
                self.success(&line)?;
            } else if self.use_color {
                self.writeln(&line.red().to_string())?;
            } else {
                self.writeln(&line)?;
            }
        }
        self.info(&summary_line(report))
    }
}

/// Format a check report for human reading
fn format_check_report_human(report: &CheckReport) -> String {
    let mut output = String::new();
    for outcome in &report.results {
        output.push_str(&format_outcome_human(outcome));
        output.push('\n');
    }
    output.push_str(&summary_line(report));
    output
}

fn format_outcome_human(outcome: &PathOutcome) -> String {
    match (&outcome.path, &outcome.error) {
        (Some(path), _) if outcome.valid => format!("✓ {}", path),
        (_, Some(error)) => format!("✗ {}: {}", outcome.input, error),
        _ => format!("✗ {}", outcome.input),
    }
}

fn summary_line(report: &CheckReport) -> String {
    let invalid = report.invalid_count();
    if invalid == 0 {
        format!("{} path(s) valid against {}", report.total(), report.schema)
    } else {
        format!(
            "{} of {} path(s) invalid against {}",
            invalid,
            report.total(),
            report.schema
        )
    }
}

/// Cloneable in-memory sink for capturing writer output in tests
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
