//! Format command handler

use crate::cli::{FormatArgs, OutputFormat};
use crate::error::Result;
use crate::output::OutputWriter;
use schemapath_core::{format, Error as CoreError, Segment};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct Formatted {
    path: String,
    segments: Vec<Segment>,
}

/// Handle the format command
pub fn handle_format(args: FormatArgs, output: &mut OutputWriter) -> Result<()> {
    let segments: Vec<Segment> = serde_json::from_str(&args.segments)
        .map_err(|e| CoreError::json("expected an array of strings and integers", e))?;
    let path = format(&segments);
    debug!(segments = segments.len(), %path, "Formatted path");

    match output.format() {
        OutputFormat::Human => output.writeln(&path),
        _ => output.data(&Formatted { path, segments }),
    }
}
