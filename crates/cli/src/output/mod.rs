//! Output formatting for breakpoint names

pub mod json;
pub mod text;

use crate::OutputFormat;
use bpname_core::BreakpointName;

/// Render names (and per-file errors, for JSON) in the chosen format
pub fn render(names: &[BreakpointName], errors: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => text::format_names(names),
        OutputFormat::Json => json::format_names(names, errors),
    }
}
