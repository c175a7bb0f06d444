//! Plain text output: clipboard-ready names separated by blank lines

use bpname_core::BreakpointName;

pub fn format_names(names: &[BreakpointName]) -> String {
    names
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
