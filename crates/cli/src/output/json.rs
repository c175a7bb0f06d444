//! JSON output formatting

use bpname_core::BreakpointName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub breakpoints: Vec<JsonBreakpoint>,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonBreakpoint {
    /// Qualified name as typed into the breakpoint dialog
    pub name: String,
    pub file: String,
    pub line: usize,
    /// Name plus `at file[:line]` locator, as copied to the clipboard
    pub text: String,
}

impl From<&BreakpointName> for JsonBreakpoint {
    fn from(name: &BreakpointName) -> Self {
        Self {
            name: name.name.clone(),
            file: name.file.display().to_string(),
            line: name.line,
            text: name.to_string(),
        }
    }
}

pub fn build_output(names: &[BreakpointName], errors: &[String]) -> JsonOutput {
    JsonOutput {
        breakpoints: names.iter().map(JsonBreakpoint::from).collect(),
        errors: errors.to_vec(),
    }
}

pub fn format_names(names: &[BreakpointName], errors: &[String]) -> String {
    serde_json::to_string_pretty(&build_output(names, errors))
        .unwrap_or_else(|e| format!("{{\"errors\": [\"{}\"]}}", e))
}
