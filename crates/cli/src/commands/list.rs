//! List the breakpoint names of every member under a path

use anyhow::Result;
use bpname_core::{breakpoint_names, discover_files, BreakpointName, CSharpParser};
use colored::Colorize;
use std::path::Path;
use std::time::Instant;

use crate::output;
use crate::OutputFormat;

pub fn run(path: Option<&Path>, cli: &crate::Cli) -> Result<()> {
    let start = Instant::now();
    let root = path.unwrap_or_else(|| Path::new("."));

    let config = super::load_config()?;
    let format = OutputFormat::resolve(cli.format, &config);

    let (names, errors, file_count) = collect_names(root, &config.paths.ignore)?;

    if format == OutputFormat::Text {
        for error in &errors {
            eprintln!("  {}: {}", "warn".yellow(), error);
        }
    }

    if !names.is_empty() || format == OutputFormat::Json {
        println!("{}", output::render(&names, &errors, format));
    }

    eprintln!(
        "  {} — {} files, {} names ({:.1}s)",
        "done".green(),
        file_count,
        names.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Discover, parse and name. Returns `(names, parse_errors, file_count)`.
pub fn collect_names(
    root: &Path,
    ignore_patterns: &[String],
) -> Result<(Vec<BreakpointName>, Vec<String>, usize)> {
    let parser = CSharpParser::new();
    let files = discover_files(root, parser.file_extensions(), ignore_patterns)?;

    let (trees, errors) = parser.parse_files_parallel(&files);
    let names = trees.iter().flat_map(breakpoint_names).collect();

    Ok((names, errors, files.len()))
}
