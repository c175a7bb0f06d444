//! Name the member under a caret position

use anyhow::{Context, Result};
use bpname_core::{locate_member, CSharpParser, NameFactory};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output;
use crate::OutputFormat;

/// `line` and `column` are 1-based, as an editor shows them
pub fn run(file: &Path, line: usize, column: usize, cli: &crate::Cli) -> Result<()> {
    let config = super::load_config()?;
    let format = OutputFormat::resolve(cli.format, &config);

    let rendered = name_at(file, line, column, config.paths.canonicalize, format)?;
    println!("{}", rendered);
    Ok(())
}

/// Parse `file` and render the breakpoint name at the caret
pub fn name_at(
    file: &Path,
    line: usize,
    column: usize,
    canonicalize: bool,
    format: OutputFormat,
) -> Result<String> {
    let path: PathBuf = if canonicalize {
        file.canonicalize()
            .with_context(|| format!("resolving {}", file.display()))?
    } else {
        file.to_path_buf()
    };

    let tree = CSharpParser::new()
        .parse_file(&path)
        .with_context(|| format!("parsing {}", path.display()))?;

    let request = locate_member(&tree, line.saturating_sub(1), column.saturating_sub(1))?;
    let name = NameFactory::new(request).build();
    debug!(name = %name.name, "named member at caret");

    Ok(output::render(&[name], &[], format))
}
