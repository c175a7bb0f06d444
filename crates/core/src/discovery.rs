//! C# source discovery
//!
//! Walks a project directory with the `ignore` crate, so `.gitignore`,
//! `.ignore` and `.git/info/exclude` are honoured, then applies the
//! `[paths] ignore` patterns from `.bpname.toml` on top (`bin/`, `obj/`, ...).

use anyhow::{Context, Result};
use ignore::overrides::{Override, OverrideBuilder};
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source files under `root` whose extension is one of `extensions`
/// (leading dot, compared case-insensitively), minus anything matching
/// `ignore_patterns`.
///
/// A `root` that is itself a file yields just that file when its extension
/// matches. Paths come back canonical and sorted.
pub fn discover_files(
    root: &Path,
    extensions: &[&str],
    ignore_patterns: &[String],
) -> Result<Vec<PathBuf>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("resolving {}", root.display()))?;

    if root.is_file() {
        let single = Some(root).filter(|path| has_extension(path, extensions));
        return Ok(single.into_iter().collect());
    }

    let walker = WalkBuilder::new(&root)
        .standard_filters(true)
        .overrides(exclusions(&root, ignore_patterns)?)
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(is_file)
        .map(|entry| absolute(&root, entry.into_path()))
        .filter(|path| has_extension(path, extensions))
        .collect();

    files.sort();
    debug!(root = %root.display(), count = files.len(), "discovered source files");
    Ok(files)
}

/// Turn `bin/` style patterns into negated overrides (`!bin/**`)
fn exclusions(root: &Path, ignore_patterns: &[String]) -> Result<Override> {
    let mut builder = OverrideBuilder::new(root);
    for pattern in ignore_patterns {
        let glob = match pattern.strip_suffix('/') {
            Some(dir) => format!("!{}/**", dir),
            None => format!("!{}", pattern),
        };
        builder
            .add(&glob)
            .with_context(|| format!("invalid ignore pattern `{}`", pattern))?;
    }
    Ok(builder.build()?)
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}

fn absolute(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}
